//! # gridpad-core
//!
//! Core data model and operations for the gridpad grid backend.
//!
//! This crate provides the fundamental types:
//! - [`Spreadsheet`] - An in-memory grid: ordered columns, ordered rows, metadata
//! - [`ColumnDefinition`] and [`ColumnType`] - Column identity and declared type
//! - [`Row`] - A mapping from column key to string cell value
//!
//! Every operation that changes a spreadsheet's shape takes `&self` and
//! returns a new value; a caller-supplied spreadsheet is never mutated.
//!
//! ## Example
//!
//! ```rust
//! use gridpad_core::{ColumnDefinition, ColumnType, Spreadsheet};
//!
//! let sheet = Spreadsheet::starter();
//! let sheet = sheet.update_cell(0, "name", "Ada").unwrap();
//! let sheet = sheet.add_row();
//! let sheet = sheet
//!     .add_column(ColumnDefinition::new("email", "Email", ColumnType::String))
//!     .unwrap();
//!
//! assert_eq!(sheet.rows.len(), 6);
//! assert_eq!(sheet.columns.len(), 4);
//! assert!(sheet.validate());
//! ```

pub mod column;
pub mod error;
pub mod row;
pub mod spreadsheet;

// Re-exports for convenience
pub use column::{ColumnDefinition, ColumnType};
pub use error::{Error, Result};
pub use row::Row;
pub use spreadsheet::Spreadsheet;
