//! The spreadsheet value and its operations.

use std::collections::BTreeMap;

use crate::column::{ColumnDefinition, ColumnType};
use crate::error::{Error, Result};
use crate::row::Row;

/// Number of blank rows in the starter spreadsheet.
const STARTER_ROW_COUNT: usize = 5;

/// An in-memory grid: ordered columns, ordered rows, free-form metadata.
///
/// A `Spreadsheet` is a self-contained snapshot that travels through a
/// single request. Operations that change its shape take `&self` and return
/// a new instance built from the unchanged parts plus a modified copy of
/// the changed part, so a caller's value is never observably altered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spreadsheet {
    /// Column definitions, in display order. Keys must be unique.
    pub columns: Vec<ColumnDefinition>,
    /// Rows, in display order.
    pub rows: Vec<Row>,
    /// Free-form metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: BTreeMap<String, String>,
}

impl Spreadsheet {
    /// Create a spreadsheet with the given columns and rows and no metadata.
    pub fn new(columns: Vec<ColumnDefinition>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            metadata: BTreeMap::new(),
        }
    }

    /// The fixed starter spreadsheet used to seed a client with no saved
    /// data: `name`/`age`/`birthdate` columns and five blank rows, with
    /// metadata `{"created": "default"}`.
    pub fn starter() -> Self {
        let columns = vec![
            ColumnDefinition::new("name", "Name", ColumnType::String),
            ColumnDefinition::new("age", "Age", ColumnType::Number),
            ColumnDefinition::new("birthdate", "Birthdate", ColumnType::Date),
        ];
        let rows = (0..STARTER_ROW_COUNT)
            .map(|_| Row::blank(&columns))
            .collect();
        let mut metadata = BTreeMap::new();
        metadata.insert("created".to_string(), "default".to_string());

        Self {
            columns,
            rows,
            metadata,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column definition by key.
    pub fn column(&self, key: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|col| col.key == key)
    }

    /// Check whether a column with the given key is declared.
    pub fn has_column(&self, key: &str) -> bool {
        self.column(key).is_some()
    }

    /// Check structural validity: every declared column key must have an
    /// entry in every row's mapping. Cell contents are not inspected and
    /// row keys beyond the declared columns are tolerated. Vacuously true
    /// with zero rows or zero columns.
    pub fn validate(&self) -> bool {
        self.rows
            .iter()
            .all(|row| self.columns.iter().all(|col| row.contains_key(&col.key)))
    }

    /// Return a copy of the spreadsheet with the cell at
    /// (`row_index`, `column_key`) set to `value`. A row that lacked an
    /// entry for the key gains one; every other cell, the column list, and
    /// the metadata carry over unchanged.
    ///
    /// Fails with [`Error::RowOutOfBounds`] when `row_index` is past the
    /// last row and with [`Error::UnknownColumnKey`] when no declared
    /// column has `column_key`.
    pub fn update_cell(&self, row_index: usize, column_key: &str, value: &str) -> Result<Self> {
        if row_index >= self.rows.len() {
            return Err(Error::RowOutOfBounds {
                index: row_index,
                len: self.rows.len(),
            });
        }
        if !self.has_column(column_key) {
            return Err(Error::UnknownColumnKey(column_key.to_string()));
        }

        let mut rows = self.rows.clone();
        rows[row_index]
            .data
            .insert(column_key.to_string(), value.to_string());

        Ok(Self {
            columns: self.columns.clone(),
            rows,
            metadata: self.metadata.clone(),
        })
    }

    /// Return a copy of the spreadsheet with one blank row appended: an
    /// empty-string entry for every declared column key (an empty mapping
    /// when there are no columns). Always succeeds.
    pub fn add_row(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.push(Row::blank(&self.columns));

        Self {
            columns: self.columns.clone(),
            rows,
            metadata: self.metadata.clone(),
        }
    }

    /// Return a copy of the spreadsheet with `column` appended to the
    /// column list and an empty-string entry for `column.key` added to
    /// every row. Entries under other keys are untouched; metadata is
    /// unchanged.
    ///
    /// Fails with [`Error::DuplicateColumnKey`] when a declared column
    /// already uses `column.key`.
    pub fn add_column(&self, column: ColumnDefinition) -> Result<Self> {
        if self.has_column(&column.key) {
            return Err(Error::DuplicateColumnKey(column.key));
        }

        let mut rows = self.rows.clone();
        for row in &mut rows {
            row.data.insert(column.key.clone(), String::new());
        }
        let mut columns = self.columns.clone();
        columns.push(column);

        Ok(Self {
            columns,
            rows,
            metadata: self.metadata.clone(),
        })
    }
}
