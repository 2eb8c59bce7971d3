//! Row types

use std::collections::BTreeMap;

use crate::column::ColumnDefinition;

/// A single row: a mapping from column key to string cell value.
///
/// A row may carry keys beyond the owning spreadsheet's declared columns;
/// structural validation only checks that every declared key is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Cell values keyed by column key.
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row with an empty-string entry for every given column.
    pub fn blank(columns: &[ColumnDefinition]) -> Self {
        Self {
            data: columns
                .iter()
                .map(|col| (col.key.clone(), String::new()))
                .collect(),
        }
    }

    /// Get a cell value by column key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Check whether the row has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}
