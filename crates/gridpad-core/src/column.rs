//! Column types

/// Declared data type of a column.
///
/// Descriptive only: cells are stored as strings and nothing coerces or
/// checks them against this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnType {
    String,
    Number,
    Date,
}

/// Definition of a single column.
///
/// Identity is `key`; two columns in the same spreadsheet must not share
/// one (enforced by [`Spreadsheet::add_column`], not by construction).
/// A definition is immutable once built — replacing a column is not
/// supported.
///
/// [`Spreadsheet::add_column`]: crate::Spreadsheet::add_column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDefinition {
    /// Unique identifier for the column.
    pub key: String,
    /// Display name.
    pub label: String,
    /// Declared data type (`type` on the wire).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    /// Create a new column definition.
    pub fn new<K, L>(key: K, label: L, column_type: ColumnType) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_column() {
        let col = ColumnDefinition::new("age", "Age", ColumnType::Number);
        assert_eq!(col.key, "age");
        assert_eq!(col.label, "Age");
        assert_eq!(col.column_type, ColumnType::Number);
    }
}
