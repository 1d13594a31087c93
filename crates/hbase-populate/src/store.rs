//! Store abstraction: row mutations and the tables that accept them.

use crate::error::StoreError;
use webpage_generator::PageRecord;

/// Longest row key HBase accepts, in bytes.
pub const MAX_ROW_KEY_LENGTH: usize = i16::MAX as usize;

/// One `family:qualifier` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: String,
    pub value: Vec<u8>,
}

impl Cell {
    pub fn new(column: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// All cells written under one row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMutation {
    pub row_key: String,
    pub cells: Vec<Cell>,
}

impl RowMutation {
    pub fn new(row_key: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            row_key: row_key.into(),
            cells,
        }
    }

    /// Encode every field but the row key as UTF-8 cells.
    pub fn from_record(record: &PageRecord) -> Self {
        let cells = record
            .columns()
            .into_iter()
            .map(|(column, value)| Cell::new(column.to_string(), value))
            .collect();
        Self::new(record.row_key(), cells)
    }

    /// Check the row against HBase's key and column rules.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.row_key.is_empty() {
            return Err(StoreError::InvalidMutation("row key is empty".to_string()));
        }
        if self.row_key.len() > MAX_ROW_KEY_LENGTH {
            return Err(StoreError::InvalidMutation(format!(
                "row key is {} bytes, limit is {MAX_ROW_KEY_LENGTH}",
                self.row_key.len()
            )));
        }
        if self.cells.is_empty() {
            return Err(StoreError::InvalidMutation(format!(
                "row '{}' has no cells",
                self.row_key
            )));
        }
        for cell in &self.cells {
            match cell.column.split_once(':') {
                Some((family, _)) if !family.is_empty() => {}
                _ => {
                    return Err(StoreError::InvalidMutation(format!(
                        "column '{}' is not family-qualified",
                        cell.column
                    )))
                }
            }
        }
        Ok(())
    }
}

/// A bound table that accepts multi-row puts.
pub trait Table {
    /// Table name.
    fn name(&self) -> &str;

    /// Write `rows` in one request. Either all rows are accepted or an error
    /// is returned.
    fn put_rows(&mut self, rows: &[RowMutation]) -> Result<(), StoreError>;
}

/// Opens a connection to a store and binds it to a table.
pub trait Connector {
    type Table: Table;

    fn open(&self, host: &str, table: &str) -> Result<Self::Table, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use webpage_generator::StatusCode;

    #[test]
    fn test_from_record_encodes_all_fields() {
        let record = PageRecord::new(
            "org.test.news#articles/012".to_string(),
            "<html></html>".to_string(),
            "Title".to_string(),
            Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap(),
            StatusCode::InternalServerError,
            vec!["http://demo.net/app".to_string()],
            vec![],
        );

        let mutation = RowMutation::from_record(&record);
        assert_eq!(mutation.row_key, "org.test.news#articles/012");
        assert_eq!(mutation.cells.len(), 7);
        assert!(mutation.cells.iter().all(|c| c.column != "row_key"));
        assert!(mutation
            .cells
            .contains(&Cell::new("metadata:status", "500")));
        assert!(mutation.cells.contains(&Cell::new("metadata:size", "13")));
        mutation.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_rows() {
        let cells = vec![Cell::new("metadata:title", "x")];

        assert!(RowMutation::new("", cells.clone()).validate().is_err());
        assert!(RowMutation::new("k".repeat(MAX_ROW_KEY_LENGTH + 1), cells.clone())
            .validate()
            .is_err());
        assert!(RowMutation::new("key", vec![]).validate().is_err());
        assert!(RowMutation::new("key", vec![Cell::new("title", "x")])
            .validate()
            .is_err());
        assert!(RowMutation::new("key", vec![Cell::new(":title", "x")])
            .validate()
            .is_err());
        assert!(RowMutation::new("key", cells).validate().is_ok());
    }
}
