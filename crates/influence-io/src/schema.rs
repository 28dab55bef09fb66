//! Schema and row types for tabular data

use serde::{Deserialize, Serialize};

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in header order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of data records (header excluded)
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name (exact, case-sensitive match)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name as written in the header
    pub name: String,

    /// Number of empty cells seen while scanning the file
    pub empty_cells: usize,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            empty_cells: 0,
        }
    }

    /// Set the empty cell count
    pub fn with_empty_cells(mut self, empty_cells: usize) -> Self {
        self.empty_cells = empty_cells;
        self
    }
}

/// One data row with its cells as raw text
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source, header included
    pub line: usize,

    /// Cells in header order. Empty or whitespace-only cells are `None`.
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<Option<String>>) -> Self {
        Self { line, cells }
    }

    /// Get a cell by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Check whether any cell is missing
    pub fn has_missing(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }
}
