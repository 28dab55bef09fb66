//! Data reader trait and common types
//!
//! The `DataReader` trait provides a uniform interface for reading
//! influencer tables from the supported file formats.

use crate::schema::{DataSchema, RawRow};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for reading tabular data from various formats
pub trait DataReader: Send + Sync {
    /// Read the schema (column names, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read a single column by name. Empty cells are `None`.
    fn read_column(&self, name: &str) -> IoResult<Vec<Option<String>>>;

    /// Read every data row in file order
    fn read_rows(&self) -> IoResult<Vec<RawRow>>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Field delimiter implied by a file extension, if it is a known table format
pub fn delimiter_for_path(path: &str) -> Option<u8> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "csv" => Some(b','),
        "tsv" => Some(b'\t'),
        _ => None,
    }
}

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    match delimiter_for_path(path) {
        #[cfg(feature = "csv")]
        Some(delimiter) => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_options(path, delimiter, true)?))
        }

        _ => Err(IoError::InvalidFormat(format!("Unsupported file type: {}", path))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
    }

    extensions
}
