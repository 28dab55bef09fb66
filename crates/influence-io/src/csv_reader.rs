//! CSV file reader

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, DataSchema, RawRow};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell values read as missing, in addition to the empty cell
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Check whether a (trimmed) cell value stands for a missing value
pub fn is_na_token(value: &str) -> bool {
    value.is_empty() || NA_VALUES.contains(&value)
}

/// CSV table reader
///
/// The whole table is read when the reader is opened; influencer catalogs
/// are small enough that a second pass over the file is not worth it.
pub struct CsvReader {
    path: Option<String>,
    schema: DataSchema,
    rows: Vec<RawRow>,
}

impl CsvReader {
    /// Open a comma-delimited CSV file with a header row
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, b',', true)
    }

    /// Open a CSV file with options
    pub fn open_with_options(path: &str, delimiter: u8, has_header: bool) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let mut reader = Self::from_reader(BufReader::new(file), delimiter, has_header)?;
        reader.path = Some(path.to_string());
        Ok(reader)
    }

    /// Read a CSV table from any byte source
    pub fn from_reader<R: Read>(source: R, delimiter: u8, has_header: bool) -> IoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_header)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut headers: Vec<String> = if has_header {
            reader
                .headers()
                .map_err(map_csv_error)?
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(map_csv_error)?;

            if !has_header && headers.is_empty() {
                headers = (0..record.len()).map(|j| format!("col_{}", j)).collect();
            }

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(i + if has_header { 2 } else { 1 });

            let cells = record
                .iter()
                .map(|value| (!is_na_token(value)).then(|| value.to_string()))
                .collect();

            rows.push(RawRow::new(line, cells));
        }

        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(j, name)| {
                let empty = rows.iter().filter(|row| row.get(j).is_none()).count();
                ColumnDescriptor::new(name).with_empty_cells(empty)
            })
            .collect();

        let schema = DataSchema::new(columns, rows.len());

        Ok(Self {
            path: None,
            schema,
            rows,
        })
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<Vec<Option<String>>> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(col_index).map(|s| s.to_string()))
            .collect())
    }

    fn read_rows(&self) -> IoResult<Vec<RawRow>> {
        Ok(self.rows.clone())
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

fn map_csv_error(e: csv::Error) -> IoError {
    if e.is_io_error() {
        IoError::Io(e.to_string())
    } else {
        IoError::InvalidFormat(e.to_string())
    }
}
