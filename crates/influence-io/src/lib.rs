//! influence-io - Tabular I/O for influencer datasets
//!
//! This crate provides the lowest layer of the recommendation pipeline:
//!
//! - **CSV**: Comma- or tab-separated influencer tables
//! - **Schema**: Column descriptors and lookup by header name
//! - **Magnitude strings**: `"1.2M"`, `"500K"`, `"1,200,000"` to `f64`
//!
//! # Design
//!
//! All readers implement the `DataReader` trait for uniform access.
//! Cells are returned as raw text; empty cells and the usual NA tokens
//! (`N/A`, `NaN`, `null`, ...) come back as `None` so the caller decides how
//! missing values are treated.

pub mod magnitude;
pub mod reader;
pub mod schema;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use magnitude::*;
pub use reader::*;
pub use schema::*;

#[cfg(feature = "csv")]
pub use csv_reader::{is_na_token, CsvReader, NA_VALUES};
