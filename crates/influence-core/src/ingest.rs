//! Dataset ingestion and normalization
//!
//! Reads an influencer table, converts magnitude strings to numbers,
//! derives the engagement rate and filters incomplete rows.
//!
//! Row handling, in order:
//! 1. present `followers` / `Average views` cells are converted; a cell that
//!    is not a number aborts the load (NA tokens such as `N/A` or `NaN` are
//!    missing, not present)
//! 2. rows with an empty cell (scope set by [`MissingValueScope`]) are
//!    dropped
//! 3. negative counts abort the load
//! 4. zero-follower rows are dropped or rejected per [`ZeroFollowerPolicy`]

use std::io::Read;
use std::path::Path;

use influence_io::{convert_to_number, delimiter_for_path, CsvReader, DataReader, IoError, RawRow};

use crate::config::{IngestConfig, MissingValueScope, ZeroFollowerPolicy, DEFAULT_DELIMITER};
use crate::error::{RecommendError, Result};
use crate::record::{Catalog, InfluencerRecord};

/// Load a catalog with the default configuration
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    load_with_config(path, &IngestConfig::default())
}

/// Load a catalog from a CSV file
pub fn load_with_config(path: impl AsRef<Path>, config: &IngestConfig) -> Result<Catalog> {
    config.validate()?;

    let path = path.as_ref();
    let path_str = path.to_string_lossy();
    let reader = CsvReader::open_with_options(&path_str, delimiter_for(&path_str, config), true)?;

    let mut catalog = build_catalog(&reader, config)?;
    catalog.source = Some(path.to_path_buf());
    Ok(catalog)
}

/// Pick the field delimiter for a file
///
/// An explicitly configured delimiter wins; the default defers to the file
/// extension (`.tsv` is tab-separated).
fn delimiter_for(path: &str, config: &IngestConfig) -> u8 {
    if config.delimiter == DEFAULT_DELIMITER {
        delimiter_for_path(path).unwrap_or(DEFAULT_DELIMITER as u8)
    } else {
        config.delimiter as u8
    }
}

/// Load a catalog from any CSV byte source
pub fn load_from_reader<R: Read>(source: R, config: &IngestConfig) -> Result<Catalog> {
    config.validate()?;

    let reader = CsvReader::from_reader(source, config.delimiter as u8, true)?;
    build_catalog(&reader, config)
}

/// Column positions of the required fields
struct ColumnIndices {
    username: usize,
    followers: usize,
    average_views: usize,
}

/// Why a row was left out of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    MissingValue,
    ZeroFollowers,
}

enum RowOutcome {
    Keep(InfluencerRecord),
    Drop(DropReason),
}

/// Build a catalog from any reader
pub fn build_catalog(reader: &dyn DataReader, config: &IngestConfig) -> Result<Catalog> {
    let schema = reader.read_schema()?;
    let find = |name: &str| {
        schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
    };

    let columns = ColumnIndices {
        username: find(&config.columns.username)?,
        followers: find(&config.columns.followers)?,
        average_views: find(&config.columns.average_views)?,
    };

    let rows = reader.read_rows()?;
    let rows_read = rows.len();
    let mut records = Vec::with_capacity(rows_read);
    let mut rows_dropped = 0;

    for row in &rows {
        match normalize_row(row, &columns, config)? {
            RowOutcome::Keep(record) => records.push(record),
            RowOutcome::Drop(reason) => {
                rows_dropped += 1;
                tracing::debug!("Dropping line {}: {:?}", row.line, reason);
            }
        }
    }

    let catalog = Catalog {
        records,
        rows_read,
        rows_dropped,
        source: None,
    };

    let duplicates = catalog.duplicate_usernames();
    if !duplicates.is_empty() {
        tracing::warn!(
            "{} duplicate username(s) in catalog, first: {}",
            duplicates.len(),
            duplicates[0]
        );
    }

    tracing::info!(
        "Loaded {} influencers ({} rows read, {} dropped)",
        catalog.len(),
        rows_read,
        rows_dropped
    );

    Ok(catalog)
}

/// Turn one raw row into a record, or say why it was dropped
fn normalize_row(
    row: &RawRow,
    columns: &ColumnIndices,
    config: &IngestConfig,
) -> Result<RowOutcome> {
    let followers = convert_cell(row, columns.followers, &config.columns.followers)?;
    let average_views = convert_cell(row, columns.average_views, &config.columns.average_views)?;
    let username = row.get(columns.username);

    let incomplete = match config.missing_values {
        MissingValueScope::AllColumns => row.has_missing(),
        MissingValueScope::RequiredColumns => false,
    };

    let (username, followers, average_views) = match (username, followers, average_views) {
        (Some(u), Some(f), Some(v)) if !incomplete => (u, f, v),
        _ => return Ok(RowOutcome::Drop(DropReason::MissingValue)),
    };

    check_non_negative(row, &config.columns.followers, followers)?;
    check_non_negative(row, &config.columns.average_views, average_views)?;

    if followers == 0.0 {
        return match config.zero_followers {
            ZeroFollowerPolicy::Drop => Ok(RowOutcome::Drop(DropReason::ZeroFollowers)),
            ZeroFollowerPolicy::Reject => Err(RecommendError::ZeroFollowers {
                line: row.line,
                username: username.to_string(),
            }),
        };
    }

    Ok(RowOutcome::Keep(InfluencerRecord::new(
        username,
        followers,
        average_views,
    )))
}

fn convert_cell(row: &RawRow, index: usize, column: &str) -> Result<Option<f64>> {
    row.get(index)
        .map(|text| {
            convert_to_number(text).map_err(|source| RecommendError::Parse {
                line: row.line,
                column: column.to_string(),
                source,
            })
        })
        .transpose()
}

fn check_non_negative(row: &RawRow, column: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(RecommendError::InvalidRange {
            line: row.line,
            column: column.to_string(),
            value,
        });
    }
    Ok(())
}
