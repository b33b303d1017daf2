//! CSV reader for extension rows.

use crate::config::RECORD_FIELDS;
use crate::error::{ConfigError, Result};
use crate::model::ExtensionRecord;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Parse an extension CSV file into normalized records.
///
/// The first row is treated as a header and skipped by position regardless
/// of content. Rows whose first field is empty before normalization are
/// treated as blank/separator rows and skipped entirely.
pub fn parse_extension_file(path: &Path) -> Result<Vec<ExtensionRecord>> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    parse_extension_reader(file)
}

/// Parse extension CSV data from any reader.
///
/// Surviving rows must carry at least 9 fields (extension number, caller ID,
/// username, auth method, password, IP address, three dial-group refs);
/// extra trailing fields are ignored.
pub fn parse_extension_reader<R: Read>(reader: R) -> Result<Vec<ExtensionRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for (row_index, row) in csv_reader.records().enumerate() {
        let row = row?;

        // Header row, skipped by position
        if row_index == 0 {
            continue;
        }

        // Blank/separator row
        if row.get(0).map_or(true, str::is_empty) {
            continue;
        }

        if row.len() < RECORD_FIELDS {
            return Err(ConfigError::ShortRow {
                row: row_index,
                count: row.len(),
            });
        }

        let fields: [&str; RECORD_FIELDS] = std::array::from_fn(|i| &row[i]);
        records.push(ExtensionRecord::normalize(fields));
    }

    tracing::info!("{} records processed from input CSV file", records.len());

    Ok(records)
}
