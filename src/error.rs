//! Error types for extension config generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator.
///
/// Row numbers are 1-based positions within the parsed record set (the CSV
/// header row is not counted). Any error aborts the whole run; there is no
/// partial-success path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Row {row} of CSV data has {count} fields, expected at least 9")]
    ShortRow { row: usize, count: usize },

    #[error("The phone number of an extension cannot begin with a [0] (row {row} of CSV data)")]
    LeadingZeroExtension { row: usize },

    #[error("Missing extension number in row {row} of CSV data")]
    MissingExtension { row: usize },

    #[error("Missing caller ID in row {row} of CSV data")]
    MissingCallerId { row: usize },

    #[error("Missing username in row {row} of CSV data")]
    MissingUsername { row: usize },

    #[error("Missing authentication method in row {row} of CSV data")]
    MissingAuthMethod { row: usize },

    #[error("IP address for row {row} of CSV data cannot be left blank if authentication method for this entry is set to [IP]")]
    MissingIpAddress { row: usize },

    #[error("Password for row {row} of CSV data cannot be left blank if authentication method for this entry is set to [PWD]")]
    MissingPassword { row: usize },

    #[error("Two extensions cannot have same number: {number} (rows {row} and {other_row})")]
    DuplicateExtensionNumber {
        number: String,
        row: usize,
        other_row: usize,
    },

    #[error("An extension and a dial group cannot have the same number: {number} (row {row})")]
    ExtensionGroupCollision { number: String, row: usize },

    #[error("More than three dial groups cannot be defined (group {tag} in row {row})")]
    TooManyDialGroups { tag: String, row: usize },

    #[error("Unknown authentication method '{method}' in row {row} of CSV data")]
    UnknownAuthMethod { method: String, row: usize },

    #[error("Multiple validation errors:\n{}", messages.join("\n"))]
    Multiple { messages: Vec<String> },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
