//! Extension CSV ingestion module.

mod rows;

pub use rows::{parse_extension_file, parse_extension_reader};
