//! Extension set validation module.

mod validate;

pub use validate::{validate_records, validate_records_with, ValidationMode};
