//! Validation logic for the full extension set.
//!
//! Checks run per record in input order, and within one record in a fixed
//! order; the first failure determines which error surfaces for malformed
//! input. Row numbers in errors are 1-based positions in the record set.

use crate::error::{ConfigError, Result};
use crate::model::{AuthMethod, ExtensionRecord};

/// How validation findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first finding and report only that one.
    #[default]
    FailFast,
    /// Run every check and report all findings together. Check order per
    /// record is unchanged, only the stopping behavior differs.
    CollectAll,
}

/// Validate the full record set, failing fast on the first finding.
pub fn validate_records(records: &[ExtensionRecord]) -> Result<()> {
    validate_records_with(records, ValidationMode::FailFast)
}

/// Validate the full record set with an explicit reporting mode.
pub fn validate_records_with(records: &[ExtensionRecord], mode: ValidationMode) -> Result<()> {
    let mut findings = Vec::new();

    for index in 0..records.len() {
        let mut errors = record_errors(records, index);
        match mode {
            ValidationMode::FailFast => {
                if let Some(error) = errors.drain(..).next() {
                    return Err(error);
                }
            }
            ValidationMode::CollectAll => findings.append(&mut errors),
        }
    }

    match findings.len() {
        0 => Ok(()),
        1 => Err(findings.remove(0)),
        _ => Err(ConfigError::Multiple {
            messages: findings.iter().map(|e| e.to_string()).collect(),
        }),
    }
}

/// All findings for the record at `index`, in check order.
fn record_errors(records: &[ExtensionRecord], index: usize) -> Vec<ConfigError> {
    let record = &records[index];
    let row = index + 1;
    let mut errors = Vec::new();

    if record.extension_number().starts_with('0') {
        errors.push(ConfigError::LeadingZeroExtension { row });
    }
    if record.extension_number().is_empty() {
        errors.push(ConfigError::MissingExtension { row });
    }
    if record.caller_id().is_empty() {
        errors.push(ConfigError::MissingCallerId { row });
    }
    if record.username().is_empty() {
        errors.push(ConfigError::MissingUsername { row });
    }
    if record.auth_method().is_empty() {
        errors.push(ConfigError::MissingAuthMethod { row });
    }
    if record.auth() == Some(AuthMethod::Ip) && record.ip_address().is_empty() {
        errors.push(ConfigError::MissingIpAddress { row });
    }
    if record.auth() == Some(AuthMethod::Password) && record.password().is_empty() {
        errors.push(ConfigError::MissingPassword { row });
    }

    // Duplicate numbers: each pair is checked once, from the earlier record
    for (offset, later) in records[index + 1..].iter().enumerate() {
        if record.extension_number() == later.extension_number() {
            errors.push(ConfigError::DuplicateExtensionNumber {
                number: record.extension_number().to_string(),
                row,
                other_row: row + offset + 1,
            });
        }
    }

    // Extension numbers and group tags share one namespace; check every
    // record's slots, including this record's own
    for other in records {
        if other
            .dial_group_refs()
            .iter()
            .any(|tag| tag == record.extension_number())
        {
            errors.push(ConfigError::ExtensionGroupCollision {
                number: record.extension_number().to_string(),
                row,
            });
        }
    }

    errors
}
