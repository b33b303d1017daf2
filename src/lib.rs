//! sip-autoconf-rs - Core library for generating Asterisk SIP configuration
//! from CSV extension data.
//!
//! Reads a table of telephony extensions, validates it as a set, bins the
//! extensions into up to three dial groups, and produces the content of two
//! config files: pjsip.conf (endpoints and credentials) and extensions.conf
//! (the dial-plan).
//!
//! # Example
//!
//! ```no_run
//! use sip_autoconf_rs::{generate_configs, NatConfig};
//! use std::path::Path;
//!
//! let nat = NatConfig::new("192.168.1.0/24", "203.0.113.9");
//! let configs = generate_configs(Path::new("extensions.csv"), Some(&nat)).unwrap();
//! println!("{}", configs.pjsip);
//! println!("{}", configs.dialplan);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod groups;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::NatConfig;
pub use error::{ConfigError, Result};
pub use generator::{generate_dialplan, generate_pjsip};
pub use groups::allocate_dial_groups;
pub use model::{AuthMethod, DialGroup, ExtensionRecord};
pub use parser::parse_extension_file;
pub use validation::{validate_records, validate_records_with, ValidationMode};

/// Generated content for both output config files.
#[derive(Debug, Clone)]
pub struct GeneratedConfigs {
    /// pjsip.conf content: transports, endpoints, credentials, AORs.
    pub pjsip: String,
    /// extensions.conf content: per-extension and per-group dial lines.
    pub dialplan: String,
}

/// Run the full generation pipeline for one input file.
///
/// 1. Parse and normalize the CSV rows
/// 2. Validate the record set (fail-fast)
/// 3. Allocate dial groups
/// 4. Generate both config documents
///
/// Nothing is returned unless every step succeeded, so no partial output
/// can ever reach disk.
pub fn generate_configs(
    input_path: &std::path::Path,
    nat: Option<&NatConfig>,
) -> Result<GeneratedConfigs> {
    let records = parse_extension_file(input_path)?;

    validate_records(&records)?;

    let groups = allocate_dial_groups(&records)?;

    let pjsip = generate_pjsip(&records, nat)?;
    let dialplan = generate_dialplan(&records, &groups);

    Ok(GeneratedConfigs { pjsip, dialplan })
}
