//! sip-autoconf - CLI tool to generate Asterisk config files from CSV extension data.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sip_autoconf_rs::config::{DEFAULT_DIALPLAN_FILENAME, DEFAULT_SIP_FILENAME};
use sip_autoconf_rs::{
    allocate_dial_groups, generate_dialplan, generate_pjsip, parse_extension_file,
    validate_records, NatConfig,
};

/// Generate pjsip.conf and extensions.conf for an Asterisk server from CSV extension data.
#[derive(Parser, Debug)]
#[command(name = "sip-autoconf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file containing extension details
    #[arg(short, long)]
    input: PathBuf,

    /// Output SIP endpoint config file path
    #[arg(short, long, default_value = DEFAULT_SIP_FILENAME)]
    sip_output: PathBuf,

    /// Output dialplan config file path
    #[arg(short, long, default_value = DEFAULT_DIALPLAN_FILENAME)]
    dialplan_output: PathBuf,

    /// Local subnet in CIDR notation (xxx.xxx.xxx.xxx/xx), for NAT traversal
    #[arg(long)]
    local_net: Option<String>,

    /// Public IP address of the server, for NAT traversal
    #[arg(long)]
    external_address: Option<String>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output parsed records and dial groups as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // NAT transport needs both parameters
    let nat = match (&args.local_net, &args.external_address) {
        (Some(local_net), Some(external_address)) => {
            Some(NatConfig::new(local_net.clone(), external_address.clone()))
        }
        (None, None) => None,
        _ => {
            warn!("NAT transport needs both --local-net and --external-address; skipping it");
            None
        }
    };

    info!("Processing: {}", args.input.display());

    // Parse and normalize the input rows
    let records = parse_extension_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    // Validate the full record set
    validate_records(&records).context("Validation failed")?;

    // Allocate dial groups
    let groups = allocate_dial_groups(&records).context("Dial group allocation failed")?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "records": records,
            "dial_groups": groups,
        }))?;
        println!("{}", json);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate output
    let pjsip = generate_pjsip(&records, nat.as_ref())?;
    let dialplan = generate_dialplan(&records, &groups);

    // Write output
    std::fs::write(&args.sip_output, &pjsip)
        .with_context(|| format!("Failed to write {}", args.sip_output.display()))?;
    info!("Generated: {}", args.sip_output.display());

    std::fs::write(&args.dialplan_output, &dialplan)
        .with_context(|| format!("Failed to write {}", args.dialplan_output.display()))?;
    info!("Generated: {}", args.dialplan_output.display());

    Ok(())
}
