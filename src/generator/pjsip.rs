//! pjsip.conf generator: transport, endpoint, auth/identify, and AOR stanzas.

use crate::config::{NatConfig, ALLOWED_CODECS, DIALPLAN_CONTEXT, MAX_CONTACTS};
use crate::error::{ConfigError, Result};
use crate::model::{AuthMethod, ExtensionRecord};
use std::fmt::Write;

/// Generate the full pjsip.conf content for a validated record set.
///
/// The NAT transport stanza is emitted only when NAT parameters were
/// supplied. Extensions are emitted in record order.
pub fn generate_pjsip(records: &[ExtensionRecord], nat: Option<&NatConfig>) -> Result<String> {
    let mut output = String::new();

    generate_transport_section(&mut output, nat);

    for (index, record) in records.iter().enumerate() {
        tracing::info!("Configuring extension: {}", record.username());
        generate_extension_stanzas(&mut output, record, index + 1)?;
    }

    Ok(output)
}

/// Generate the `[transport-udp]` stanza and, if configured, the
/// `[transport-udp-nat]` stanza.
fn generate_transport_section(output: &mut String, nat: Option<&NatConfig>) {
    writeln!(output, "; Basic transport parameters").unwrap();
    writeln!(output, "[transport-udp]").unwrap();
    writeln!(output, "type=transport").unwrap();
    writeln!(output, "protocol=udp").unwrap();
    writeln!(output, "bind=0.0.0.0").unwrap();

    if let Some(nat) = nat {
        writeln!(output).unwrap();
        writeln!(output, "; NAT transport parameters").unwrap();
        writeln!(output, "[transport-udp-nat]").unwrap();
        writeln!(output, "type=transport").unwrap();
        writeln!(output, "protocol=udp").unwrap();
        writeln!(output, "bind=0.0.0.0").unwrap();
        writeln!(output, "local_net={}", nat.local_net).unwrap();
        writeln!(output, "external_media_address={}", nat.external_address).unwrap();
        writeln!(output, "external_signalling_address={}", nat.external_address).unwrap();
    }
}

/// Generate the endpoint, credential, and AOR stanzas for one extension.
fn generate_extension_stanzas(
    output: &mut String,
    record: &ExtensionRecord,
    row: usize,
) -> Result<()> {
    let auth = record.auth().ok_or_else(|| ConfigError::UnknownAuthMethod {
        method: record.auth_method().to_string(),
        row,
    })?;
    let username = record.username();

    // Endpoint stanza
    writeln!(output).unwrap();
    writeln!(output, ";{username}").unwrap();
    writeln!(output, "[{username}]").unwrap();
    writeln!(output, "type=endpoint").unwrap();
    writeln!(output, "transport=transport-udp").unwrap();
    writeln!(output, "context={DIALPLAN_CONTEXT}").unwrap();
    writeln!(output, "disallow=all").unwrap();
    for codec in ALLOWED_CODECS {
        writeln!(output, "allow={codec}").unwrap();
    }
    if auth == AuthMethod::Password {
        writeln!(output, "auth={username}").unwrap();
    }
    writeln!(output, "aors={username}").unwrap();
    writeln!(output, "callerid=\"{} <{username}>\"", record.caller_id()).unwrap();

    // Credential stanza
    match auth {
        AuthMethod::Password => {
            writeln!(output, "[{username}]").unwrap();
            writeln!(output, "type=auth").unwrap();
            writeln!(output, "auth_type=userpass").unwrap();
            writeln!(output, "password={}", record.password()).unwrap();
            writeln!(output, "username={username}").unwrap();
        }
        AuthMethod::Ip => {
            writeln!(output, "[{username}]").unwrap();
            writeln!(output, "type=identify").unwrap();
            writeln!(output, "endpoint={username}").unwrap();
            writeln!(output, "match={}", record.ip_address()).unwrap();
        }
    }

    // AOR stanza
    writeln!(output, "[{username}]").unwrap();
    writeln!(output, "type=aor").unwrap();
    writeln!(output, "max_contacts={MAX_CONTACTS}").unwrap();

    Ok(())
}
