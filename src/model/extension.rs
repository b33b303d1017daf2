//! Normalized extension records and authentication methods.

use crate::config::DIAL_GROUP_SLOTS;
use serde::Serialize;

/// Authentication scheme for one extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthMethod {
    /// Username/password authentication (`type=auth` stanza).
    Password,
    /// Source-IP identification (`type=identify` stanza).
    Ip,
}

impl AuthMethod {
    /// Parse a normalized (lowercased, trimmed) auth-method field.
    ///
    /// Returns `None` for anything other than the two recognized values.
    /// Unrecognized methods survive normalization and validation; the
    /// emitter rejects them with a row-numbered error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pwd" => Some(AuthMethod::Password),
            "ip" => Some(AuthMethod::Ip),
            _ => None,
        }
    }
}

/// One fully normalized extension row.
///
/// Built exactly once by [`ExtensionRecord::normalize`] and read-only from
/// then on; fields are private so no later pipeline stage can mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRecord {
    extension_number: String,
    caller_id: String,
    username: String,
    auth_method: String,
    password: String,
    ip_address: String,
    dial_group_refs: [String; DIAL_GROUP_SLOTS],
}

impl ExtensionRecord {
    /// Normalize one raw 9-field row into a record.
    ///
    /// Applies lowercasing and whitespace trimming to every field
    /// positionally: extension number, caller ID, username, auth method,
    /// password, IP address, then the three dial-group references. Pure;
    /// performs no validation, so empty or malformed fields pass through
    /// and are caught by the validator.
    pub fn normalize(fields: [&str; 9]) -> Self {
        let norm = |s: &str| s.trim().to_lowercase();
        Self {
            extension_number: norm(fields[0]),
            caller_id: norm(fields[1]),
            username: norm(fields[2]),
            auth_method: norm(fields[3]),
            password: norm(fields[4]),
            ip_address: norm(fields[5]),
            dial_group_refs: [norm(fields[6]), norm(fields[7]), norm(fields[8])],
        }
    }

    /// Dial-able number for this extension.
    pub fn extension_number(&self) -> &str {
        &self.extension_number
    }

    /// Display name used in the endpoint's callerid line.
    pub fn caller_id(&self) -> &str {
        &self.caller_id
    }

    /// Unique identity used as the config section key.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Raw normalized auth-method field.
    pub fn auth_method(&self) -> &str {
        &self.auth_method
    }

    /// Interpreted auth method, `None` if the field holds an unrecognized value.
    pub fn auth(&self) -> Option<AuthMethod> {
        AuthMethod::parse(&self.auth_method)
    }

    /// Password; meaningful only when the auth method is PWD.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Source IP address; meaningful only when the auth method is IP.
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// The three dial-group reference slots; empty string means no
    /// membership in that slot.
    pub fn dial_group_refs(&self) -> &[String; DIAL_GROUP_SLOTS] {
        &self.dial_group_refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let record = ExtensionRecord::normalize([
            " 101 ", "Alice B", " ALICE ", "PWD", " Secret ", "", "5", "", "",
        ]);
        assert_eq!(record.extension_number(), "101");
        assert_eq!(record.caller_id(), "alice b");
        assert_eq!(record.username(), "alice");
        assert_eq!(record.auth_method(), "pwd");
        assert_eq!(record.password(), "secret");
        assert_eq!(record.ip_address(), "");
        assert_eq!(record.dial_group_refs(), &["5", "", ""]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = ExtensionRecord::normalize([
            "  202", "BOB", "Bob ", " Ip ", "", " 10.0.0.7 ", " 6", "7 ", "",
        ]);
        let second = ExtensionRecord::normalize([
            first.extension_number(),
            first.caller_id(),
            first.username(),
            first.auth_method(),
            first.password(),
            first.ip_address(),
            first.dial_group_refs()[0].as_str(),
            first.dial_group_refs()[1].as_str(),
            first.dial_group_refs()[2].as_str(),
        ]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_passes_malformed_fields_through() {
        let record = ExtensionRecord::normalize(["0100", "", "", "token", "", "", "", "", ""]);
        assert_eq!(record.extension_number(), "0100");
        assert_eq!(record.caller_id(), "");
        assert_eq!(record.auth_method(), "token");
        assert_eq!(record.auth(), None);
    }

    #[test]
    fn test_auth_method_parse() {
        assert_eq!(AuthMethod::parse("pwd"), Some(AuthMethod::Password));
        assert_eq!(AuthMethod::parse("ip"), Some(AuthMethod::Ip));
        assert_eq!(AuthMethod::parse(""), None);
        assert_eq!(AuthMethod::parse("cert"), None);
    }
}
