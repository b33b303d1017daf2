//! Configuration constants and settings for the generator.

/// Maximum number of dial groups that may be defined across the input.
pub const MAX_DIAL_GROUPS: usize = 3;

/// Number of dial-group reference slots on each extension row.
pub const DIAL_GROUP_SLOTS: usize = 3;

/// Number of CSV fields that make up one extension row.
pub const RECORD_FIELDS: usize = 9;

/// Maximum registered contacts per address-of-record.
pub const MAX_CONTACTS: u32 = 5;

/// Dial-plan context that all generated extensions live in.
pub const DIALPLAN_CONTEXT: &str = "users";

/// Codecs allowed on every generated endpoint, in emission order.
pub const ALLOWED_CODECS: [&str; 2] = ["alaw", "ulaw"];

/// Default name of the generated endpoint/auth config file.
pub const DEFAULT_SIP_FILENAME: &str = "pjsip.conf";

/// Default name of the generated dial-plan config file.
pub const DEFAULT_DIALPLAN_FILENAME: &str = "extensions.conf";

/// NAT traversal parameters for the server's UDP transport.
///
/// When present, an additional `[transport-udp-nat]` stanza is emitted next
/// to the basic transport. Both values are free-form strings consumed only
/// by the emission layer.
#[derive(Debug, Clone)]
pub struct NatConfig {
    /// Local subnet in CIDR notation (xxx.xxx.xxx.xxx/xx).
    pub local_net: String,
    /// Public IP address of the server.
    pub external_address: String,
}

impl NatConfig {
    /// Create a new NAT configuration.
    pub fn new(local_net: impl Into<String>, external_address: impl Into<String>) -> Self {
        Self {
            local_net: local_net.into(),
            external_address: external_address.into(),
        }
    }
}
