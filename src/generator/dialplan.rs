//! extensions.conf generator: the `[users]` context with per-extension and
//! per-group dial lines.

use crate::config::DIALPLAN_CONTEXT;
use crate::model::{DialGroup, ExtensionRecord};
use std::fmt::Write;

/// Generate the full extensions.conf content.
///
/// Extensions are emitted in record order, then groups in allocation order.
/// Dialing a group number rings all member endpoints at once.
pub fn generate_dialplan(records: &[ExtensionRecord], groups: &[DialGroup]) -> String {
    let mut output = String::new();

    writeln!(output, "[{DIALPLAN_CONTEXT}]").unwrap();

    for record in records {
        writeln!(
            output,
            "exten => {},1,Dial(PJSIP/{})",
            record.extension_number(),
            record.username()
        )
        .unwrap();
    }

    for group in groups {
        if group.members().is_empty() {
            continue;
        }
        let targets = group
            .members()
            .iter()
            .map(|username| format!("PJSIP/{username}"))
            .collect::<Vec<_>>()
            .join("&");
        writeln!(output, "exten => {},1,Dial({})", group.group_number(), targets).unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(number: &str, username: &str) -> ExtensionRecord {
        ExtensionRecord::normalize([number, "name", username, "PWD", "pw", "", "", "", ""])
    }

    #[test]
    fn test_context_header_and_extension_lines() {
        let records = vec![record("101", "alice"), record("102", "bob")];
        let output = generate_dialplan(&records, &[]);
        assert_eq!(
            output,
            "[users]\n\
             exten => 101,1,Dial(PJSIP/alice)\n\
             exten => 102,1,Dial(PJSIP/bob)\n"
        );
    }

    #[test]
    fn test_group_line_joins_members() {
        let mut group = DialGroup::new("5", "alice");
        group.push_member("bob");
        group.push_member("carol");
        let output = generate_dialplan(&[], &[group]);
        assert!(output.contains("exten => 5,1,Dial(PJSIP/alice&PJSIP/bob&PJSIP/carol)"));
    }

    #[test]
    fn test_single_member_group_line() {
        let group = DialGroup::new("7", "alice");
        let output = generate_dialplan(&[], &[group]);
        assert!(output.contains("exten => 7,1,Dial(PJSIP/alice)"));
    }

    #[test]
    fn test_groups_follow_extensions_in_allocation_order() {
        let records = vec![record("101", "alice")];
        let groups = vec![DialGroup::new("9", "alice"), DialGroup::new("4", "alice")];
        let output = generate_dialplan(&records, &groups);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], "exten => 101,1,Dial(PJSIP/alice)");
        assert_eq!(lines[2], "exten => 9,1,Dial(PJSIP/alice)");
        assert_eq!(lines[3], "exten => 4,1,Dial(PJSIP/alice)");
    }
}
