//! Dial groups discovered during allocation.

use serde::Serialize;

/// One ring/hunt group, discovered lazily from the extension rows.
///
/// Groups are created first-seen-wins during the single allocation pass and
/// only ever mutated by appending members; they are never deleted or
/// reassigned a different number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialGroup {
    /// The group tag that established this slot.
    group_number: String,
    /// Usernames assigned to this group, in insertion order.
    members: Vec<String>,
}

impl DialGroup {
    /// Create a group for a newly seen tag with its first member.
    pub fn new(group_number: impl Into<String>, first_member: impl Into<String>) -> Self {
        Self {
            group_number: group_number.into(),
            members: vec![first_member.into()],
        }
    }

    /// The dial-able number of this group.
    pub fn group_number(&self) -> &str {
        &self.group_number
    }

    /// Member usernames in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Append a member username. Membership order is append-only.
    pub fn push_member(&mut self, username: impl Into<String>) {
        self.members.push(username.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_group_has_first_member() {
        let group = DialGroup::new("5", "alice");
        assert_eq!(group.group_number(), "5");
        assert_eq!(group.members(), ["alice"]);
    }

    #[test]
    fn test_push_member_preserves_order() {
        let mut group = DialGroup::new("5", "alice");
        group.push_member("bob");
        group.push_member("carol");
        assert_eq!(group.members(), ["alice", "bob", "carol"]);
    }
}
