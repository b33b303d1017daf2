//! Dial-group allocation.
//!
//! Groups are not pre-declared anywhere; the first tag seen (in record
//! order, then slot order) claims a group slot, and every later occurrence
//! of the same tag joins that group. Group tags are opaque strings compared
//! for equality only. Allocation order becomes emission order in the
//! generated dial-plan.

use crate::config::{DIAL_GROUP_SLOTS, MAX_DIAL_GROUPS};
use crate::error::{ConfigError, Result};
use crate::model::{DialGroup, ExtensionRecord};

/// Bin the records' usernames into at most three dial groups.
///
/// Runs only after validation has succeeded. Within one record, a tag
/// repeated in a later slot is dropped silently, so each record joins a
/// given group at most once. A fourth distinct tag across the whole input
/// is fatal.
pub fn allocate_dial_groups(records: &[ExtensionRecord]) -> Result<Vec<DialGroup>> {
    let mut groups: Vec<DialGroup> = Vec::with_capacity(MAX_DIAL_GROUPS);

    for (index, record) in records.iter().enumerate() {
        let mut tags: [&str; DIAL_GROUP_SLOTS] =
            std::array::from_fn(|slot| record.dial_group_refs()[slot].as_str());

        // Drop later duplicates of the same tag within this record
        for first in 0..DIAL_GROUP_SLOTS - 1 {
            for later in first + 1..DIAL_GROUP_SLOTS {
                if !tags[first].is_empty() && tags[first] == tags[later] {
                    tags[later] = "";
                }
            }
        }

        for tag in tags.into_iter().filter(|tag| !tag.is_empty()) {
            if let Some(group) = groups.iter_mut().find(|g| g.group_number() == tag) {
                group.push_member(record.username());
            } else if groups.len() < MAX_DIAL_GROUPS {
                groups.push(DialGroup::new(tag, record.username()));
            } else {
                return Err(ConfigError::TooManyDialGroups {
                    tag: tag.to_string(),
                    row: index + 1,
                });
            }
        }
    }

    for group in &groups {
        tracing::info!(
            "Dial group {} members: {:?}",
            group.group_number(),
            group.members()
        );
    }

    Ok(groups)
}
