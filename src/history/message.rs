//! Version history for wizard messages: per-message single-active invariant.

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::models::{MessageVersion, VersionKind, VersionMetadata};

/// Append a new version for `message_id` instead of overwriting.
///
/// Whatever was active for that `message_id` is deactivated in the returned
/// list and recorded as the new entry's parent. Active flags of other
/// messages are untouched. The embedded sequence number is a global running
/// count; it carries no meaning beyond id uniqueness.
pub fn add_version(
    history: &[MessageVersion],
    message_id: &str,
    content: Value,
    kind: VersionKind,
    metadata: Option<VersionMetadata>,
) -> Vec<MessageVersion> {
    let now = Utc::now();
    let parent_version_id = active_version(history, message_id).map(|v| v.id.clone());

    let mut versions: Vec<MessageVersion> = history
        .iter()
        .map(|v| {
            if v.message_id == message_id && v.is_active {
                MessageVersion {
                    is_active: false,
                    ..v.clone()
                }
            } else {
                v.clone()
            }
        })
        .collect();

    let id = format!(
        "{}-v{}-{}",
        message_id,
        history.len() + 1,
        now.timestamp_millis()
    );
    debug!(message_id, version_id = %id, kind = kind.as_str(), "adding message version");

    versions.push(MessageVersion {
        id,
        message_id: message_id.to_string(),
        content,
        kind,
        timestamp: now,
        is_active: true,
        parent_version_id,
        metadata,
    });
    versions
}

/// The version currently considered "current" for `message_id`, if any.
pub fn active_version<'a>(
    history: &'a [MessageVersion],
    message_id: &str,
) -> Option<&'a MessageVersion> {
    history
        .iter()
        .find(|v| v.message_id == message_id && v.is_active)
}

/// All versions of `message_id`, ascending by timestamp. The sort is stable,
/// so entries created in the same millisecond keep their insertion order.
pub fn versions_for_message(history: &[MessageVersion], message_id: &str) -> Vec<MessageVersion> {
    let mut versions: Vec<MessageVersion> = history
        .iter()
        .filter(|v| v.message_id == message_id)
        .cloned()
        .collect();
    versions.sort_by_key(|v| v.timestamp);
    versions
}

/// Make `version_id` the active version of its message.
///
/// Returns `None` when there is no history to switch in. An unknown
/// `version_id` is a no-op, not an error: the history comes back unchanged.
/// Entries belonging to other messages are untouched either way.
pub fn switch_to_version(
    history: Option<&[MessageVersion]>,
    version_id: &str,
) -> Option<Vec<MessageVersion>> {
    let history = history?;

    let Some(target) = history.iter().find(|v| v.id == version_id) else {
        return Some(history.to_vec());
    };
    let target_message_id = target.message_id.clone();

    debug!(message_id = %target_message_id, version_id, "switching active version");

    Some(
        history
            .iter()
            .map(|v| {
                if v.message_id == target_message_id {
                    MessageVersion {
                        is_active: v.id == version_id,
                        ..v.clone()
                    }
                } else {
                    v.clone()
                }
            })
            .collect(),
    )
}
