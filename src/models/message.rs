use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-defined annotations carried on a version, opaque to the engine.
pub type VersionMetadata = serde_json::Map<String, Value>;

/// One historical state of a logical message (a wizard step's content, or a
/// bot/user chat turn).
///
/// Versions are append-only: editing or regenerating a message appends a new
/// version instead of overwriting, so prior states survive for revert. At
/// most one version per `message_id` is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageVersion {
    pub id: String,
    pub message_id: String,
    pub content: Value,
    #[serde(rename = "type")]
    pub kind: VersionKind,
    pub timestamp: DateTime<Utc>,
    pub is_active: bool,
    /// The version that was active for this `message_id` when this one was
    /// created; `None` for the first version. Lineage lookup only.
    pub parent_version_id: Option<String>,
    pub metadata: Option<VersionMetadata>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    Step,
    Logo,
    Bot,
    User,
}

impl VersionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Logo => "logo",
            Self::Bot => "bot",
            Self::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "step" => Some(Self::Step),
            "logo" => Some(Self::Logo),
            "bot" => Some(Self::Bot),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}
