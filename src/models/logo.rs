use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical logo candidate produced during the wizard.
///
/// Unlike [`super::MessageVersion`], acceptance is global: at most one entry
/// across the entire history is accepted, regardless of which wizard turn
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoVersion {
    pub id: String,
    pub logo_data: String,
    pub filename: String,
    pub format: String,
    /// Why a revision was requested, when the caller supplied a reason.
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_accepted: bool,
    /// The wizard turn that produced this candidate. Informational only; the
    /// acceptance invariant ignores it.
    pub message_id: String,
}
