//! Version history for logo candidates: single accepted entry globally.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::models::LogoVersion;

/// Append a new logo candidate.
///
/// Acceptance resets globally: any previously accepted entry loses its flag,
/// and the new candidate is not accepted either. Accepting is a separate
/// explicit action via [`accept_version`]. Ids are timestamp plus a random
/// suffix; uniqueness is best-effort, not guaranteed.
pub fn add_version(
    history: &[LogoVersion],
    logo_data: &str,
    filename: &str,
    format: &str,
    message_id: &str,
    feedback: Option<String>,
) -> Vec<LogoVersion> {
    let now = Utc::now();

    let mut versions: Vec<LogoVersion> = history
        .iter()
        .map(|v| LogoVersion {
            is_accepted: false,
            ..v.clone()
        })
        .collect();

    let suffix = Uuid::new_v4().simple().to_string();
    let id = format!("logo-{}-{}", now.timestamp_millis(), &suffix[..9]);
    debug!(message_id, version_id = %id, filename, "adding logo version");

    versions.push(LogoVersion {
        id,
        logo_data: logo_data.to_string(),
        filename: filename.to_string(),
        format: format.to_string(),
        feedback,
        created_at: now,
        is_accepted: false,
        message_id: message_id.to_string(),
    });
    versions
}

/// Mark `version_id` as the single accepted logo across the whole history.
///
/// Returns `None` when there is no history. Every entry's flag becomes
/// `id == version_id`, so accepting an unknown id clears acceptance entirely
/// rather than leaving a prior choice in place.
pub fn accept_version(
    history: Option<&[LogoVersion]>,
    version_id: &str,
) -> Option<Vec<LogoVersion>> {
    let history = history?;

    debug!(version_id, "accepting logo version");

    Some(
        history
            .iter()
            .map(|v| LogoVersion {
                is_accepted: v.id == version_id,
                ..v.clone()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(history: &[LogoVersion], filename: &str) -> Vec<LogoVersion> {
        add_version(history, "data:image/png;base64,...", filename, "png", "m1", None)
    }

    #[test]
    fn new_candidate_is_not_accepted() {
        let history = candidate(&[], "logo-1.png");

        assert_eq!(history.len(), 1);
        assert!(!history[0].is_accepted);
        assert_eq!(history[0].format, "png");
        assert_eq!(history[0].message_id, "m1");
    }

    #[test]
    fn adding_resets_prior_acceptance() {
        let h1 = candidate(&[], "logo-1.png");
        let accepted = accept_version(Some(&h1), &h1[0].id).unwrap();
        assert!(accepted[0].is_accepted);

        let h2 = candidate(&accepted, "logo-2.png");

        assert_eq!(h2.len(), 2);
        assert!(h2.iter().all(|v| !v.is_accepted));
    }

    #[test]
    fn adding_does_not_mutate_input() {
        let h1 = candidate(&[], "logo-1.png");
        let accepted = accept_version(Some(&h1), &h1[0].id).unwrap();

        let _h2 = candidate(&accepted, "logo-2.png");

        assert!(accepted[0].is_accepted);
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn feedback_is_recorded_on_revisions() {
        let h1 = candidate(&[], "logo-1.png");
        let h2 = add_version(
            &h1,
            "data:image/svg+xml,...",
            "logo-2.svg",
            "svg",
            "m2",
            Some("make the mark bolder".to_string()),
        );

        assert_eq!(h2[1].feedback.as_deref(), Some("make the mark bolder"));
        assert_eq!(h1[0].feedback, None);
    }

    #[test]
    fn accept_marks_exactly_one_entry() {
        let h1 = candidate(&[], "logo-1.png");
        let h2 = candidate(&h1, "logo-2.png");
        let first_id = h2[0].id.clone();

        let accepted = accept_version(Some(&h2), &first_id).unwrap();

        assert!(accepted[0].is_accepted);
        assert!(!accepted[1].is_accepted);
    }

    #[test]
    fn accept_unknown_id_clears_acceptance() {
        let h1 = candidate(&[], "logo-1.png");
        let h2 = candidate(&h1, "logo-2.png");
        let accepted = accept_version(Some(&h2), &h2[0].id).unwrap();

        let cleared = accept_version(Some(&accepted), "missing").unwrap();

        assert!(cleared.iter().all(|v| !v.is_accepted));
    }

    #[test]
    fn accept_absent_history_returns_none() {
        assert!(accept_version(None, "logo-1").is_none());
    }
}
