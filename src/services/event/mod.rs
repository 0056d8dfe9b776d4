//! Event file loading.
//!
//! Reads a JSON array of event drafts, e.g.
//!
//! ```json
//! [
//!   { "desc": "Dentist", "color": "#2a9d8f", "date": "2025-03-12T09:00:00" },
//!   { "desc": "Trip", "color": "blue", "startDate": "2025-03-06T08:00:00",
//!     "endDate": "2025-03-11T18:00:00", "type": "travel" }
//! ]
//! ```
//!
//! Drafts are validated when they are added to a calendar, not here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::event::EventDraft;

pub fn load_event_drafts(path: &Path) -> Result<Vec<EventDraft>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    parse_event_drafts(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))
}

pub fn parse_event_drafts(data: &str) -> Result<Vec<EventDraft>> {
    let drafts: Vec<EventDraft> = serde_json::from_str(data)?;
    log::debug!("parsed {} event drafts", drafts.len());
    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_drafts() {
        let drafts = parse_event_drafts(
            r#"[
                { "desc": "Dentist", "color": "teal", "date": "2025-03-12T09:00:00" },
                { "desc": "Trip", "color": "blue", "startDate": "2025-03-06T08:00:00",
                  "endDate": "2025-03-11T18:00:00", "type": "travel" }
            ]"#,
        )
        .unwrap();

        assert_eq!(drafts.len(), 2);
        let trip = drafts[1].clone().validate().unwrap();
        assert!(trip.is_span());
        assert_eq!(trip.kind(), Some("travel"));
    }

    #[test]
    fn test_incomplete_draft_parses_but_fails_validation() {
        let drafts = parse_event_drafts(r#"[{ "desc": "No colour" }]"#).unwrap();
        assert!(drafts[0].clone().validate().is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_event_drafts(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("events.json"));
    }
}
