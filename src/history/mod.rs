//! Mood history presentation transform.
//!
//! Pure helpers that turn the cached [`HistoryEntry`] list into flat,
//! filterable rows: one row per (analysis, recommended playlist) pair,
//! each carrying its parent's mood, timestamp, and confidence. No
//! state, no side effects; empty input produces empty output.

use chrono::{DateTime, Utc};

use crate::models::{HistoryEntry, Playlist};

/// Mood tags a user can filter by, in display order.
pub const MOOD_TAGS: [&str; 5] = ["joy", "sorrow", "angry", "surprise", "chill"];

/// One flattened history row.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// Dominant mood of the parent analysis.
    pub dominant: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub confidence_score: Option<f64>,
    pub playlist: Playlist,
}

/// A mood filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MoodFilter {
    /// Show everything.
    #[default]
    All,
    /// Show rows whose mood matches the tag exactly.
    Tag(String),
}

impl MoodFilter {
    /// Parse a selection string; `"all"` (any case) selects everything.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("all") {
            MoodFilter::All
        } else {
            MoodFilter::Tag(tag.to_string())
        }
    }

    /// Whether a row passes this filter.
    pub fn matches(&self, dominant: &str) -> bool {
        match self {
            MoodFilter::All => true,
            MoodFilter::Tag(tag) => dominant == tag,
        }
    }
}

/// Flatten history entries into one row per recommended playlist,
/// preserving input order: entries first, then each entry's playlists
/// in their own order.
pub fn flatten_history(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .flat_map(|entry| {
            entry.recommended_playlists.iter().map(|playlist| HistoryRow {
                dominant: entry.dominant.clone(),
                timestamp: entry.timestamp,
                confidence_score: entry.confidence_score,
                playlist: playlist.clone(),
            })
        })
        .collect()
}

/// Keep the rows whose dominant mood passes the filter, preserving
/// order. Filtering by [`MoodFilter::All`] returns the input unchanged.
pub fn filter_rows(rows: &[HistoryRow], filter: &MoodFilter) -> Vec<HistoryRow> {
    rows.iter()
        .filter(|row| filter.matches(&row.dominant))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: format!("Playlist {}", id),
            image_url: String::new(),
        }
    }

    fn entry(dominant: &str, playlist_ids: &[&str]) -> HistoryEntry {
        HistoryEntry {
            dominant: dominant.to_string(),
            timestamp: None,
            confidence_score: Some(0.8),
            recommended_playlists: playlist_ids.iter().map(|id| playlist(id)).collect(),
        }
    }

    #[test]
    fn test_flatten_empty_input() {
        assert!(flatten_history(&[]).is_empty());
    }

    #[test]
    fn test_flatten_one_row_per_pair() {
        let entries = vec![entry("joy", &["p1", "p2"]), entry("sorrow", &["p3"])];
        let rows = flatten_history(&entries);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].playlist.id, "p1");
        assert_eq!(rows[1].playlist.id, "p2");
        assert_eq!(rows[2].playlist.id, "p3");
        assert_eq!(rows[0].dominant, "joy");
        assert_eq!(rows[2].dominant, "sorrow");
    }

    #[test]
    fn test_rows_carry_parent_metadata() {
        let entries = vec![entry("joy", &["p1"])];
        let rows = flatten_history(&entries);
        assert_eq!(rows[0].confidence_score, Some(0.8));
        assert_eq!(rows[0].timestamp, None);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let entries = vec![entry("joy", &["p1", "p2"]), entry("chill", &["p3"])];
        let rows = flatten_history(&entries);

        let filtered = filter_rows(&rows, &MoodFilter::All);
        assert_eq!(filtered, rows);

        // Re-filtering by `all` is idempotent.
        assert_eq!(filter_rows(&filtered, &MoodFilter::All), rows);
    }

    #[test]
    fn test_filter_exact_tag_match() {
        let entries = vec![
            entry("joy", &["p1"]),
            entry("sorrow", &["p2"]),
            entry("joy", &["p3"]),
        ];
        let rows = flatten_history(&entries);

        let filtered = filter_rows(&rows, &MoodFilter::from_tag("joy"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|row| row.dominant == "joy"));
        // Order preserved.
        assert_eq!(filtered[0].playlist.id, "p1");
        assert_eq!(filtered[1].playlist.id, "p3");
    }

    #[test]
    fn test_filter_does_not_substring_match() {
        let entries = vec![entry("joyful", &["p1"])];
        let rows = flatten_history(&entries);
        assert!(filter_rows(&rows, &MoodFilter::from_tag("joy")).is_empty());
    }

    #[test]
    fn test_deterministic_on_same_input() {
        let entries = vec![entry("joy", &["p1", "p2"])];
        assert_eq!(flatten_history(&entries), flatten_history(&entries));
    }

    #[test]
    fn test_from_tag_parses_all_case_insensitively() {
        assert_eq!(MoodFilter::from_tag("all"), MoodFilter::All);
        assert_eq!(MoodFilter::from_tag("All"), MoodFilter::All);
        assert_eq!(
            MoodFilter::from_tag("chill"),
            MoodFilter::Tag("chill".to_string())
        );
    }
}
