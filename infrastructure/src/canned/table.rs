//! Canned response table
//!
//! JSON shape:
//!
//! ```json
//! { "topics": { "<topic>": { "For": [ { "text": "...", "sources": [ { "title": "...", "url": "..." } ] } ] } } }
//! ```
//!
//! Entry `n - 1` of a stance's list is the answer for round `n`.

use debate_domain::{Source, Stance};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_TABLE: &str = include_str!("../../data/canned_responses.json");

#[derive(Error, Debug)]
pub enum CannedTableError {
    #[error("Failed to read canned table {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid canned table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One pre-written answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedEntry {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Pre-written answers keyed by topic, then stance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedTable {
    #[serde(default)]
    topics: BTreeMap<String, BTreeMap<String, Vec<CannedEntry>>>,
}

impl CannedTable {
    /// The table shipped with the crate
    pub fn builtin() -> Result<Self, CannedTableError> {
        Self::from_json(BUILTIN_TABLE)
    }

    pub fn from_json(json: &str) -> Result<Self, CannedTableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CannedTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CannedTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Topics that have at least one pre-written answer
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Answer for a round, clamped to the last written round
    ///
    /// Stance keys match case-insensitively. `None` when the topic or the
    /// stance has no entries.
    pub fn lookup(&self, topic: &str, stance: Stance, round: u32) -> Option<&CannedEntry> {
        let entries = self
            .topics
            .get(topic.trim())?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(stance.as_str()))
            .map(|(_, entries)| entries)?;

        let last = entries.len().checked_sub(1)?;
        let index = usize::try_from(round.saturating_sub(1)).unwrap_or(usize::MAX);
        entries.get(index.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AI: &str = "Is AI a threat to humanity?";

    #[test]
    fn test_builtin_table_has_two_rounds_per_stance() {
        let table = CannedTable::builtin().unwrap();
        let topics: Vec<_> = table.topics().collect();
        assert!(topics.contains(&AI));
        assert!(topics.contains(&"Should cryptocurrency be regulated?"));
        for stance in Stance::ALL {
            assert!(table.lookup(AI, stance, 1).is_some());
            assert!(table.lookup(AI, stance, 2).is_some());
        }
    }

    #[test]
    fn test_rounds_index_from_one() {
        let table = CannedTable::builtin().unwrap();
        let first = table.lookup(AI, Stance::For, 1).unwrap();
        let second = table.lookup(AI, Stance::For, 2).unwrap();
        assert!(first.text.starts_with("From my analysis"));
        assert!(second.text.starts_with("Building on my previous points"));
        assert_eq!(first.sources.len(), 2);
    }

    #[test]
    fn test_rounds_past_table_clamp_to_last_entry() {
        let table = CannedTable::builtin().unwrap();
        assert_eq!(
            table.lookup(AI, Stance::Against, 7),
            table.lookup(AI, Stance::Against, 2)
        );
        assert_eq!(
            table.lookup(AI, Stance::Against, 0),
            table.lookup(AI, Stance::Against, 1)
        );
    }

    #[test]
    fn test_unknown_topic_or_missing_stance() {
        let table = CannedTable::from_json(
            r#"{"topics": {"Tea or coffee?": {"for": [{"text": "Tea."}], "Against": []}}}"#,
        )
        .unwrap();
        assert_eq!(table.lookup("Tea or coffee?", Stance::For, 1).unwrap().text, "Tea.");
        assert!(table.lookup("Tea or coffee?", Stance::Against, 1).is_none());
        assert!(table.lookup("Tea or coffee?", Stance::Neutral, 1).is_none());
        assert!(table.lookup("Something else", Stance::For, 1).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, r#"{"topics": {"X": {"Neutral": [{"text": "Maybe."}]}}}"#).unwrap();

        let table = CannedTable::load(&path).unwrap();
        assert_eq!(table.lookup("X", Stance::Neutral, 3).unwrap().text, "Maybe.");

        let missing = CannedTable::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CannedTableError::Io { .. })));
    }
}
