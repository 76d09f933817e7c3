//! JSON persistence for learning progress.
//!
//! The whole store round-trips as one snapshot. Saves go through a temp
//! file plus rename so a crash mid-write leaves either the old or the new
//! snapshot on disk, never a mix. Loads never fail: corrupt data degrades
//! to an empty store.

use chrono::{DateTime, Utc};
use memo_core::CardState;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk card record. The card id lives in the enclosing map key, not in
/// the record itself.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCard {
    ease_factor: f64,
    interval: u32,
    repetitions: u32,
    next_review: DateTime<Utc>,
    #[serde(default)]
    last_reviewed: Option<DateTime<Utc>>,
}

impl StoredCard {
    fn from_state(state: &CardState) -> Self {
        Self {
            ease_factor: state.ease_factor,
            interval: state.interval,
            repetitions: state.repetitions,
            next_review: state.next_review,
            last_reviewed: state.last_reviewed,
        }
    }

    fn into_state(self, card_id: &str) -> CardState {
        CardState {
            card_id: card_id.to_string(),
            ease_factor: self.ease_factor,
            interval: self.interval,
            repetitions: self.repetitions,
            next_review: self.next_review,
            last_reviewed: self.last_reviewed,
        }
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    version: u32,
    last_saved: DateTime<Utc>,
    cards: BTreeMap<&'a str, StoredCard>,
}

/// Lenient mirror of [`Snapshot`] for loading: card entries stay raw JSON
/// so one bad record cannot sink the rest.
#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    cards: HashMap<String, serde_json::Value>,
}

/// Persists the card-state store as a JSON file.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.asn-memo/progress.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".asn-memo")
            .join("progress.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted card states.
    ///
    /// A missing, unreadable, or unparsable file yields an empty store;
    /// individually malformed card records are skipped. Prior progress is
    /// never a reason to refuse to start.
    pub fn load(&self) -> HashMap<String, CardState> {
        if !self.path.exists() {
            return HashMap::new();
        }

        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("failed to read {}: {err}", self.path.display());
                return HashMap::new();
            }
        };

        let raw: RawSnapshot = match serde_json::from_str(&text) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("corrupt progress file {}: {err}", self.path.display());
                return HashMap::new();
            }
        };

        if raw.version != Some(FORMAT_VERSION) {
            log::warn!(
                "unexpected progress format version {:?}, loading what parses",
                raw.version
            );
        }

        let mut states = HashMap::with_capacity(raw.cards.len());
        for (card_id, value) in raw.cards {
            match serde_json::from_value::<StoredCard>(value) {
                Ok(stored) => {
                    states.insert(card_id.clone(), stored.into_state(&card_id));
                }
                Err(err) => {
                    log::warn!("skipping malformed card record {card_id}: {err}");
                }
            }
        }

        log::debug!("loaded {} card states from {}", states.len(), self.path.display());
        states
    }

    /// Write the whole store atomically (temp file, then rename).
    pub fn save(&self, states: &HashMap<String, CardState>) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = Snapshot {
            version: FORMAT_VERSION,
            last_saved: Utc::now(),
            cards: states
                .iter()
                .map(|(id, state)| (id.as_str(), StoredCard::from_state(state)))
                .collect(),
        };

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&snapshot)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Delete all persisted progress.
    pub fn reset(&self) -> Result<(), ProgressError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
