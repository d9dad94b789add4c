use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{Mood, MoodEntry, SymptomCategory, SymptomEntry};

/// Snapshot key for the mood collection.
pub const MOOD_KEY: &str = "moodEntries";
/// Snapshot key for the symptom collection.
pub const SYMPTOM_KEY: &str = "symptoms";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("failed to write snapshot '{key}': {source}")]
    Persistence {
        key: &'static str,
        #[source]
        source: io::Error,
    },
}

/// The journal's source of truth: two append-ordered collections, newest
/// entry first, mirrored to one JSON snapshot file per collection.
///
/// Only the store creates or removes entries; entries are immutable once
/// added and are never deleted individually (only a full clear).
pub struct JournalStore {
    data_dir: PathBuf,
    moods: Vec<MoodEntry>,
    symptoms: Vec<SymptomEntry>,
}

/// Handle shared across request handlers. One mutation holds the lock to
/// completion, so readers never observe a half-applied write.
pub type SharedStore = Arc<Mutex<JournalStore>>;

pub fn shared(store: JournalStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

impl JournalStore {
    /// Opens the store rooted at `data_dir`, loading any prior snapshots.
    /// Missing or unreadable snapshots fall back to empty collections:
    /// losing history is preferable to refusing to start.
    pub fn open(data_dir: impl Into<PathBuf>) -> JournalStore {
        let data_dir = data_dir.into();
        let moods = load_snapshot(&data_dir, MOOD_KEY);
        let symptoms = load_snapshot(&data_dir, SYMPTOM_KEY);
        JournalStore { data_dir, moods, symptoms }
    }

    pub fn add_mood(
        &mut self,
        mood: Mood,
        intensity: u8,
        notes: Option<String>,
    ) -> Result<MoodEntry, StoreError> {
        validate_intensity(intensity)?;
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            logged_at: Utc::now(),
            mood,
            intensity,
            notes,
        };
        self.moods.insert(0, entry.clone());
        if let Err(err) = self.persist(MOOD_KEY, &self.moods) {
            self.moods.remove(0);
            return Err(err);
        }
        Ok(entry)
    }

    pub fn add_symptom(
        &mut self,
        category: SymptomCategory,
        intensity: u8,
        notes: Option<String>,
    ) -> Result<SymptomEntry, StoreError> {
        validate_intensity(intensity)?;
        let entry = SymptomEntry {
            id: Uuid::new_v4(),
            logged_at: Utc::now(),
            category,
            intensity,
            notes,
        };
        self.symptoms.insert(0, entry.clone());
        if let Err(err) = self.persist(SYMPTOM_KEY, &self.symptoms) {
            self.symptoms.remove(0);
            return Err(err);
        }
        Ok(entry)
    }

    /// Full mood history, newest first.
    pub fn list_moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// Full symptom history, newest first.
    pub fn list_symptoms(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    /// The `limit` most recent mood entries (a prefix of `list_moods`).
    pub fn recent_moods(&self, limit: usize) -> &[MoodEntry] {
        &self.moods[..self.moods.len().min(limit)]
    }

    /// Empties both collections and removes their snapshots. Irreversible,
    /// and idempotent: clearing an already-empty store is not an error.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.moods.clear();
        self.symptoms.clear();
        for key in [MOOD_KEY, SYMPTOM_KEY] {
            match fs::remove_file(snapshot_path(&self.data_dir, key)) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(StoreError::Persistence { key, source: err }),
            }
        }
        Ok(())
    }

    fn persist<T: Serialize>(&self, key: &'static str, collection: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|source| StoreError::Persistence { key, source })?;
        let json = serde_json::to_string(collection).map_err(|err| StoreError::Persistence {
            key,
            source: io::Error::new(io::ErrorKind::Other, err),
        })?;
        fs::write(snapshot_path(&self.data_dir, key), json)
            .map_err(|source| StoreError::Persistence { key, source })
    }
}

fn validate_intensity(intensity: u8) -> Result<(), StoreError> {
    if (1..=5).contains(&intensity) {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "intensity must be between 1 and 5, got {intensity}"
        )))
    }
}

fn snapshot_path(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(format!("{key}.json"))
}

fn load_snapshot<T: DeserializeOwned>(data_dir: &Path, key: &str) -> Vec<T> {
    let path = snapshot_path(data_dir, key);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            tracing::warn!("⚠️ could not read snapshot {}: {}", path.display(), err);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("⚠️ discarding corrupt snapshot '{}': {}", key, err);
            Vec::new()
        }
    }
}
