//! JSON persistence for the card store and review settings
//!
//! Layout under the data directory:
//! cards.json      # the full card store
//! settings.json   # review settings
//!
//! Every mutation is a read-modify-write of the whole store; there is no
//! locking, and concurrent writers can lose updates.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::settings::ReviewSettings;

use super::models::{Card, CardStore};

#[derive(Error, Debug)]
pub enum CardStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, CardStorageError>;

/// Storage handle passed explicitly to every operation that touches disk
pub struct CardStorage {
    base_path: PathBuf,
}

impl CardStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("mneme"))
            .ok_or(CardStorageError::DataDirNotFound)
    }

    fn store_path(&self) -> PathBuf {
        self.base_path.join("cards.json")
    }

    fn settings_path(&self) -> PathBuf {
        self.base_path.join("settings.json")
    }

    /// Initialize the storage directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// Load the card store; a missing file is an empty store
    pub fn load_store(&self) -> Result<CardStore> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(CardStore::empty());
        }

        let content = fs::read_to_string(&path)?;
        let store: CardStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    /// Write the full card store
    pub fn save_store(&self, store: &CardStore) -> Result<()> {
        fs::write(self.store_path(), serde_json::to_string_pretty(store)?)?;
        Ok(())
    }

    /// Write one reviewed card back into the store by id lookup
    pub fn update_card(&self, card: &Card) -> Result<()> {
        let mut store = self.load_store()?;
        let pos = store
            .cards
            .iter()
            .position(|c| c.id == card.id)
            .ok_or_else(|| CardStorageError::CardNotFound(card.id.clone()))?;

        store.cards[pos] = card.clone();
        store.timestamp = Utc::now();
        self.save_store(&store)
    }

    /// Load settings, applying defaults and domain clamping once.
    ///
    /// A missing file yields the defaults; a malformed or unknown-field
    /// file is an error rather than a silent reset.
    pub fn load_settings(&self) -> Result<ReviewSettings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(ReviewSettings::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: ReviewSettings = serde_json::from_str(&content)?;
        Ok(settings.clamped())
    }

    pub fn save_settings(&self, settings: &ReviewSettings) -> Result<()> {
        fs::write(
            self.settings_path(),
            serde_json::to_string_pretty(settings)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    use super::*;

    fn storage() -> (TempDir, CardStorage) {
        let dir = TempDir::new().unwrap();
        let storage = CardStorage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        (dir, storage)
    }

    fn card(front: &str) -> Card {
        Card::new(front.to_string(), "back".to_string(), "Notes".to_string(), 0)
    }

    #[test]
    fn missing_store_loads_empty() {
        let (_dir, storage) = storage();
        let store = storage.load_store().unwrap();
        assert!(store.cards.is_empty());
        assert_eq!(store.total_cards, 0);
    }

    #[test]
    fn store_round_trip_preserves_cards() {
        let (_dir, storage) = storage();
        let now = Utc::now();
        let mut reviewed = card("Q1");
        reviewed.last_reviewed = Some(now);
        reviewed.next_review = Some(now + Duration::days(3));
        reviewed.ease_factor = 2.2;
        reviewed.interval = 3;
        reviewed.review_count = 2;

        let store = CardStore::new(vec![reviewed.clone(), card("Q2")]);
        storage.save_store(&store).unwrap();

        let loaded = storage.load_store().unwrap();
        assert_eq!(loaded.total_cards, 2);
        assert_eq!(loaded.cards[0], reviewed);
        assert_eq!(loaded.cards[1].front, "Q2");
    }

    #[test]
    fn update_card_replaces_by_id() {
        let (_dir, storage) = storage();
        storage
            .save_store(&CardStore::new(vec![card("Q1"), card("Q2")]))
            .unwrap();

        let mut rated = card("Q1");
        rated.review_count = 1;
        rated.interval = 3;
        storage.update_card(&rated).unwrap();

        let loaded = storage.load_store().unwrap();
        assert_eq!(loaded.cards[0].review_count, 1);
        assert_eq!(loaded.cards[0].interval, 3);
        assert_eq!(loaded.cards[1].review_count, 0);
    }

    #[test]
    fn update_unknown_card_is_an_error() {
        let (_dir, storage) = storage();
        storage.save_store(&CardStore::new(vec![])).unwrap();

        let result = storage.update_card(&card("ghost"));
        assert!(matches!(result, Err(CardStorageError::CardNotFound(_))));
    }

    #[test]
    fn missing_settings_load_defaults() {
        let (_dir, storage) = storage();
        assert_eq!(storage.load_settings().unwrap(), ReviewSettings::default());
    }

    #[test]
    fn settings_round_trip() {
        let (_dir, storage) = storage();
        let mut settings = ReviewSettings::default();
        settings.cards_per_session = 7;
        settings.easy_bonus = 1.5;
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings().unwrap(), settings);
    }

    #[test]
    fn out_of_range_settings_are_clamped_at_load() {
        let (_dir, storage) = storage();
        fs::write(
            storage.settings_path(),
            r#"{"easyBonus": 9.0, "maxInterval": 5}"#,
        )
        .unwrap();

        let settings = storage.load_settings().unwrap();
        assert_eq!(settings.easy_bonus, 2.0);
        assert_eq!(settings.max_interval, 30);
    }

    #[test]
    fn unknown_settings_fields_are_an_error() {
        let (_dir, storage) = storage();
        fs::write(storage.settings_path(), r#"{"mystery": 1}"#).unwrap();
        assert!(storage.load_settings().is_err());
    }
}
