use std::path::PathBuf;

use anyhow::{Context, Result};

use mneme::flashcards::CardStorage;
use mneme::settings::ReviewSettings;

/// Shared application state for CLI commands
pub struct App {
    pub storage: CardStorage,
    pub settings: ReviewSettings,
    pub vault_dir: PathBuf,
}

impl App {
    pub fn new(vault: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => CardStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let storage = CardStorage::new(data_dir);
        storage.init().context("Failed to initialize card storage")?;
        let settings = storage.load_settings().context("Failed to load settings")?;
        let vault_dir = vault.unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            storage,
            settings,
            vault_dir,
        })
    }
}
