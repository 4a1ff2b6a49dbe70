//! Full-rescan indexing of a document vault
//!
//! Every pass rebuilds the entire store: scan all markdown documents,
//! parse their card blocks, merge against the persisted store so review
//! history survives, and save. A document that cannot be read is logged
//! and skipped; one bad file never aborts the pass.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::flashcards::merge::merge_cards;
use crate::flashcards::parser::parse_document;
use crate::flashcards::storage::{CardStorage, Result};
use crate::flashcards::CardStore;

/// Outcome of one indexing pass
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub total_cards: usize,
    pub new_cards: usize,
}

/// Rescan `vault_dir` and rebuild the card store.
pub fn index_vault(storage: &CardStorage, vault_dir: &Path) -> Result<IndexSummary> {
    let previous = storage.load_store()?;

    let mut fresh = Vec::new();
    let mut summary = IndexSummary::default();

    for entry in WalkDir::new(vault_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !path.extension().map_or(false, |ext| ext == "md") {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(text) => {
                fresh.extend(parse_document(&text, &source_name(path)));
                summary.files_scanned += 1;
            }
            Err(e) => {
                log::warn!("Skipping unreadable document {}: {}", path.display(), e);
                summary.files_failed += 1;
            }
        }
    }

    let known: HashSet<&str> = previous.cards.iter().map(|c| c.id.as_str()).collect();
    let merged = merge_cards(fresh, &previous.cards);
    summary.new_cards = merged
        .iter()
        .filter(|c| !known.contains(c.id.as_str()))
        .count();
    summary.total_cards = merged.len();

    storage.save_store(&CardStore::new(merged))?;
    log::info!(
        "Indexed {} cards from {} documents ({} new)",
        summary.total_cards,
        summary.files_scanned,
        summary.new_cards
    );

    Ok(summary)
}

/// Logical document name: the file name without its extension
fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    use crate::flashcards::algorithm::schedule_review;
    use crate::flashcards::ReviewRating;
    use crate::settings::ReviewSettings;

    use super::*;

    fn setup() -> (TempDir, CardStorage, TempDir) {
        let data_dir = TempDir::new().unwrap();
        let storage = CardStorage::new(data_dir.path().to_path_buf());
        storage.init().unwrap();
        let vault = TempDir::new().unwrap();
        (data_dir, storage, vault)
    }

    #[test]
    fn indexes_cards_across_documents() {
        let (_data, storage, vault) = setup();
        fs::write(
            vault.path().join("Geo.md"),
            "```anki\nCapital of France?\n?\nParis\n```\n",
        )
        .unwrap();
        fs::write(
            vault.path().join("Math.md"),
            "```anki\n2+2?\n?\n4\n\n3+3?\n?\n6\n```\n",
        )
        .unwrap();
        fs::write(vault.path().join("notes.txt"), "not markdown").unwrap();

        let summary = index_vault(&storage, vault.path()).unwrap();
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_failed, 0);
        assert_eq!(summary.total_cards, 3);
        assert_eq!(summary.new_cards, 3);

        let store = storage.load_store().unwrap();
        assert_eq!(store.total_cards, 3);
        assert!(store.cards.iter().any(|c| c.source_file == "Geo"));
    }

    #[test]
    fn reindex_preserves_review_state() {
        let (_data, storage, vault) = setup();
        let doc = vault.path().join("Geo.md");
        fs::write(&doc, "```anki\nCapital of France?\n?\nParis\n```\n").unwrap();
        index_vault(&storage, vault.path()).unwrap();

        // Review the card, then run another pass over the same text
        let mut store = storage.load_store().unwrap();
        let mut card = store.cards.remove(0);
        schedule_review(
            &mut card,
            ReviewRating::Good,
            &ReviewSettings::default(),
            Utc::now(),
        );
        storage.update_card(&card).unwrap();

        let summary = index_vault(&storage, vault.path()).unwrap();
        assert_eq!(summary.new_cards, 0);

        let store = storage.load_store().unwrap();
        assert_eq!(store.cards[0].review_count, 1);
        assert_eq!(store.cards[0].interval, 3);
        assert!(store.cards[0].next_review.is_some());
    }

    #[test]
    fn removed_blocks_drop_their_cards() {
        let (_data, storage, vault) = setup();
        let doc = vault.path().join("Geo.md");
        fs::write(
            &doc,
            "```anki\nQ1\n?\nA1\n\nQ2\n?\nA2\n```\n",
        )
        .unwrap();
        index_vault(&storage, vault.path()).unwrap();

        fs::write(&doc, "```anki\nQ1\n?\nA1\n```\n").unwrap();
        let summary = index_vault(&storage, vault.path()).unwrap();
        assert_eq!(summary.total_cards, 1);
        assert_eq!(summary.new_cards, 0);

        let store = storage.load_store().unwrap();
        assert_eq!(store.cards[0].front, "Q1");
    }

    #[test]
    fn edited_card_restarts_as_new() {
        let (_data, storage, vault) = setup();
        let doc = vault.path().join("Geo.md");
        fs::write(&doc, "```anki\nQ1\n?\nA1\n```\n").unwrap();
        index_vault(&storage, vault.path()).unwrap();

        let mut store = storage.load_store().unwrap();
        let mut card = store.cards.remove(0);
        card.review_count = 5;
        card.interval = 10;
        card.last_reviewed = Some(Utc::now() - Duration::days(1));
        storage.update_card(&card).unwrap();

        fs::write(&doc, "```anki\nQ1 edited\n?\nA1\n```\n").unwrap();
        let summary = index_vault(&storage, vault.path()).unwrap();
        assert_eq!(summary.new_cards, 1);

        let store = storage.load_store().unwrap();
        assert_eq!(store.cards[0].review_count, 0);
        assert!(store.cards[0].last_reviewed.is_none());
    }

    #[test]
    fn empty_vault_yields_empty_store() {
        let (_data, storage, vault) = setup();
        let summary = index_vault(&storage, vault.path()).unwrap();
        assert_eq!(summary.files_scanned, 0);
        assert_eq!(summary.total_cards, 0);
        assert!(storage.load_store().unwrap().cards.is_empty());
    }
}
