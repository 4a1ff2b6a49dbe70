use anyhow::{Context, Result};
use chrono::Utc;

use mneme::flashcards::ReviewStats;

use crate::app::App;

pub fn run(app: &App) -> Result<()> {
    let store = app.storage.load_store().context("Failed to load cards")?;
    let now = Utc::now();

    if store.cards.is_empty() {
        println!("The card store is empty. Run `mneme-cli index` first.");
        return Ok(());
    }

    for card in &store.cards {
        let due = match card.next_review {
            _ if card.is_new() => "new".to_string(),
            Some(next) if next <= now => "due".to_string(),
            Some(next) => format!("due {}", next.format("%Y-%m-%d")),
            None => "due".to_string(),
        };
        println!("{:40}  [{}]  {}", truncate(&card.front, 40), card.source_file, due);
    }

    let stats = ReviewStats::collect(&store.cards, now);
    println!(
        "\n{} cards: {} new, {} reviewed, {} due",
        stats.total_cards, stats.new_cards, stats.reviewed_cards, stats.due_cards
    );

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let kept: String = flat.chars().take(max - 1).collect();
        format!("{kept}…")
    }
}
