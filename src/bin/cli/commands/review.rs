use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Utc;

use mneme::flashcards::algorithm::{format_interval, preview_intervals, schedule_review};
use mneme::flashcards::{selector, Card, ReviewRating};
use mneme::indexer::index_vault;

use crate::app::App;

pub fn run(app: &App, force: bool) -> Result<()> {
    if app.settings.enable_automatic_indexing {
        index_vault(&app.storage, &app.vault_dir)
            .with_context(|| format!("Failed to index {}", app.vault_dir.display()))?;
    }

    let store = app.storage.load_store().context("Failed to load cards")?;
    let session = if force {
        selector::select_forced(&store.cards, &app.settings)
    } else {
        selector::select_session(&store.cards, Utc::now(), &app.settings)
    };

    if session.is_empty() {
        if force || store.cards.is_empty() {
            println!("No cards to review. Run `mneme-cli index` after adding card blocks.");
        } else {
            println!("No cards are due. Re-run with --force to review anyway.");
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut reviewed = 0;

    for (i, card) in session.iter().enumerate() {
        println!("\n[{}/{}] {}", i + 1, session.len(), card.front);
        if app.settings.show_source_file {
            println!("  ({})", card.source_file);
        }

        print!("Press Enter to show the answer (q to quit) ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if line?.trim() == "q" {
                    break;
                }
            }
            None => break,
        }

        println!("{}", card.back);

        match prompt_rating(card, app, &mut lines)? {
            Some(rating) => {
                let mut updated = card.clone();
                schedule_review(&mut updated, rating, &app.settings, Utc::now());
                app.storage
                    .update_card(&updated)
                    .context("Failed to save review")?;
                reviewed += 1;
            }
            None => break,
        }
    }

    println!("\nSession done: {} of {} cards rated", reviewed, session.len());
    Ok(())
}

/// Ask for a 1/2/3 rating until the input parses; None means quit
fn prompt_rating(
    card: &Card,
    app: &App,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<ReviewRating>> {
    let previews = preview_intervals(card, &app.settings);

    loop {
        print!(
            "1=Hard ({})  2=Good ({})  3=Easy ({})  q=quit > ",
            format_interval(previews[0]),
            format_interval(previews[1]),
            format_interval(previews[2]),
        );
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let input = line.trim();
        if input == "q" {
            return Ok(None);
        }
        if let Some(rating) = input.parse().ok().and_then(ReviewRating::from_i32) {
            return Ok(Some(rating));
        }
        println!("Please answer 1, 2, 3 or q.");
    }
}
