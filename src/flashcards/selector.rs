//! Session selection
//!
//! Picks the cards to present in one review session: due cards first
//! (capped by the daily review limit), never-reviewed cards as a fallback
//! (capped by the daily new limit), then a uniformly shuffled subset of
//! session size. An empty result means nothing is available; the caller
//! may then offer a forced review over the whole store.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::settings::ReviewSettings;

use super::models::Card;

/// Select the cards for a regular session.
pub fn select_session(
    cards: &[Card],
    now: DateTime<Utc>,
    settings: &ReviewSettings,
) -> Vec<Card> {
    let due: Vec<&Card> = cards.iter().filter(|c| c.is_due(now)).collect();

    // Caps are simple truncation; overdue cards are not prioritized
    let pool: Vec<&Card> = if !due.is_empty() {
        due.into_iter()
            .take(settings.reviews_per_day.max(0) as usize)
            .collect()
    } else {
        cards
            .iter()
            .filter(|c| c.last_reviewed.is_none())
            .take(settings.new_cards_per_day.max(0) as usize)
            .collect()
    };

    sample(pool, settings.cards_per_session.max(0) as usize)
}

/// Select cards regardless of due date: never-reviewed first, then least
/// recently reviewed, capped to the session size.
pub fn select_forced(cards: &[Card], settings: &ReviewSettings) -> Vec<Card> {
    let mut all: Vec<&Card> = cards.iter().collect();
    // None sorts before Some, putting never-reviewed cards first
    all.sort_by_key(|c| c.last_reviewed);
    all.into_iter()
        .take(settings.cards_per_session.max(0) as usize)
        .cloned()
        .collect()
}

/// Uniform random subset via Fisher-Yates shuffle
fn sample(mut pool: Vec<&Card>, size: usize) -> Vec<Card> {
    let mut rng = thread_rng();
    pool.shuffle(&mut rng);
    pool.into_iter().take(size).cloned().collect()
}
