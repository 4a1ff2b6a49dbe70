//! Store merging
//!
//! A full indexing pass rebuilds the store from scratch; merging carries
//! review history forward for cards whose id survived the rescan. The
//! result is exactly the freshly parsed set, so cards whose source block
//! disappeared drop out of the store.

use std::collections::HashMap;

use super::models::Card;

/// Reconcile freshly parsed cards against the previously persisted list.
///
/// A fresh card whose id exists in `previous` takes over that card's
/// scheduling sub-state; its text and provenance stay the fresh values.
/// Everything else keeps the defaults set by [`Card::new`].
pub fn merge_cards(fresh: Vec<Card>, previous: &[Card]) -> Vec<Card> {
    let by_id: HashMap<&str, &Card> = previous.iter().map(|c| (c.id.as_str(), c)).collect();

    fresh
        .into_iter()
        .map(|mut card| {
            if let Some(old) = by_id.get(card.id.as_str()) {
                card.last_reviewed = old.last_reviewed;
                card.next_review = old.next_review;
                card.ease_factor = old.ease_factor;
                card.interval = old.interval;
                card.review_count = old.review_count;
            }
            card
        })
        .collect()
}
