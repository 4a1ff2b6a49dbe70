//! SM-2-style scheduling
//!
//! A three-button variant of SuperMemo 2. Ratings:
//! - 1 Hard: ease drops, interval grows slowly
//! - 2 Good: ease unchanged
//! - 3 Easy: ease grows (scaled by the configured easy bonus)
//!
//! The first review of a card uses a fixed interval ladder; after that the
//! interval grows multiplicatively from the ease factor, capped at the
//! configured maximum. There is no terminal state: cards stay reviewable
//! forever.

use chrono::{DateTime, Duration, Utc};

use crate::settings::ReviewSettings;

use super::models::{Card, ReviewRating};

/// Minimum ease factor allowed
const MIN_EASE_FACTOR: f32 = 1.3;
/// Maximum ease factor allowed
const MAX_EASE_FACTOR: f32 = 2.5;
/// Ease adjustment per rating step
const EASE_STEP: f32 = 0.15;

/// First-review intervals in days for Hard, Good, Easy
const FIRST_INTERVALS: [i32; 3] = [1, 3, 7];

/// Result of calculating the next review
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub interval: i32,
    pub ease_factor: f32,
    pub next_review: DateTime<Utc>,
}

/// Calculate the next interval and ease factor for a rated card.
///
/// Pure with respect to its inputs; the caller applies the outcome via
/// [`schedule_review`] or writes it back itself.
pub fn calculate_next_review(
    card: &Card,
    rating: ReviewRating,
    settings: &ReviewSettings,
    now: DateTime<Utc>,
) -> ReviewOutcome {
    let ease_factor = match rating {
        ReviewRating::Hard => (card.ease_factor - EASE_STEP).max(MIN_EASE_FACTOR),
        ReviewRating::Good => card.ease_factor,
        ReviewRating::Easy => {
            (card.ease_factor + EASE_STEP * settings.easy_bonus).min(MAX_EASE_FACTOR)
        }
    };

    // interval == 0 marks "no prior interval"; the first scheduled review
    // uses fixed literals and ignores the ease factor entirely
    let interval = if card.interval == 0 {
        match rating {
            ReviewRating::Hard => FIRST_INTERVALS[0],
            ReviewRating::Good => FIRST_INTERVALS[1],
            ReviewRating::Easy => FIRST_INTERVALS[2],
        }
    } else {
        let grown = (card.interval as f32 * ease_factor * settings.interval_modifier).round();
        (grown as i32).min(settings.max_interval)
    };

    ReviewOutcome {
        interval,
        ease_factor,
        next_review: now + Duration::days(interval as i64),
    }
}

/// Apply a rating to a card, updating its scheduling state in place.
///
/// The caller is responsible for writing the card back into the store.
pub fn schedule_review(
    card: &mut Card,
    rating: ReviewRating,
    settings: &ReviewSettings,
    now: DateTime<Utc>,
) {
    let outcome = calculate_next_review(card, rating, settings, now);
    card.interval = outcome.interval;
    card.ease_factor = outcome.ease_factor;
    card.next_review = Some(outcome.next_review);
    card.last_reviewed = Some(now);
    card.review_count += 1;
}

/// The interval each rating would give, for display next to the buttons
pub fn preview_intervals(card: &Card, settings: &ReviewSettings) -> [i32; 3] {
    let now = Utc::now();
    [ReviewRating::Hard, ReviewRating::Good, ReviewRating::Easy]
        .map(|rating| calculate_next_review(card, rating, settings, now).interval)
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i32) -> String {
    if days == 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
