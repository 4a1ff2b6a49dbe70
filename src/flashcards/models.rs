//! Data models for the card store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::card_id;

/// A flashcard extracted from a fenced block in a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Content-derived identity, stable across indexing runs
    pub id: String,
    pub front: String,
    pub back: String,
    /// Logical name of the document of origin (display only)
    pub source_file: String,
    /// Byte offset of the originating block within its document
    #[serde(default)]
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
    /// SM-2 ease factor, kept within [1.3, 2.5]
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Current interval in days; 0 means never scheduled
    #[serde(default)]
    pub interval: i32,
    /// Total number of reviews; 0 means the card is new
    #[serde(default)]
    pub review_count: i32,
}

fn default_ease_factor() -> f32 {
    2.5
}

impl Card {
    pub fn new(front: String, back: String, source_file: String, position: usize) -> Self {
        let id = card_id(&front, &back, &source_file);
        Self {
            id,
            front,
            back,
            source_file,
            position,
            last_reviewed: None,
            next_review: None,
            ease_factor: default_ease_factor(),
            interval: 0,
            review_count: 0,
        }
    }

    /// Check if the card has never been reviewed
    pub fn is_new(&self) -> bool {
        self.review_count == 0
    }

    /// Due when the next review is unset or has passed
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review.map_or(true, |due| due <= now)
    }
}

/// The full persisted card collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStore {
    /// Time of last save
    pub timestamp: DateTime<Utc>,
    pub total_cards: usize,
    /// Cards in indexing order (order is not semantically meaningful)
    pub cards: Vec<Card>,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            timestamp: Utc::now(),
            total_cards: cards.len(),
            cards,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Difficulty rating supplied by the user after seeing an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewRating {
    Hard,
    Good,
    Easy,
}

impl ReviewRating {
    /// Map the host's 1/2/3 rating to the enum
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Hard),
            2 => Some(Self::Good),
            3 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// Aggregate counts over the store, for the card overview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_cards: usize,
    pub new_cards: usize,
    pub due_cards: usize,
    pub reviewed_cards: usize,
}

impl ReviewStats {
    pub fn collect(cards: &[Card], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total_cards: cards.len(),
            ..Self::default()
        };

        for card in cards {
            if card.is_new() {
                stats.new_cards += 1;
            } else {
                stats.reviewed_cards += 1;
            }
            if card.is_due(now) {
                stats.due_cards += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_card_has_default_state() {
        let card = Card::new("Q".into(), "A".into(), "Notes".into(), 0);
        assert!(card.is_new());
        assert_eq!(card.ease_factor, 2.5);
        assert_eq!(card.interval, 0);
        assert_eq!(card.review_count, 0);
        assert!(card.last_reviewed.is_none());
        assert!(card.next_review.is_none());
    }

    #[test]
    fn card_without_next_review_is_due() {
        let card = Card::new("Q".into(), "A".into(), "Notes".into(), 0);
        assert!(card.is_due(Utc::now()));
    }

    #[test]
    fn card_scheduled_in_future_is_not_due() {
        let now = Utc::now();
        let mut card = Card::new("Q".into(), "A".into(), "Notes".into(), 0);
        card.next_review = Some(now + Duration::days(3));
        assert!(!card.is_due(now));
        assert!(card.is_due(now + Duration::days(3)));
    }

    #[test]
    fn scheduling_state_survives_serialization() {
        let now = Utc::now();
        let mut card = Card::new("Q".into(), "A".into(), "Notes".into(), 42);
        card.last_reviewed = Some(now);
        card.next_review = Some(now + Duration::days(3));
        card.ease_factor = 2.35;
        card.interval = 3;
        card.review_count = 2;

        let json = serde_json::to_string(&card).unwrap();
        let restored: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, card);
    }

    #[test]
    fn unset_timestamps_are_omitted_from_json() {
        let card = Card::new("Q".into(), "A".into(), "Notes".into(), 0);
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("lastReviewed"));
        assert!(!json.contains("nextReview"));
        assert!(json.contains("easeFactor"));
    }

    #[test]
    fn stats_count_new_and_due() {
        let now = Utc::now();
        let mut reviewed = Card::new("Q1".into(), "A1".into(), "Notes".into(), 0);
        reviewed.review_count = 3;
        reviewed.last_reviewed = Some(now - Duration::days(1));
        reviewed.next_review = Some(now + Duration::days(2));
        let fresh = Card::new("Q2".into(), "A2".into(), "Notes".into(), 0);

        let stats = ReviewStats::collect(&[reviewed, fresh], now);
        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.new_cards, 1);
        assert_eq!(stats.reviewed_cards, 1);
        assert_eq!(stats.due_cards, 1);
    }
}
