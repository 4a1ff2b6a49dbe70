//! Mneme extracts flashcards from fenced blocks in markdown documents and
//! schedules their review with a minimal SM-2-style algorithm.
//!
//! The `flashcards` module holds the core engine (parser, identity, merge,
//! selection, scheduling, storage); `indexer` drives a full rescan of a
//! document vault; `settings` is the persisted configuration schema.

pub mod flashcards;
pub mod indexer;
pub mod settings;

pub use flashcards::{Card, CardStorage, CardStore, ReviewRating};
pub use settings::ReviewSettings;
