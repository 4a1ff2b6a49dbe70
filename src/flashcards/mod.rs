//! Flashcard extraction and spaced repetition
//!
//! This module provides:
//! - Parsing of `anki` fenced blocks into question/answer cards
//! - Content-derived card identity, stable across indexing runs
//! - Store merging that preserves review history across a full rescan
//! - Session selection with due filtering, daily caps and random sampling
//! - SM-2-style scheduling
//! - JSON persistence for the card store and settings

pub mod algorithm;
pub mod id;
pub mod merge;
pub mod models;
pub mod parser;
pub mod selector;
pub mod storage;

pub use models::*;
pub use storage::{CardStorage, CardStorageError};
