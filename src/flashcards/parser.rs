//! Fenced-block card parser
//!
//! Cards live in fenced code blocks tagged `anki`. Each card is
//! `<front lines>`, a line containing only `?`, then `<back lines>`; a
//! block may hold several cards separated by a blank line before the next
//! card's `?` line:
//!
//! ```text
//! What is the capital of France?
//! ?
//! Paris
//!
//! What is the capital of Spain?
//! ?
//! Madrid
//! ```
//!
//! Malformed sub-blocks (no separator, or more than one) are silently
//! skipped rather than reported.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::models::Card;

/// Info-string tag marking a card block
const CARD_BLOCK_TAG: &str = "anki";
/// Line separating a card's front from its back
const SEPARATOR: &str = "?";

/// Extract candidate cards from a document's raw text.
///
/// Produced cards carry content and provenance only; scheduling state is
/// filled in by the store merge.
pub fn parse_document(text: &str, source_file: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    for (content, position) in card_blocks(text) {
        for (front, back) in split_block(&content) {
            cards.push(Card::new(front, back, source_file.to_string(), position));
        }
    }
    cards
}

/// Locate fenced `anki` blocks, yielding inner text and the byte offset of
/// the opening fence.
fn card_blocks(text: &str) -> Vec<(String, usize)> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let tag = info.split_whitespace().next().unwrap_or("");
                if tag == CARD_BLOCK_TAG {
                    current = Some((String::new(), range.start));
                }
            }
            Event::Text(text) => {
                if let Some((content, _)) = current.as_mut() {
                    content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Split a block's inner text into front/back pairs.
///
/// A naive split on blank lines would break cards whose answer contains
/// blank lines, so a blank-line boundary only starts a new candidate when
/// the segment after it carries its own separator line; other segments are
/// answer continuations of the current candidate.
fn split_block(content: &str) -> Vec<(String, String)> {
    let mut candidates: Vec<String> = Vec::new();

    for segment in blank_line_segments(content) {
        let has_separator = segment.lines().any(|line| line.trim() == SEPARATOR);
        match candidates.last_mut() {
            Some(last) if !has_separator => {
                last.push_str("\n\n");
                last.push_str(&segment);
            }
            _ => candidates.push(segment),
        }
    }

    candidates
        .iter()
        .filter_map(|candidate| split_card(candidate))
        .collect()
}

/// Group lines into segments separated by runs of blank lines
fn blank_line_segments(content: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Accept a candidate iff splitting on the separator yields exactly two
/// non-empty parts.
fn split_card(candidate: &str) -> Option<(String, String)> {
    let mut parts: Vec<String> = vec![String::new()];

    for line in candidate.lines() {
        if line.trim() == SEPARATOR {
            parts.push(String::new());
        } else if let Some(part) = parts.last_mut() {
            if !part.is_empty() {
                part.push('\n');
            }
            part.push_str(line);
        }
    }

    if parts.len() != 2 {
        return None;
    }
    let front = parts[0].trim();
    let back = parts[1].trim();
    if front.is_empty() || back.is_empty() {
        return None;
    }
    Some((front.to_string(), back.to_string()))
}
