//! Content-derived card identity
//!
//! Ids are a pure function of (front, back, source file), so a card keeps
//! its identity when it moves within a document but gets a fresh one when
//! its text is edited or its document is renamed. The hash is a 32-bit
//! polynomial fingerprint, not cryptographic; collisions are tolerated.

const ID_PREFIX: &str = "card-";
const FIELD_DELIMITER: char = '|';

/// Derive the stable id for a card from its content and source.
pub fn card_id(front: &str, back: &str, source_file: &str) -> String {
    let key = format!(
        "{front}{delim}{back}{delim}{source_file}",
        delim = FIELD_DELIMITER
    );
    let mut hash: i32 = 0;
    for ch in key.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    // Widen before abs so i32::MIN cannot overflow
    format!("{}{}", ID_PREFIX, to_base36((hash as i64).abs()))
}

fn to_base36(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = String::new();
    while value > 0 {
        let d = (value % 36) as u8;
        let ch = if d < 10 { b'0' + d } else { b'a' + d - 10 };
        digits.push(ch as char);
        value /= 36;
    }
    digits.chars().rev().collect()
}
