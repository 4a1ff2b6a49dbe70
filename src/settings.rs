//! Persisted review settings
//!
//! The settings schema is explicit and versioned: unknown fields are
//! rejected at load, missing fields take their defaults, and numeric
//! fields are clamped to their documented domains exactly once, when the
//! file is read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewSettings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Maximum cards presented in one session
    #[serde(default = "default_cards_per_session")]
    pub cards_per_session: i32,
    /// Daily cap on never-reviewed cards
    #[serde(default = "default_new_cards_per_day")]
    pub new_cards_per_day: i32,
    /// Daily cap on due cards
    #[serde(default = "default_reviews_per_day")]
    pub reviews_per_day: i32,
    #[serde(default = "default_show_source_file")]
    pub show_source_file: bool,
    #[serde(default = "default_enable_markdown_rendering")]
    pub enable_markdown_rendering: bool,
    /// Extra ease growth applied on an Easy rating, domain [1.0, 2.0]
    #[serde(default = "default_easy_bonus")]
    pub easy_bonus: f32,
    /// Global multiplier on interval growth, domain [0.5, 2.0]
    #[serde(default = "default_interval_modifier")]
    pub interval_modifier: f32,
    /// Upper bound on any scheduled interval in days, domain [30, 1000]
    #[serde(default = "default_max_interval")]
    pub max_interval: i32,
    #[serde(default)]
    pub dark_mode_buttons: bool,
    #[serde(default = "default_enable_automatic_indexing")]
    pub enable_automatic_indexing: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_cards_per_session() -> i32 {
    20
}

fn default_new_cards_per_day() -> i32 {
    20
}

fn default_reviews_per_day() -> i32 {
    100
}

fn default_show_source_file() -> bool {
    true
}

fn default_enable_markdown_rendering() -> bool {
    true
}

fn default_easy_bonus() -> f32 {
    1.3
}

fn default_interval_modifier() -> f32 {
    1.0
}

fn default_max_interval() -> i32 {
    365
}

fn default_enable_automatic_indexing() -> bool {
    true
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            cards_per_session: default_cards_per_session(),
            new_cards_per_day: default_new_cards_per_day(),
            reviews_per_day: default_reviews_per_day(),
            show_source_file: default_show_source_file(),
            enable_markdown_rendering: default_enable_markdown_rendering(),
            easy_bonus: default_easy_bonus(),
            interval_modifier: default_interval_modifier(),
            max_interval: default_max_interval(),
            dark_mode_buttons: false,
            enable_automatic_indexing: default_enable_automatic_indexing(),
        }
    }
}

impl ReviewSettings {
    /// Clamp tuning fields to their documented domains.
    ///
    /// Applied once when settings are loaded from disk, so the rest of the
    /// crate can rely on the invariants without re-checking.
    pub fn clamped(mut self) -> Self {
        self.easy_bonus = clamp_f32("easyBonus", self.easy_bonus, 1.0, 2.0);
        self.interval_modifier = clamp_f32("intervalModifier", self.interval_modifier, 0.5, 2.0);
        self.max_interval = clamp_i32("maxInterval", self.max_interval, 30, 1000);
        self
    }
}

fn clamp_f32(name: &str, value: f32, min: f32, max: f32) -> f32 {
    if value < min || value > max {
        let clamped = value.clamp(min, max);
        log::warn!("Settings field {} out of range ({}), using {}", name, value, clamped);
        clamped
    } else {
        value
    }
}

fn clamp_i32(name: &str, value: i32, min: i32, max: i32) -> i32 {
    if value < min || value > max {
        let clamped = value.clamp(min, max);
        log::warn!("Settings field {} out of range ({}), using {}", name, value, clamped);
        clamped
    } else {
        value
    }
}
