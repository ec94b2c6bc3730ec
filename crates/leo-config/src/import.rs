use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_word_set_id() -> i64 {
    1
}

fn default_match_threshold() -> f64 {
    leo_core::matcher::DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Word set new words are added to
    #[serde(default = "default_word_set_id")]
    pub word_set_id: i64,
    /// Minimum similarity for a hint to pick a suggested translation
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            word_set_id: default_word_set_id(),
            match_threshold: default_match_threshold(),
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self {
            word_set_id: env_parse("LINGUALEO_WORD_SET_ID").unwrap_or_else(default_word_set_id),
            match_threshold: env_parse("LINGUALEO_MATCH_THRESHOLD")
                .filter(|t: &f64| (0.0..=1.0).contains(t))
                .unwrap_or_else(default_match_threshold),
        }
    }
}
