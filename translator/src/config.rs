//! FILENAME: translator/src/config.rs
//! PURPOSE: Tunables for the conversion orchestration.
//! CONTEXT: Loaded from JSON by the embedding application; any key left out
//! keeps its default.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Longest plain-text model reply accepted as an answer on its own.
pub const DEFAULT_MAX_PLAIN_REPLY_LEN: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Reject characters outside the formula alphabet instead of dropping them.
    pub strict_tokens: bool,
    /// Guess a formula by splitting the sentence when the model reply is unusable.
    pub heuristic_fallback: bool,
    pub max_plain_reply_len: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            strict_tokens: false,
            heuristic_fallback: true,
            max_plain_reply_len: DEFAULT_MAX_PLAIN_REPLY_LEN,
        }
    }
}

impl TranslatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
