//! Ingestion configuration module.
//!
//! Controls how a word file is split into tokens before they reach the dictionary.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Punctuation that separates words in addition to whitespace.
pub const DEFAULT_DELIMITERS: &str = ",.;:!?()[]{}\"'";

/// Ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngestConfig {
    /// Characters that split words, whitespace always splits
    pub delimiters: String,

    /// Tokens longer than this many characters are skipped (0 disables the limit)
    pub max_word_chars: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            max_word_chars: 0,
        }
    }
}

impl IngestConfig {
    /// Returns `true` if `c` separates tokens.
    pub fn is_delimiter(&self, c: char) -> bool {
        c.is_whitespace() || self.delimiters.contains(c)
    }
}

impl Validate for IngestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(c) = self.delimiters.chars().find(|c| c.is_alphanumeric()) {
            return Err(ConfigError::ValidationError(format!(
                "delimiters must not contain letters or digits, found '{c}'"
            )));
        }

        Ok(())
    }
}
