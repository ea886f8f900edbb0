//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Limits applied when decoding untrusted tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Longest accepted token, in characters.
    pub max_token_len: usize,

    /// Largest accepted entry count declared by a token.
    pub max_entries: usize,
}

impl CodecConfig {
    pub const DEFAULT_MAX_TOKEN_LEN: usize = 64 * 1024;
    pub const DEFAULT_MAX_ENTRIES: usize = 65_536;

    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            max_token_len: Self::DEFAULT_MAX_TOKEN_LEN,
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Default)]
pub struct CodecConfigBuilder {
    max_token_len: Option<usize>,
    max_entries: Option<usize>,
}

impl CodecConfigBuilder {
    pub fn max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = Some(max_token_len);
        self
    }

    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    pub fn build(self) -> CodecConfig {
        CodecConfig {
            max_token_len: self
                .max_token_len
                .unwrap_or(CodecConfig::DEFAULT_MAX_TOKEN_LEN),
            max_entries: self.max_entries.unwrap_or(CodecConfig::DEFAULT_MAX_ENTRIES),
        }
    }
}
