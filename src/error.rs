//! Error types for the scroll and reader id codecs.
//!
//! Decode failures fall into three classes that callers surface to clients as
//! bad requests: [`ScrollError::MalformedToken`], [`ScrollError::TruncatedInput`]
//! and [`ScrollError::UnsupportedFormat`]. The last one is kept distinct so
//! operators can spot version skew between nodes.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollError>;

/// Errors produced while building or parsing search tokens.
#[derive(Error, Debug)]
pub enum ScrollError {
    /// The token is not valid base64url or its body is structurally invalid.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The token body ended before a declared field was fully read.
    #[error("truncated token: needed {needed} more bytes but only {remaining} remain")]
    TruncatedInput { needed: usize, remaining: usize },

    /// The format marker is not one this build knows about.
    #[error("unsupported scroll format marker: 0x{0:02x}")]
    UnsupportedFormat(u8),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("slot index {index} is out of bounds for {len} slots")]
    SlotOutOfBounds { index: usize, len: usize },

    #[error("slot {index} has already been set")]
    SlotAlreadySet { index: usize },

    /// A slot array was read before every slot had been settled.
    #[error("only {settled} of {len} slots have been settled")]
    Incomplete { settled: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrollError {
    /// Create a malformed token error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        ScrollError::MalformedToken(msg.into())
    }

    /// Create a truncated input error.
    pub fn truncated(needed: usize, remaining: usize) -> Self {
        ScrollError::TruncatedInput { needed, remaining }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ScrollError::InvalidArgument(msg.into())
    }

    /// Create an invalid version error.
    pub fn invalid_version<S: Into<String>>(msg: S) -> Self {
        ScrollError::InvalidVersion(msg.into())
    }

    /// Whether the error stems from client-supplied input and should be
    /// reported as a bad request rather than a server fault.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ScrollError::MalformedToken(_)
                | ScrollError::TruncatedInput { .. }
                | ScrollError::UnsupportedFormat(_)
                | ScrollError::InvalidVersion(_)
        )
    }
}
