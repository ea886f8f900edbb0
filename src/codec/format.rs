//! Version gate for the reader id field.

use crate::error::{Result, ScrollError};
use crate::version::Version;

/// Whether tokens built for `version` carry a reader id per shard.
///
/// This is the only place the cutoff is consulted; codecs go through
/// [`WireFormat::for_version`].
pub fn includes_reader_id(version: Version) -> bool {
    version.on_or_after(Version::READER_ID_INTRODUCED)
}

/// The known token body layouts, identified by the leading marker byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Context ids only; reader ids decode as empty strings.
    ContextIdOnly,
    /// Context ids followed by the reader id of every shard.
    WithReaderId,
}

impl WireFormat {
    const CONTEXT_ID_ONLY_MARKER: u8 = 0x01;
    const WITH_READER_ID_MARKER: u8 = 0x02;

    /// The layout to write for a negotiated `version`.
    pub fn for_version(version: Version) -> Self {
        if includes_reader_id(version) {
            WireFormat::WithReaderId
        } else {
            WireFormat::ContextIdOnly
        }
    }

    pub fn marker(self) -> u8 {
        match self {
            WireFormat::ContextIdOnly => Self::CONTEXT_ID_ONLY_MARKER,
            WireFormat::WithReaderId => Self::WITH_READER_ID_MARKER,
        }
    }

    pub fn from_marker(marker: u8) -> Result<Self> {
        match marker {
            Self::CONTEXT_ID_ONLY_MARKER => Ok(WireFormat::ContextIdOnly),
            Self::WITH_READER_ID_MARKER => Ok(WireFormat::WithReaderId),
            other => Err(ScrollError::UnsupportedFormat(other)),
        }
    }

    pub fn includes_reader_id(self) -> bool {
        match self {
            WireFormat::ContextIdOnly => false,
            WireFormat::WithReaderId => true,
        }
    }
}
