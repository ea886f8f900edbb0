//! Node and wire versions.
//!
//! A [`Version`] identifies the software release a node runs. Tokens are
//! always built for the negotiated version of an operation, i.e. the oldest
//! version among all participating nodes, so every node that may later be
//! handed the token is able to read it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollError};

/// A release version, ordered by `major`, then `minor`, then `revision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl Version {
    pub const V_7_0_0: Version = Version::new(7, 0, 0);
    pub const V_7_1_0: Version = Version::new(7, 1, 0);
    pub const V_7_2_0: Version = Version::new(7, 2, 0);
    pub const V_7_3_0: Version = Version::new(7, 3, 0);
    pub const V_7_4_0: Version = Version::new(7, 4, 0);
    pub const V_7_5_0: Version = Version::new(7, 5, 0);
    pub const V_7_6_0: Version = Version::new(7, 6, 0);
    pub const V_7_6_2: Version = Version::new(7, 6, 2);
    pub const V_7_7_0: Version = Version::new(7, 7, 0);
    pub const V_7_8_0: Version = Version::new(7, 8, 0);
    pub const V_7_9_0: Version = Version::new(7, 9, 0);
    pub const V_7_10_0: Version = Version::new(7, 10, 0);

    /// The version of this build.
    pub const CURRENT: Version = Version::V_7_10_0;

    /// First version whose tokens carry a reader id for every shard.
    pub const READER_ID_INTRODUCED: Version = Version::V_7_7_0;

    /// Every released version this build knows about, oldest first.
    pub const KNOWN: &'static [Version] = &[
        Version::V_7_0_0,
        Version::V_7_1_0,
        Version::V_7_2_0,
        Version::V_7_3_0,
        Version::V_7_4_0,
        Version::V_7_5_0,
        Version::V_7_6_0,
        Version::V_7_6_2,
        Version::V_7_7_0,
        Version::V_7_8_0,
        Version::V_7_9_0,
        Version::V_7_10_0,
    ];

    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Numeric id, one byte per component: `0x00_07_07_00` for 7.7.0.
    ///
    /// Sorts the same way as [`Version`] itself.
    pub const fn id(&self) -> u32 {
        (self.major as u32) << 16 | (self.minor as u32) << 8 | self.revision as u32
    }

    pub fn on_or_after(&self, other: Version) -> bool {
        *self >= other
    }

    pub fn before(&self, other: Version) -> bool {
        *self < other
    }

    /// The oldest of the given participant versions, or `None` if there are none.
    pub fn negotiate<I>(versions: I) -> Option<Version>
    where
        I: IntoIterator<Item = Version>,
    {
        versions.into_iter().min()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl FromStr for Version {
    type Err = ScrollError;

    /// Parses `major.minor.revision`, ignoring a `-qualifier` suffix such as `-SNAPSHOT`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let core = trimmed.split_once('-').map_or(trimmed, |(core, _)| core);

        let mut parts = core.split('.');
        let mut next = |name: &str| -> Result<u8> {
            let part = parts
                .next()
                .ok_or_else(|| ScrollError::invalid_version(format!("'{s}' is missing the {name} part")))?;
            part.parse::<u8>()
                .map_err(|e| ScrollError::invalid_version(format!("'{s}' has a bad {name} part: {e}")))
        };

        let major = next("major")?;
        let minor = next("minor")?;
        let revision = next("revision")?;

        if parts.next().is_some() {
            return Err(ScrollError::invalid_version(format!(
                "'{s}' has more than three parts"
            )));
        }

        Ok(Version::new(major, minor, revision))
    }
}

impl TryFrom<String> for Version {
    type Error = ScrollError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
