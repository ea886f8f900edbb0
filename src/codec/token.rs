//! Opaque token types.
//!
//! Scroll ids and reader ids are both base64url strings, but they are never
//! interchangeable, so each kind gets its own type.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self(token.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_token!(
    /// Token resuming a scroll; decoded with [`ScrollCodec`](super::ScrollCodec).
    ScrollId
);

opaque_token!(
    /// Token naming a point-in-time reader; decoded with [`ContextIdCodec`](super::ContextIdCodec).
    ReaderId
);
