use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an open search reader on one shard.
///
/// `id` is the shard-local context number; `reader_id` is an opaque string
/// naming the reader instance and may be empty. Tokens built for versions
/// before [`Version::READER_ID_INTRODUCED`](crate::Version::READER_ID_INTRODUCED)
/// drop the reader id, and decode it as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchContextId {
    reader_id: String,
    id: i64,
}

impl SearchContextId {
    pub fn new(reader_id: impl Into<String>, id: i64) -> Self {
        Self {
            reader_id: reader_id.into(),
            id,
        }
    }

    /// A context id without a reader id.
    pub fn without_reader(id: i64) -> Self {
        Self::new(String::new(), id)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn reader_id(&self) -> &str {
        &self.reader_id
    }
}

impl fmt::Display for SearchContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.reader_id, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(SearchContextId::new("a", 1), SearchContextId::new("a", 1));
        assert_ne!(SearchContextId::new("a", 1), SearchContextId::new("b", 1));
        assert_ne!(SearchContextId::new("a", 1), SearchContextId::new("a", 2));
        assert_eq!(
            SearchContextId::without_reader(3),
            SearchContextId::new("", 3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchContextId::new("abc", 42).to_string(), "[abc][42]");
    }
}
