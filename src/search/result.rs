use serde::{Deserialize, Serialize};

use crate::search::context::SearchContextId;
use crate::search::shard::SearchShardTarget;

/// A per-shard phase result that can be recorded in a token.
pub trait ShardResult {
    fn shard_target(&self) -> &SearchShardTarget;

    fn search_context_id(&self) -> &SearchContextId;
}

impl<R: ShardResult + ?Sized> ShardResult for &R {
    fn shard_target(&self) -> &SearchShardTarget {
        (**self).shard_target()
    }

    fn search_context_id(&self) -> &SearchContextId {
        (**self).search_context_id()
    }
}

/// The plain per-shard record both codecs encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerShardEntry {
    pub target: SearchShardTarget,
    pub context_id: SearchContextId,
}

impl PerShardEntry {
    pub fn new(target: SearchShardTarget, context_id: SearchContextId) -> Self {
        Self { target, context_id }
    }
}

impl ShardResult for PerShardEntry {
    fn shard_target(&self) -> &SearchShardTarget {
        &self.target
    }

    fn search_context_id(&self) -> &SearchContextId {
        &self.context_id
    }
}
