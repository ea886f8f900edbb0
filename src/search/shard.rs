use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one shard of one index generation.
///
/// Equality and hashing cover all three fields, so shards of a deleted and
/// re-created index with the same name never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShardId {
    index_name: String,
    index_uuid: String,
    shard: i32,
}

impl ShardId {
    pub fn new(index_name: impl Into<String>, index_uuid: impl Into<String>, shard: i32) -> Self {
        Self {
            index_name: index_name.into(),
            index_uuid: index_uuid.into(),
            shard,
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn index_uuid(&self) -> &str {
        &self.index_uuid
    }

    pub fn shard(&self) -> i32 {
        self.shard
    }
}

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.index_name, self.shard)
    }
}

/// Where a shard's search ran: the shard, the node holding its reader, and
/// the remote cluster it belongs to (`None` for the local cluster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchShardTarget {
    node_id: String,
    shard_id: ShardId,
    cluster_alias: Option<String>,
}

impl SearchShardTarget {
    pub fn new(node_id: impl Into<String>, shard_id: ShardId, cluster_alias: Option<String>) -> Self {
        Self {
            node_id: node_id.into(),
            shard_id,
            cluster_alias,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn shard_id(&self) -> &ShardId {
        &self.shard_id
    }

    pub fn cluster_alias(&self) -> Option<&str> {
        self.cluster_alias.as_deref()
    }

    pub fn is_local(&self) -> bool {
        self.cluster_alias.is_none()
    }
}

/// `alias:node` for a remote cluster, the bare node id otherwise.
pub(crate) fn qualified_node(cluster_alias: Option<&str>, node: &str) -> String {
    match cluster_alias {
        Some(alias) => format!("{alias}:{node}"),
        None => node.to_string(),
    }
}

impl fmt::Display for SearchShardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{}",
            qualified_node(self.cluster_alias(), &self.node_id),
            self.shard_id
        )
    }
}
