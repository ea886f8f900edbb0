//! Point-in-time reader id codec.
//!
//! Uses the same body layout as scroll ids but decodes into a map keyed by
//! shard, so follow-up requests can look up the context of a specific shard.

use std::collections::HashMap;

use crate::codec::entry;
use crate::codec::format::WireFormat;
use crate::codec::token::ReaderId;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::search::shard::qualified_node;
use crate::search::{PerShardEntry, SearchContextId, ShardId, ShardResult, WriteOnceSlots};
use crate::version::Version;

/// Decoded reader id: one context per shard.
pub type ContextIdMap = HashMap<ShardId, SearchContextIdForNode>;

/// Where a shard's reader lives and which context to reopen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContextIdForNode {
    node: String,
    cluster_alias: Option<String>,
    search_context_id: SearchContextId,
}

impl SearchContextIdForNode {
    pub fn new(
        node: impl Into<String>,
        cluster_alias: Option<String>,
        search_context_id: SearchContextId,
    ) -> Self {
        Self {
            node: node.into(),
            cluster_alias,
            search_context_id,
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn cluster_alias(&self) -> Option<&str> {
        self.cluster_alias.as_deref()
    }

    pub fn search_context_id(&self) -> &SearchContextId {
        &self.search_context_id
    }

    pub fn qualified_node(&self) -> String {
        qualified_node(self.cluster_alias(), &self.node)
    }
}

/// Builds and parses [`ReaderId`]s.
#[derive(Debug, Clone, Default)]
pub struct ContextIdCodec {
    config: CodecConfig,
}

impl ContextIdCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode<R: ShardResult>(&self, results: &[R], version: Version) -> Result<ReaderId> {
        let token = entry::encode(results, WireFormat::for_version(version))?;
        Ok(ReaderId::new(token))
    }

    /// Encode the results of a completed slot array. Empty slots are skipped.
    pub fn encode_slots<R: ShardResult>(
        &self,
        slots: &WriteOnceSlots<R>,
        version: Version,
    ) -> Result<ReaderId> {
        self.encode(&slots.present()?, version)
    }

    /// Decode into a map keyed by shard.
    ///
    /// Upstream never encodes the same shard twice. If a token does, the
    /// later entry replaces the earlier one and a warning is logged.
    pub fn decode(&self, reader_id: &ReaderId) -> Result<ContextIdMap> {
        let entries = entry::decode(reader_id.as_str(), &self.config)?;
        let mut map = HashMap::with_capacity(entries.len());

        for PerShardEntry { target, context_id } in entries {
            let node = SearchContextIdForNode::new(
                target.node_id(),
                target.cluster_alias().map(str::to_string),
                context_id,
            );
            let shard_id = target.shard_id().clone();
            if let Some(previous) = map.insert(shard_id, node) {
                log::warn!(
                    "reader id lists shard {} more than once; replacing context {} on node {}",
                    target.shard_id(),
                    previous.search_context_id(),
                    previous.qualified_node()
                );
            }
        }

        Ok(map)
    }
}

/// Encode `results` as a reader id with the default configuration.
pub fn encode_search_context_id<R: ShardResult>(
    results: &[R],
    version: Version,
) -> Result<ReaderId> {
    ContextIdCodec::default().encode(results, version)
}

/// Decode a reader id with the default configuration.
pub fn decode_search_context_id(reader_id: &ReaderId) -> Result<ContextIdMap> {
    ContextIdCodec::default().decode(reader_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchShardTarget;

    fn entry(node: &str, shard: i32, id: i64) -> PerShardEntry {
        PerShardEntry::new(
            SearchShardTarget::new(node, ShardId::new("idx", "uuid", shard), None),
            SearchContextId::new("r", id),
        )
    }

    #[test]
    fn test_duplicate_shard_last_write_wins() {
        let results = [entry("n1", 0, 1), entry("n2", 1, 2), entry("n3", 0, 3)];
        let map = decode_search_context_id(
            &encode_search_context_id(&results, Version::CURRENT).unwrap(),
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        let shard0 = &map[&ShardId::new("idx", "uuid", 0)];
        assert_eq!(shard0.node(), "n3");
        assert_eq!(shard0.search_context_id().id(), 3);
    }

    #[test]
    fn test_same_shard_number_in_other_index_generation_is_distinct() {
        let results = [
            entry("n1", 0, 1),
            PerShardEntry::new(
                SearchShardTarget::new("n2", ShardId::new("idx", "uuid-new", 0), None),
                SearchContextId::new("r", 2),
            ),
        ];
        let map = decode_search_context_id(
            &encode_search_context_id(&results, Version::CURRENT).unwrap(),
        )
        .unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_qualified_node() {
        let local = SearchContextIdForNode::new("n1", None, SearchContextId::new("r", 1));
        assert_eq!(local.qualified_node(), "n1");
        let remote = SearchContextIdForNode::new(
            "n1",
            Some("remote".to_string()),
            SearchContextId::new("r", 1),
        );
        assert_eq!(remote.qualified_node(), "remote:n1");
    }
}
