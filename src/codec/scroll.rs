//! Scroll id codec.

use std::fmt;

use crate::codec::entry;
use crate::codec::format::WireFormat;
use crate::codec::token::ScrollId;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::search::shard::qualified_node;
use crate::search::{PerShardEntry, SearchContextId, ShardId, ShardResult, WriteOnceSlots};
use crate::version::Version;

/// How the scrolled search was executed, recovered from the shard count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// A single shard: query and fetch happen in one round trip.
    QueryAndFetch,
    /// Several shards: hits are merged on the coordinator before fetching.
    QueryThenFetch,
}

impl SearchType {
    pub fn for_shard_count(count: usize) -> Self {
        if count == 1 {
            SearchType::QueryAndFetch
        } else {
            SearchType::QueryThenFetch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::QueryAndFetch => "queryAndFetch",
            SearchType::QueryThenFetch => "queryThenFetch",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shard's cursor within a scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollIdForNode {
    node: String,
    cluster_alias: Option<String>,
    shard_id: ShardId,
    search_context_id: SearchContextId,
}

impl ScrollIdForNode {
    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn cluster_alias(&self) -> Option<&str> {
        self.cluster_alias.as_deref()
    }

    pub fn shard_id(&self) -> &ShardId {
        &self.shard_id
    }

    pub fn search_context_id(&self) -> &SearchContextId {
        &self.search_context_id
    }

    /// The node id prefixed with the cluster alias for remote shards.
    pub fn qualified_node(&self) -> String {
        qualified_node(self.cluster_alias(), &self.node)
    }
}

impl From<PerShardEntry> for ScrollIdForNode {
    fn from(entry: PerShardEntry) -> Self {
        let PerShardEntry { target, context_id } = entry;
        ScrollIdForNode {
            node: target.node_id().to_string(),
            cluster_alias: target.cluster_alias().map(str::to_string),
            shard_id: target.shard_id().clone(),
            search_context_id: context_id,
        }
    }
}

/// A decoded scroll id. Entries keep the order they were encoded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScrollId {
    source: ScrollId,
    search_type: SearchType,
    context: Vec<ScrollIdForNode>,
}

impl ParsedScrollId {
    /// The token this was parsed from.
    pub fn source(&self) -> &ScrollId {
        &self.source
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn context(&self) -> &[ScrollIdForNode] {
        &self.context
    }

    pub fn into_context(self) -> Vec<ScrollIdForNode> {
        self.context
    }

    /// Whether any shard belongs to the local cluster.
    pub fn has_local_indices(&self) -> bool {
        self.context.iter().any(|c| c.cluster_alias.is_none())
    }
}

/// Builds and parses [`ScrollId`]s.
#[derive(Debug, Clone, Default)]
pub struct ScrollCodec {
    config: CodecConfig,
}

impl ScrollCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `results`, in order, for the negotiated `version`.
    pub fn encode<R: ShardResult>(&self, results: &[R], version: Version) -> Result<ScrollId> {
        let token = entry::encode(results, WireFormat::for_version(version))?;
        Ok(ScrollId::new(token))
    }

    /// Encode the results of a completed slot array, in slot order.
    ///
    /// Empty slots are skipped. Fails while any slot is unsettled.
    pub fn encode_slots<R: ShardResult>(
        &self,
        slots: &WriteOnceSlots<R>,
        version: Version,
    ) -> Result<ScrollId> {
        self.encode(&slots.present()?, version)
    }

    pub fn decode(&self, scroll_id: &ScrollId) -> Result<ParsedScrollId> {
        let context: Vec<ScrollIdForNode> = entry::decode(scroll_id.as_str(), &self.config)?
            .into_iter()
            .map(ScrollIdForNode::from)
            .collect();

        Ok(ParsedScrollId {
            source: scroll_id.clone(),
            search_type: SearchType::for_shard_count(context.len()),
            context,
        })
    }
}

/// Encode `results` with the default configuration.
pub fn build_scroll_id<R: ShardResult>(results: &[R], version: Version) -> Result<ScrollId> {
    ScrollCodec::default().encode(results, version)
}

/// Decode a scroll id with the default configuration.
pub fn parse_scroll_id(scroll_id: &ScrollId) -> Result<ParsedScrollId> {
    ScrollCodec::default().decode(scroll_id)
}
