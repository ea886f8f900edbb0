//! # Shardscroll
//!
//! Codecs for the continuation tokens of a distributed search.
//!
//! A search that spans many shards leaves an open reader on each of them.
//! Instead of remembering those readers per client, the coordinating node
//! packs every shard's cursor into one opaque token and hands it to the
//! client, which sends it back with the next request.
//!
//! - [`ScrollCodec`] builds a [`ScrollId`] and parses it back into an ordered
//!   [`ParsedScrollId`].
//! - [`ContextIdCodec`] builds a [`ReaderId`] for point-in-time readers and
//!   parses it back into a [`ContextIdMap`] keyed by [`ShardId`].
//!
//! Tokens are built for the negotiated [`Version`] of an operation. From
//! [`Version::READER_ID_INTRODUCED`] on they carry each shard's reader id;
//! older layouts decode it as the empty string. Every token records its own
//! layout, so decoding needs no version.
//!
//! ```
//! use shardscroll::{
//!     PerShardEntry, SearchContextId, SearchShardTarget, ShardId, Version, build_scroll_id,
//!     parse_scroll_id,
//! };
//!
//! let results = vec![PerShardEntry::new(
//!     SearchShardTarget::new("node_1", ShardId::new("idx", "uuid1", 2), None),
//!     SearchContextId::new("a", 1),
//! )];
//!
//! let scroll_id = build_scroll_id(&results, Version::CURRENT).unwrap();
//! let parsed = parse_scroll_id(&scroll_id).unwrap();
//! assert_eq!(parsed.context()[0].node(), "node_1");
//! assert_eq!(parsed.context()[0].search_context_id().reader_id(), "a");
//! ```

pub mod codec;
pub mod config;
mod error;
pub mod search;
mod util;
pub mod version;
pub mod wire;

pub use codec::{
    ContextIdCodec, ContextIdMap, ParsedScrollId, ReaderId, ScrollCodec, ScrollId,
    ScrollIdForNode, SearchContextIdForNode, SearchType, WireFormat, build_scroll_id,
    decode_search_context_id, encode_search_context_id, includes_reader_id, parse_scroll_id,
};
pub use config::{CodecConfig, CodecConfigBuilder};
pub use error::{Result, ScrollError};
pub use search::{
    PerShardEntry, SearchContextId, SearchShardTarget, ShardId, ShardResult, WriteOnceSlots,
};
pub use version::Version;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
