//! Token codecs.
//!
//! Two token kinds share one wire layout:
//!
//! - [`ScrollCodec`] turns per-shard results into a [`ScrollId`] and back into
//!   an ordered [`ParsedScrollId`]. Order matters: later phases correlate
//!   decoded entries positionally with other per-shard state.
//! - [`ContextIdCodec`] turns the same results into a [`ReaderId`] and back
//!   into a map keyed by [`ShardId`](crate::search::ShardId), used to reopen
//!   point-in-time readers.
//!
//! ## Wire layout
//!
//! ```text
//! u8      format marker (see WireFormat)
//! varint  entry count
//! entry * count:
//!   string           node id
//!   nullable string  cluster alias
//!   string           index name
//!   string           index uuid
//!   varint           shard number
//!   i64 (BE)         context id
//!   string           reader id      (WireFormat::WithReaderId only)
//! ```
//!
//! The bytes are framed as unpadded base64url. Decoding never needs to know
//! which version built a token: the marker describes the layout.

mod entry;
pub mod context_id;
pub mod format;
pub mod scroll;
pub mod token;

pub use context_id::{
    ContextIdCodec, ContextIdMap, SearchContextIdForNode, decode_search_context_id,
    encode_search_context_id,
};
pub use format::{WireFormat, includes_reader_id};
pub use scroll::{
    ParsedScrollId, ScrollCodec, ScrollIdForNode, SearchType, build_scroll_id, parse_scroll_id,
};
pub use token::{ReaderId, ScrollId};
