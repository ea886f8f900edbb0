//! Per-shard search state carried by tokens.
//!
//! The search-execution layer collects one [`ShardResult`] per shard into a
//! [`WriteOnceSlots`] array; once every slot is settled the array is handed to
//! a codec which turns the results into a token.

pub mod context;
pub mod result;
pub mod shard;
pub mod slots;

pub use context::SearchContextId;
pub use result::{PerShardEntry, ShardResult};
pub use shard::{SearchShardTarget, ShardId};
pub use slots::WriteOnceSlots;
