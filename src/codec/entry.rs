//! Body layout shared by both token kinds.

use crate::codec::format::WireFormat;
use crate::config::CodecConfig;
use crate::error::{Result, ScrollError};
use crate::search::{PerShardEntry, SearchContextId, SearchShardTarget, ShardId, ShardResult};
use crate::wire::{StructReader, StructWriter, decode_base64, encode_base64};

// node, alias flag, index name, index uuid, shard: one byte each; context id: eight.
const MIN_ENTRY_LEN: usize = 13;

/// Encode `results` for `format` and frame them as base64url.
pub(crate) fn encode<R: ShardResult>(results: &[R], format: WireFormat) -> Result<String> {
    let mut writer = StructWriter::with_capacity(2 + results.len() * 32);
    writer.write_u8(format.marker())?;
    writer.write_count(results.len())?;

    for result in results {
        let target = result.shard_target();
        let context_id = result.search_context_id();
        let shard_id = target.shard_id();

        writer.write_string(target.node_id())?;
        writer.write_optional_string(target.cluster_alias())?;
        writer.write_string(shard_id.index_name())?;
        writer.write_string(shard_id.index_uuid())?;
        writer.write_varint(shard_id.shard() as u32)?;
        writer.write_i64(context_id.id())?;
        match format {
            WireFormat::ContextIdOnly => {}
            WireFormat::WithReaderId => writer.write_string(context_id.reader_id())?,
        }
    }

    let len = writer.len();
    let token = encode_base64(&writer.into_bytes());
    log::debug!(
        "encoded {} shard entries as {format:?} ({len} bytes)",
        results.len()
    );
    Ok(token)
}

/// Decode a token into its entries, in encode order.
///
/// Either every entry decodes or the call fails; no partial result is returned.
pub(crate) fn decode(token: &str, config: &CodecConfig) -> Result<Vec<PerShardEntry>> {
    let bytes = decode_base64(token, config.max_token_len)?;
    let mut reader = StructReader::new(&bytes);

    let format = WireFormat::from_marker(reader.read_u8()?)?;
    let count = reader.read_count()?;

    if count > config.max_entries {
        return Err(ScrollError::malformed(format!(
            "token declares {count} entries (max {})",
            config.max_entries
        )));
    }

    let min_entry_len = match format {
        WireFormat::ContextIdOnly => MIN_ENTRY_LEN,
        WireFormat::WithReaderId => MIN_ENTRY_LEN + 1,
    };
    let needed = count.saturating_mul(min_entry_len);
    if needed > reader.remaining() {
        return Err(ScrollError::truncated(needed, reader.remaining()));
    }

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(read_entry(&mut reader, format)?);
    }
    reader.finish()?;

    log::debug!(
        "decoded {} shard entries as {format:?} ({} bytes)",
        entries.len(),
        bytes.len()
    );
    Ok(entries)
}

fn read_entry(reader: &mut StructReader<'_>, format: WireFormat) -> Result<PerShardEntry> {
    let node = reader.read_string()?;
    let cluster_alias = reader.read_optional_string()?;
    let index_name = reader.read_string()?;
    let index_uuid = reader.read_string()?;
    let shard = reader.read_varint()? as i32;
    let id = reader.read_i64()?;
    let reader_id = match format {
        WireFormat::ContextIdOnly => String::new(),
        WireFormat::WithReaderId => reader.read_string()?,
    };

    Ok(PerShardEntry::new(
        SearchShardTarget::new(node, ShardId::new(index_name, index_uuid, shard), cluster_alias),
        SearchContextId::new(reader_id, id),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(shard: i32, reader_id: &str) -> PerShardEntry {
        PerShardEntry::new(
            SearchShardTarget::new("node", ShardId::new("idx", "uuid", shard), None),
            SearchContextId::new(reader_id, i64::from(shard)),
        )
    }

    #[test]
    fn test_negative_shard_and_context_id_survive() {
        let input = vec![PerShardEntry::new(
            SearchShardTarget::new("n", ShardId::new("i", "u", -1), None),
            SearchContextId::new("r", i64::MIN),
        )];
        let token = encode(&input, WireFormat::WithReaderId).unwrap();
        assert_eq!(decode(&token, &CodecConfig::default()).unwrap(), input);
    }

    #[test]
    fn test_minimal_entry_length() {
        let input = vec![PerShardEntry::new(
            SearchShardTarget::new("", ShardId::new("", "", 0), None),
            SearchContextId::new("", 0),
        )];
        let token = encode(&input, WireFormat::ContextIdOnly).unwrap();
        let bytes = decode_base64(&token, usize::MAX).unwrap();
        assert_eq!(bytes.len(), 2 + MIN_ENTRY_LEN);
    }

    #[test]
    fn test_count_limit() {
        let input: Vec<_> = (0..3).map(|i| entry(i, "r")).collect();
        let token = encode(&input, WireFormat::WithReaderId).unwrap();

        let config = CodecConfig::builder().max_entries(2).build();
        assert!(matches!(
            decode(&token, &config).unwrap_err(),
            ScrollError::MalformedToken(_)
        ));
        assert_eq!(decode(&token, &CodecConfig::default()).unwrap().len(), 3);
    }

    #[test]
    fn test_oversized_count_fails_before_allocation() {
        let mut writer = StructWriter::new();
        writer.write_u8(WireFormat::ContextIdOnly.marker()).unwrap();
        writer.write_varint(60_000).unwrap();
        let token = encode_base64(&writer.into_bytes());

        let err = decode(&token, &CodecConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ScrollError::TruncatedInput {
                needed: 780_000,
                remaining: 0
            }
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let token = encode(&[entry(1, "a")], WireFormat::WithReaderId).unwrap();
        let mut bytes = decode_base64(&token, usize::MAX).unwrap();
        bytes.push(0);
        let err = decode(&encode_base64(&bytes), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, ScrollError::MalformedToken(_)));
    }
}
