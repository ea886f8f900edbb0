//! Variable-length integer encoding utilities.
//!
//! Unsigned LEB128: seven payload bits per byte, least significant group
//! first, high bit set on every byte except the last.

use crate::error::{Result, ScrollError};

/// Longest encoding of a `u32`.
pub const MAX_U32_LEN: usize = 5;

/// Longest encoding of a `u64`.
pub const MAX_U64_LEN: usize = 10;

/// Append the varint encoding of `value` to `out`, returning the number of bytes written.
pub fn encode_u64(value: u64, out: &mut Vec<u8>) -> usize {
    let mut val = value;
    let mut written = 0;

    loop {
        let mut byte = (val & 0x7F) as u8;
        val >>= 7;

        if val != 0 {
            byte |= 0x80; // Set continuation bit
        }

        out.push(byte);
        written += 1;

        if val == 0 {
            return written;
        }
    }
}

/// Append the varint encoding of `value` to `out`.
pub fn encode_u32(value: u32, out: &mut Vec<u8>) -> usize {
    encode_u64(u64::from(value), out)
}

/// Decode a varint of at most `max_len` bytes from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed. Running out of bytes
/// with the continuation bit still set is a truncation; exceeding `max_len`
/// is a malformed encoding.
fn decode(bytes: &[u8], max_len: usize, bits: u32) -> Result<(u64, usize)> {
    let mut result = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in bytes.iter().enumerate() {
        if i >= max_len {
            return Err(ScrollError::malformed("varint is too long"));
        }

        let group = u64::from(byte & 0x7F);
        if shift + 7 > bits && (group >> (bits - shift)) != 0 {
            return Err(ScrollError::malformed(format!(
                "varint overflows {bits} bits"
            )));
        }
        result |= group << shift;

        if (byte & 0x80) == 0 {
            return Ok((result, i + 1));
        }

        shift += 7;
    }

    Err(ScrollError::truncated(1, 0))
}

/// Decode a `u64` varint from the front of `bytes`.
pub fn decode_u64(bytes: &[u8]) -> Result<(u64, usize)> {
    decode(bytes, MAX_U64_LEN, 64)
}

/// Decode a `u32` varint from the front of `bytes`.
pub fn decode_u32(bytes: &[u8]) -> Result<(u32, usize)> {
    let (value, read) = decode(bytes, MAX_U32_LEN, 32)?;
    Ok((value as u32, read))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_u64() {
        let test_values = [0, 1, 127, 128, 255, 256, 16383, 16384, u64::MAX];

        for &value in &test_values {
            let mut encoded = Vec::new();
            let written = encode_u64(value, &mut encoded);
            let (decoded, bytes_read) = decode_u64(&encoded).unwrap();

            assert_eq!(value, decoded);
            assert_eq!(written, bytes_read);
            assert_eq!(encoded.len(), bytes_read);
        }
    }

    #[test]
    fn test_encode_decode_u32() {
        for value in [0u32, 42, 300, 1 << 21, u32::MAX] {
            let mut encoded = Vec::new();
            encode_u32(value, &mut encoded);
            assert!(encoded.len() <= MAX_U32_LEN);
            assert_eq!(decode_u32(&encoded).unwrap(), (value, encoded.len()));
        }
    }

    #[test]
    fn test_known_encodings() {
        let mut out = Vec::new();
        encode_u32(300, &mut out);
        assert_eq!(out, vec![0xAC, 0x02]);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let (value, read) = decode_u32(&[0x03, 0xFF, 0xFF]).unwrap();
        assert_eq!((value, read), (3, 1));
    }

    #[test]
    fn test_incomplete_varint() {
        // Continuation bit set but no more data
        let err = decode_u64(&[0x80]).unwrap_err();
        assert!(matches!(err, ScrollError::TruncatedInput { .. }));
        assert!(matches!(
            decode_u32(&[]).unwrap_err(),
            ScrollError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn test_overflow() {
        let err = decode_u64(&[0xFF; 20]).unwrap_err();
        assert!(matches!(err, ScrollError::MalformedToken(_)));

        // Fifth byte carries bits above 32
        let err = decode_u32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F]).unwrap_err();
        assert!(matches!(err, ScrollError::MalformedToken(_)));
        assert_eq!(
            decode_u32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]).unwrap(),
            (u32::MAX, 5)
        );
    }
}
