use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Result, ScrollError};

// URL-safe alphabet; never pads on encode, accepts either form on decode.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode token bytes as unpadded base64url.
pub fn encode_base64(bytes: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Decode a base64url token, trimming surrounding whitespace.
///
/// Tokens longer than `max_len` characters are rejected before decoding.
pub fn decode_base64(token: &str, max_len: usize) -> Result<Vec<u8>> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ScrollError::malformed("token is empty"));
    }

    if token.len() > max_len {
        return Err(ScrollError::malformed(format!(
            "token exceeds max length: {} chars (max {max_len})",
            token.len()
        )));
    }

    URL_SAFE_LENIENT
        .decode(token)
        .map_err(|e| ScrollError::malformed(format!("invalid base64: {e}")))
}
