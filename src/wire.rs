//! Binary primitives shared by the token codecs.
//!
//! [`StructWriter`] appends fields to a growable buffer and [`StructReader`]
//! reads them back from a byte slice, failing with
//! [`ScrollError::TruncatedInput`](crate::error::ScrollError::TruncatedInput)
//! on short reads. [`encode_base64`] and [`decode_base64`] frame the finished
//! bytes as URL-safe text.

mod framing;
mod reader;
mod writer;

pub use framing::{decode_base64, encode_base64};
pub use reader::StructReader;
pub use writer::StructWriter;
