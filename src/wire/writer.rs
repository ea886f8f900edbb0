use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Result, ScrollError};
use crate::util::varint;

/// Appends primitive fields to an in-memory buffer.
#[derive(Debug, Default)]
pub struct StructWriter {
    buf: Vec<u8>,
}

impl StructWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.buf.write_u8(value)?;
        Ok(())
    }

    /// Write a fixed-width big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.buf.write_i64::<BigEndian>(value)?;
        Ok(())
    }

    pub fn write_varint(&mut self, value: u32) -> Result<()> {
        varint::encode_u32(value, &mut self.buf);
        Ok(())
    }

    /// Write a collection length as a varint.
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| {
            ScrollError::invalid_argument(format!("count {count} exceeds u32::MAX"))
        })?;
        self.write_varint(count)
    }

    /// Write a varint byte length followed by the UTF-8 bytes of `value`.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_count(value.len())?;
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Write a presence flag, then the string if there is one.
    pub fn write_optional_string(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(s) => {
                self.write_u8(1)?;
                self.write_string(s)
            }
            None => self.write_u8(0),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
