use byteorder::{BigEndian, ByteOrder};

use crate::error::{Result, ScrollError};
use crate::util::varint;

/// Reads primitive fields written by [`StructWriter`](super::StructWriter).
#[derive(Debug)]
pub struct StructReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> StructReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(ScrollError::truncated(len, remaining));
        }
        let bytes = self.bytes;
        let start = self.position;
        self.position += len;
        Ok(&bytes[start..start + len])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_varint(&mut self) -> Result<u32> {
        let bytes = self.bytes;
        let rest = &bytes[self.position..];
        let (value, read) = varint::decode_u32(rest).map_err(|e| match e {
            ScrollError::TruncatedInput { .. } => ScrollError::truncated(rest.len() + 1, rest.len()),
            other => other,
        })?;
        self.position += read;
        Ok(value)
    }

    pub fn read_count(&mut self) -> Result<usize> {
        Ok(self.read_varint()? as usize)
    }

    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_count()?;
        let bytes = self.take(len)?;
        let s = std::str::from_utf8(bytes).map_err(|e| {
            ScrollError::malformed(format!(
                "string ending at byte {} is not valid UTF-8: {e}",
                self.position
            ))
        })?;
        Ok(s.to_string())
    }

    /// Read a presence flag, then the string if the flag is set.
    pub fn read_optional_string(&mut self) -> Result<Option<String>> {
        match self.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.read_string()?)),
            flag => Err(ScrollError::malformed(format!(
                "invalid presence flag {flag} at byte {}",
                self.position - 1
            ))),
        }
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(self) -> Result<()> {
        if self.remaining() != 0 {
            return Err(ScrollError::malformed(format!(
                "not all bytes were read: {} trailing",
                self.remaining()
            )));
        }
        Ok(())
    }
}
