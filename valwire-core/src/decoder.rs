//! Depth-first parser: wire bytes to value trees.
//!
//! Decoding is total over arbitrary input: it never reads out of bounds
//! and never panics, no matter how malformed or truncated the bytes are.
//! String content is copied out of the input, so a decoded tree stays
//! valid after the source buffer is reused or freed.

use crate::error::{Error, Limit, Result};
use crate::value::{
    MAX_ARRAY_LEN, MAX_DEPTH, MAX_STRING_LEN, TAG_ARRAY, TAG_FLOAT64, TAG_INT32, TAG_STRING, Value,
};
use crate::varint;

/// Decodes a complete wire message from `input`.
///
/// Bytes past the end of the top-level array are ignored; the format
/// carries no message-length envelope. Use [`decode_partial`] when framing
/// concatenated messages.
///
/// # Errors
/// - [`Error::EmptyInput`] on zero-length input.
/// - [`Error::InvalidFormat`] if the input does not start with an array tag.
/// - [`Error::UnknownType`] on a tag byte outside the supported set.
/// - [`Error::UnexpectedEof`] if a field needs more bytes than remain.
/// - [`Error::VarintOverflow`] on a length prefix beyond 64 bits.
/// - [`Error::LimitExceeded`] if a declared count, length, or the nesting
///   depth exceeds its cap, raised before the element is allocated.
pub fn decode(input: &[u8]) -> Result<Vec<Value>> {
    decode_partial(input).map(|(items, _)| items)
}

/// Decodes one wire message from the front of `input`, returning the
/// decoded elements and the number of bytes consumed.
///
/// Callers sending multiple messages back-to-back slice the input at the
/// consumed length to find the next message boundary.
///
/// # Errors
/// Same conditions as [`decode`].
pub fn decode_partial(input: &[u8]) -> Result<(Vec<Value>, usize)> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut cursor = Cursor::new(input);
    let items = cursor.read_message()?;
    Ok((items, cursor.position()))
}

/// Forward-only cursor over the input with bounds-checked reads.
struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    const fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    fn read_u8(&mut self) -> Result<u8> {
        match self.input.get(self.position) {
            Some(&byte) => {
                self.position += 1;
                Ok(byte)
            }
            None => Err(Error::UnexpectedEof {
                required: 1,
                available: 0,
            }),
        }
    }

    fn read_varint(&mut self) -> Result<u64> {
        let (value, consumed) = varint::read_varint(self.input, self.position)?;
        self.position += consumed;
        Ok(value)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof {
                required: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.input[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        Ok(raw)
    }

    /// Reads the top-level array, which must start with an array tag.
    fn read_message(&mut self) -> Result<Vec<Value>> {
        if self.input.get(self.position) != Some(&TAG_ARRAY) {
            return Err(Error::InvalidFormat {
                offset: self.position,
            });
        }
        self.position += 1;
        self.read_array_body(1)
    }

    /// Reads an array's count prefix and elements; the tag is already
    /// consumed.
    fn read_array_body(&mut self, depth: usize) -> Result<Vec<Value>> {
        if depth > MAX_DEPTH {
            return Err(Error::LimitExceeded {
                kind: Limit::Depth,
                actual: depth as u64,
                max: MAX_DEPTH as u64,
            });
        }
        let count = self.read_varint()?;
        if count > MAX_ARRAY_LEN as u64 {
            return Err(Error::LimitExceeded {
                kind: Limit::Array,
                actual: count,
                max: MAX_ARRAY_LEN as u64,
            });
        }
        let mut items = Vec::with_capacity(count as usize);
        for _ in 0..count {
            items.push(self.read_value(depth)?);
        }
        Ok(items)
    }

    fn read_value(&mut self, depth: usize) -> Result<Value> {
        let offset = self.position;
        let tag = self.read_u8()?;
        match tag {
            TAG_STRING => {
                let len = self.read_varint()?;
                if len > MAX_STRING_LEN as u64 {
                    return Err(Error::LimitExceeded {
                        kind: Limit::String,
                        actual: len,
                        max: MAX_STRING_LEN as u64,
                    });
                }
                let bytes = self.read_bytes(len as usize)?;
                Ok(Value::String(bytes.to_vec()))
            }
            TAG_INT32 => Ok(Value::Int32(i32::from_be_bytes(self.read_fixed::<4>()?))),
            TAG_FLOAT64 => Ok(Value::Float64(f64::from_bits(u64::from_be_bytes(
                self.read_fixed::<8>()?,
            )))),
            TAG_ARRAY => Ok(Value::Array(self.read_array_body(depth + 1)?)),
            other => Err(Error::UnknownType { tag: other, offset }),
        }
    }
}
