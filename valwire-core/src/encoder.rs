//! Depth-first serializer: value trees to wire bytes.
//!
//! The top level of a message is always an array, so the encoder takes a
//! slice of values; a bare scalar at the top level is unrepresentable.
//! Size caps are checked before any byte of the offending element is
//! written, and a failed call leaves no partial output behind.

use crate::error::{Error, Limit, Result};
use crate::value::{
    MAX_ARRAY_LEN, MAX_DEPTH, MAX_STRING_LEN, TAG_ARRAY, TAG_FLOAT64, TAG_INT32, TAG_STRING, Value,
};
use crate::varint::write_varint;

/// Encodes `items` as a complete wire message into a fresh buffer.
///
/// # Errors
/// Returns [`Error::LimitExceeded`] if an array exceeds [`MAX_ARRAY_LEN`]
/// elements, a string exceeds [`MAX_STRING_LEN`] bytes, or nesting exceeds
/// [`MAX_DEPTH`]. On error no buffer is returned.
pub fn encode(items: &[Value]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(items, &mut out)?;
    Ok(out)
}

/// Encodes `items` by appending to a caller-supplied scratch buffer.
///
/// Reusing a scratch buffer (see [`crate::buffer::BufferPool`]) avoids
/// reallocation; the emitted byte sequence is identical to [`encode`].
///
/// # Errors
/// Same conditions as [`encode`]. On error everything appended by this
/// call is truncated away, so no partial output is observable.
pub fn encode_into(items: &[Value], out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    if let Err(err) = write_array(items, 1, out) {
        out.truncate(start);
        return Err(err);
    }
    Ok(())
}

fn write_array(items: &[Value], depth: usize, out: &mut Vec<u8>) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::LimitExceeded {
            kind: Limit::Depth,
            actual: depth as u64,
            max: MAX_DEPTH as u64,
        });
    }
    if items.len() > MAX_ARRAY_LEN {
        return Err(Error::LimitExceeded {
            kind: Limit::Array,
            actual: items.len() as u64,
            max: MAX_ARRAY_LEN as u64,
        });
    }
    out.push(TAG_ARRAY);
    write_varint(items.len() as u64, out);
    for item in items {
        write_value(item, depth, out)?;
    }
    Ok(())
}

fn write_value(value: &Value, depth: usize, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::String(bytes) => {
            if bytes.len() > MAX_STRING_LEN {
                return Err(Error::LimitExceeded {
                    kind: Limit::String,
                    actual: bytes.len() as u64,
                    max: MAX_STRING_LEN as u64,
                });
            }
            out.push(TAG_STRING);
            write_varint(bytes.len() as u64, out);
            out.extend_from_slice(bytes);
        }
        Value::Int32(v) => {
            out.push(TAG_INT32);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Float64(v) => {
            out.push(TAG_FLOAT64);
            out.extend_from_slice(&v.to_bits().to_be_bytes());
        }
        Value::Array(items) => {
            write_array(items, depth + 1, out)?;
        }
    }
    Ok(())
}
