//! # Valwire Core
//!
//! Codec for the valwire wire format: compact tagged binary encoding of
//! heterogeneous, recursively-nested values.
//!
//! This crate provides:
//! - The [`Value`] sum type (string, int32, float64, array)
//! - Recursive [`encode`]/[`decode`] with size and depth caps
//! - The unsigned LEB128 varint codec behind every length prefix
//! - A [`BufferPool`] of reusable scratch buffers for encoding
//! - Typed errors for every failure mode, total over adversarial input
//!
//! ## Wire format
//!
//! ```text
//! array   := 'A' varint(count) element*count
//! element := string | int32 | float64 | array
//! string  := 'S' varint(byteLen) byte*byteLen
//! int32   := 'I' byte byte byte byte     -- big-endian two's complement
//! float64 := 'F' byte*8                  -- big-endian IEEE-754 binary64
//! varint  := byte+                       -- unsigned LEB128
//! ```
//!
//! The top-level payload is always an array. There is no version byte, no
//! message-length envelope, and no checksum; boundaries between successive
//! messages are the caller's responsibility (see
//! [`decoder::decode_partial`]).

pub mod buffer;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;
pub mod varint;

pub use buffer::{BufferPool, DEFAULT_BUFFER_CAPACITY, PooledBuffer};
pub use decoder::{decode, decode_partial};
pub use encoder::{encode, encode_into};
pub use error::{Error, Limit, Result};
pub use value::{MAX_ARRAY_LEN, MAX_DEPTH, MAX_STRING_LEN, Value};
