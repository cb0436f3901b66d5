//! # Valwire
//!
//! Compact tagged binary encoding for heterogeneous, recursively-nested
//! values, intended for wire transmission between a client and an
//! analytical data server.
//!
//! A message is an array of values; each value is a byte string, a 32-bit
//! integer, a 64-bit float, or a nested array. Encoding is depth-first
//! with a one-byte tag per element and LEB128 varint length prefixes.
//!
//! ## Quick Start
//!
//! ```
//! use valwire::prelude::*;
//!
//! let items = vec![
//!     Value::from("hello"),
//!     Value::Array(vec![Value::Int32(123), Value::Float64(3.14)]),
//! ];
//!
//! let bytes = encode(&items)?;
//! let decoded = decode(&bytes)?;
//! assert_eq!(items, decoded);
//! # Ok::<(), valwire::Error>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - the codec: value model, varint, encoder, decoder, errors,
//!   and the scratch-buffer pool

pub mod prelude;

/// The codec: value model, varint, encoder, decoder, errors, buffer pool.
pub mod core {
    pub use valwire_core::*;
}

// Re-export commonly used items at the crate root
pub use valwire_core::{
    buffer::{BufferPool, DEFAULT_BUFFER_CAPACITY, PooledBuffer},
    decoder::{decode, decode_partial},
    encoder::{encode, encode_into},
    error::{Error, Limit, Result},
    value::{MAX_ARRAY_LEN, MAX_DEPTH, MAX_STRING_LEN, Value},
};
