//! Error types for valwire codec operations.

use thiserror::Error;

/// Identifies which wire-format cap a [`Error::LimitExceeded`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Array element count (see [`crate::value::MAX_ARRAY_LEN`]).
    Array,
    /// String byte length (see [`crate::value::MAX_STRING_LEN`]).
    String,
    /// Array nesting depth (see [`crate::value::MAX_DEPTH`]).
    Depth,
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => write!(f, "array element count"),
            Self::String => write!(f, "string byte length"),
            Self::Depth => write!(f, "nesting depth"),
        }
    }
}

/// Core error type for encode/decode operations.
///
/// Every failure is reported through this type; the codec never panics on
/// malformed or truncated input. All errors are local to the single call
/// that produced them and fully recoverable by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decode was called with zero-length input.
    #[error("empty input")]
    EmptyInput,

    /// The byte at the cursor was expected to be an array tag and was not.
    #[error("invalid format: expected array tag at offset {offset}")]
    InvalidFormat {
        /// Byte offset where the array tag was expected.
        offset: usize,
    },

    /// A tag byte outside the supported set was encountered.
    #[error("unknown type tag {tag:#04x} at offset {offset}")]
    UnknownType {
        /// The unrecognized tag byte.
        tag: u8,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// Fewer bytes remain in the input than the current field requires.
    #[error("unexpected end of input: required {required} bytes, available {available} bytes")]
    UnexpectedEof {
        /// Bytes required by the current field.
        required: usize,
        /// Bytes actually available at the cursor.
        available: usize,
    },

    /// A varint would require more than 64 significant bits.
    #[error("varint overflow at offset {offset}: more than 64 significant bits")]
    VarintOverflow {
        /// Byte offset where the varint starts.
        offset: usize,
    },

    /// A declared or actual size exceeds the fixed wire-format cap.
    ///
    /// Raised before the offending element is emitted (encode) or
    /// allocated (decode).
    #[error("{kind} {actual} exceeds limit {max}")]
    LimitExceeded {
        /// Which cap was violated.
        kind: Limit,
        /// The offending count, length, or depth.
        actual: u64,
        /// The cap itself.
        max: u64,
    },
}

/// Result type alias for valwire core operations.
pub type Result<T> = std::result::Result<T, Error>;
