//! Prelude module for convenient imports.
//!
//! ```
//! use valwire::prelude::*;
//! ```

pub use valwire_core::buffer::{BufferPool, PooledBuffer};
pub use valwire_core::decoder::{decode, decode_partial};
pub use valwire_core::encoder::{encode, encode_into};
pub use valwire_core::error::{Error, Limit, Result};
pub use valwire_core::value::{MAX_ARRAY_LEN, MAX_DEPTH, MAX_STRING_LEN, Value};
