//! Round-trip demonstration: build a nested value tree, encode it through
//! a pooled scratch buffer, decode it back, and verify the result.
//!
//! Run with: `cargo run --example roundtrip`

use tracing::info;
use valwire::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let original = vec![
        Value::from("hello"),
        Value::Array(vec![
            Value::from("world"),
            Value::Int32(123),
            Value::Array(vec![
                Value::from("nested"),
                Value::from("values"),
                Value::Int32(321),
            ]),
        ]),
        Value::Float64(3.14),
    ];

    let pool = BufferPool::new(4);

    let mut scratch = pool.acquire();
    encode_into(&original, &mut scratch)?;
    info!(bytes = scratch.len(), "encoded message");

    let (decoded, consumed) = decode_partial(&scratch)?;
    info!(elements = decoded.len(), consumed, "decoded message");

    assert_eq!(original, decoded);

    println!("Original: {original:?}");
    println!("Encoded:  {} bytes", scratch.len());
    println!("Decoded:  {decoded:?}");

    Ok(())
}
