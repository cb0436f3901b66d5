//! Byte-level wire format tests and round-trip properties.

use proptest::prelude::*;
use valwire_core::varint::{read_varint, write_varint};
use valwire_core::{Error, Value, decode, decode_partial, encode};

#[test]
fn empty_array_is_two_bytes() {
    assert_eq!(encode(&[]).unwrap(), vec![0x41, 0x00]);
}

#[test]
fn known_vectors() {
    assert_eq!(
        encode(&[Value::from("hi")]).unwrap(),
        vec![b'A', 0x01, b'S', 0x02, b'h', b'i']
    );
    assert_eq!(
        encode(&[Value::Int32(1)]).unwrap(),
        vec![b'A', 0x01, b'I', 0x00, 0x00, 0x00, 0x01]
    );
}

#[test]
fn decode_rejects_empty_and_missing_count() {
    assert_eq!(decode(&[]), Err(Error::EmptyInput));
    assert!(matches!(decode(&[b'A']), Err(Error::UnexpectedEof { .. })));
}

#[test]
fn nested_structure_reproduced_exactly() {
    let original = vec![Value::Array(vec![
        Value::from("a"),
        Value::Array(vec![Value::Int32(5)]),
    ])];
    let bytes = encode(&original).unwrap();
    assert_eq!(decode(&bytes).unwrap(), original);
}

/// Message with one element of each kind; tag byte offsets are fixed by
/// the layout: 'A' count 'I' i32 'S' len "hi" 'F' f64.
fn mixed_message() -> (Vec<u8>, Vec<usize>) {
    let bytes = encode(&[Value::Int32(1), Value::from("hi"), Value::Float64(2.0)]).unwrap();
    (bytes, vec![2, 7, 11])
}

#[test]
fn corrupting_any_tag_byte_fails_with_unknown_type() {
    let (bytes, tag_offsets) = mixed_message();
    for &offset in &tag_offsets {
        let mut corrupted = bytes.clone();
        corrupted[offset] = b'Z';
        assert_eq!(
            decode(&corrupted),
            Err(Error::UnknownType {
                tag: b'Z',
                offset,
            }),
            "corrupted tag at offset {offset}"
        );
    }
}

#[test]
fn corrupting_the_top_level_tag_is_invalid_format() {
    let (mut bytes, _) = mixed_message();
    bytes[0] = b'Z';
    assert_eq!(decode(&bytes), Err(Error::InvalidFormat { offset: 0 }));
}

#[test]
fn every_proper_prefix_fails_to_decode() {
    let (bytes, _) = mixed_message();
    for len in 0..bytes.len() {
        assert!(
            decode(&bytes[..len]).is_err(),
            "prefix of length {len} should fail"
        );
    }
}

#[test]
fn concatenated_messages_frame_by_consumed_length() {
    let first = vec![Value::Int32(1)];
    let second = vec![Value::from("two")];
    let mut stream = encode(&first).unwrap();
    stream.extend_from_slice(&encode(&second).unwrap());

    let (decoded_first, consumed) = decode_partial(&stream).unwrap();
    assert_eq!(decoded_first, first);
    let (decoded_second, rest_consumed) = decode_partial(&stream[consumed..]).unwrap();
    assert_eq!(decoded_second, second);
    assert_eq!(consumed + rest_consumed, stream.len());
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        proptest::collection::vec(any::<u8>(), 0..64).prop_map(Value::String),
        any::<i32>().prop_map(Value::Int32),
        any::<f64>().prop_map(Value::Float64),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        proptest::collection::vec(inner, 0..8).prop_map(Value::Array)
    })
}

proptest! {
    #[test]
    fn value_round_trip(items in proptest::collection::vec(value_strategy(), 0..8)) {
        let bytes = encode(&items).expect("should encode");
        let (decoded, consumed) = decode_partial(&bytes).expect("should decode");
        prop_assert_eq!(decoded, items);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn varint_round_trip(x in any::<u64>()) {
        let mut bytes = Vec::new();
        write_varint(x, &mut bytes);
        let (value, consumed) = read_varint(&bytes, 0).expect("should decode");
        prop_assert_eq!(value, x);
        prop_assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn truncation_never_decodes(items in proptest::collection::vec(value_strategy(), 1..6)) {
        let bytes = encode(&items).expect("should encode");
        for len in 0..bytes.len() {
            prop_assert!(decode(&bytes[..len]).is_err());
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&bytes);
    }
}
