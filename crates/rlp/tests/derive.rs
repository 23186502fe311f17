//! Tests for `#[derive(RlpEncodable)]`.

#![cfg(feature = "derive")]

use alloy_primitives::{Address, U8, U256, address, hex};
use rlp_encode::{AbsentPolicy, EncoderConfig, RlpEncodable, write_alloc, write_alloc_with};
use similar_asserts::assert_eq;

#[derive(RlpEncodable)]
struct Animals {
    first: &'static str,
    second: String,
}

#[derive(RlpEncodable)]
struct Tuple(u64, Vec<u8>);

#[derive(RlpEncodable)]
struct Empty;

#[derive(RlpEncodable)]
struct Wrapper<T> {
    inner: T,
    items: Vec<T>,
}

#[derive(RlpEncodable)]
struct Transfer {
    nonce: u64,
    to: Address,
    value: U256,
    #[rlp(skip)]
    #[allow(dead_code)]
    label: String,
    memo: Option<Vec<u8>>,
}

#[derive(RlpEncodable)]
struct Signature {
    y_parity: U8,
    r: U256,
    s: U256,
}

#[derive(RlpEncodable)]
struct Nested {
    animals: Animals,
    tuple: Tuple,
    empty: Empty,
}

#[test]
fn named_fields() {
    let animals = Animals { first: "dog", second: "cat".to_string() };
    assert_eq!(write_alloc(&animals).unwrap(), hex!("c883646f6783636174"));
}

#[test]
fn tuple_struct() {
    assert_eq!(write_alloc(&Tuple(1024, vec![])).unwrap(), hex!("c482040080"));
}

#[test]
fn unit_struct() {
    assert_eq!(write_alloc(&Empty).unwrap(), hex!("c0"));
}

#[test]
fn generic_struct() {
    let wrapper = Wrapper { inner: 1u64, items: vec![2, 3] };
    assert_eq!(write_alloc(&wrapper).unwrap(), hex!("c401c20203"));

    let wrapper = Wrapper { inner: "dog", items: vec![] };
    assert_eq!(write_alloc(&wrapper).unwrap(), hex!("c583646f67c0"));
}

#[test]
fn skipped_and_absent_fields() {
    let transfer = Transfer {
        nonce: 0,
        to: address!("0x0000000000000000000000000000000000000001"),
        value: U256::from(1_000_000),
        label: "ignored".to_string(),
        memo: None,
    };
    let expected = hex!("da80940000000000000000000000000000000000000001830f4240");
    assert_eq!(write_alloc(&transfer).unwrap(), expected);

    let config = EncoderConfig::default().with_absent(AbsentPolicy::EmptyString);
    let expected = hex!("db80940000000000000000000000000000000000000001830f424080");
    assert_eq!(write_alloc_with(&transfer, &config).unwrap(), expected);

    let transfer = Transfer { memo: Some(b"hi".to_vec()), ..transfer };
    let expected = hex!("dd80940000000000000000000000000000000000000001830f4240826869");
    assert_eq!(write_alloc(&transfer).unwrap(), expected);
}

#[test]
fn nested_structs() {
    let nested = Nested {
        animals: Animals { first: "dog", second: "cat".to_string() },
        tuple: Tuple(1, vec![0x80]),
        empty: Empty,
    };
    assert_eq!(write_alloc(&nested).unwrap(), hex!("cec883646f6783636174c3018180c0"));
}

#[test]
fn one_byte_integer_fields() {
    let signature = Signature { y_parity: U8::from(1), r: U256::from(0x80), s: U256::ZERO };
    assert_eq!(write_alloc(&signature).unwrap(), hex!("c401818080"));

    let signature = Signature { y_parity: U8::ZERO, ..signature };
    assert_eq!(write_alloc(&signature).unwrap(), hex!("c480818080"));
}
