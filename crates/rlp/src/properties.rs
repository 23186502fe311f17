//! Property tests over arbitrary item trees.

use crate::{
    AbsentPolicy, EMPTY_LIST_CODE, EMPTY_STRING_CODE, EncoderConfig, Header, Item, encode_length,
    write_alloc, write_alloc_with,
};
use alloy_primitives::U256;
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = Item> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..80).prop_map(Item::Bytes),
        any::<[u8; 32]>().prop_map(|be| Item::Int(U256::from_be_bytes(be))),
        any::<u64>().prop_map(|n| Item::Int(U256::from(n))),
    ]
}

fn arb_item() -> impl Strategy<Value = Item> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Item::List)
    })
}

/// Like [`arb_item`], with absent items mixed into lists.
fn arb_item_with_absent() -> impl Strategy<Value = Item> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(prop_oneof![3 => inner, 1 => Just(Item::Absent)], 0..8)
            .prop_map(Item::List)
    })
}

/// Rewrites every absent item with `f`, dropping it when `f` returns `None`.
fn map_absent(item: &Item, f: fn() -> Option<Item>) -> Option<Item> {
    match item {
        Item::Absent => f(),
        Item::List(items) => Some(items.iter().filter_map(|item| map_absent(item, f)).collect()),
        other => Some(other.clone()),
    }
}

/// Reads the header at the start of `encoded`, returning it with its own length.
fn read_header(encoded: &[u8]) -> (Header, usize) {
    let first = encoded[0];
    let (list, code) = match first {
        0..EMPTY_STRING_CODE => return (Header::string(1), 0),
        EMPTY_STRING_CODE..EMPTY_LIST_CODE => (false, EMPTY_STRING_CODE),
        _ => (true, EMPTY_LIST_CODE),
    };
    let short = first - code;
    if short < 56 {
        return (Header { list, payload_length: short as usize }, 1);
    }
    let len_of_len = (short - 55) as usize;
    let payload_length =
        encoded[1..=len_of_len].iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
    (Header { list, payload_length }, 1 + len_of_len)
}

/// Walks an encoding alongside the item it came from, checking every header.
fn check_consistent(item: &Item, encoded: &[u8]) -> usize {
    let (header, header_len) = read_header(encoded);
    let end = header_len + header.payload_length;
    assert!(end <= encoded.len(), "header overruns encoding of {item}");
    if header_len > 0 {
        assert_eq!(&encoded[..header_len], &encode_length(header.payload_length, header.list)[..]);
    }

    match item {
        Item::List(items) => {
            assert!(header.list, "{item} encoded as a string");
            let mut offset = header_len;
            for child in items {
                offset += check_consistent(child, &encoded[offset..end]);
            }
            assert_eq!(offset, end, "children of {item} do not fill the payload");
        }
        Item::Bytes(_) | Item::Int(_) => assert!(!header.list, "{item} encoded as a list"),
        Item::Absent => unreachable!("absent items are not generated"),
    }
    end
}

proptest! {
    #[test]
    fn headers_match_payloads(item in arb_item()) {
        let encoded = write_alloc(&item).unwrap();
        prop_assert_eq!(check_consistent(&item, &encoded), encoded.len());
    }

    #[test]
    fn encoding_is_deterministic(item in arb_item()) {
        prop_assert_eq!(write_alloc(&item).unwrap(), write_alloc(&item.clone()).unwrap());
    }

    #[test]
    fn integers_are_minimal(be in any::<[u8; 32]>()) {
        let value = U256::from_be_bytes(be);
        let encoded = write_alloc(&value).unwrap();
        let (header, header_len) = read_header(&encoded);
        let payload = &encoded[header_len..];
        prop_assert_eq!(payload.len(), header.payload_length);
        prop_assert_eq!(payload.len(), value.byte_len());
        if let Some(first) = payload.first() {
            prop_assert_ne!(*first, 0);
        }
    }

    #[test]
    fn list_order_is_observable(a in arb_item(), b in arb_item()) {
        // `Int(0x64)` and `Bytes([0x64])` share an encoding.
        prop_assume!(write_alloc(&a).unwrap() != write_alloc(&b).unwrap());
        let ab = write_alloc(&Item::List(vec![a.clone(), b.clone()])).unwrap();
        let ba = write_alloc(&Item::List(vec![b, a])).unwrap();
        prop_assert_ne!(ab, ba);
    }

    #[test]
    fn absent_policy_only_changes_absent_positions(item in arb_item_with_absent()) {
        let skipped = map_absent(&item, || None).unwrap();
        prop_assert_eq!(write_alloc(&item).unwrap(), write_alloc(&skipped).unwrap());

        let config = EncoderConfig::default().with_absent(AbsentPolicy::EmptyString);
        let filled = map_absent(&item, || Some(Item::Bytes(vec![]))).unwrap();
        prop_assert_eq!(write_alloc_with(&item, &config).unwrap(), write_alloc(&filled).unwrap());
        let encoded = write_alloc(&filled).unwrap();
        prop_assert_eq!(check_consistent(&filled, &encoded), encoded.len());
    }

    #[test]
    fn policies_agree_without_absent_items(item in arb_item()) {
        let config = EncoderConfig::default().with_absent(AbsentPolicy::EmptyString);
        prop_assert_eq!(write_alloc(&item).unwrap(), write_alloc_with(&item, &config).unwrap());
    }
}

#[test]
fn read_header_round_trips_encode_length() {
    crate::init_tracing();
    for length in [0usize, 1, 55, 56, 255, 256, 65_535, 65_536, 1 << 40] {
        for list in [false, true] {
            let mut encoded = encode_length(length, list).to_vec();
            encoded.resize(encoded.len() + 8, 0);
            let (header, header_len) = read_header(&encoded);
            assert_eq!(header, Header { list, payload_length: length });
            assert_eq!(header_len, encoded.len() - 8);
        }
    }
}
