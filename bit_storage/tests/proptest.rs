// tests/proptest.rs

use bit_storage::{BitStorage, BitStorageError};
use proptest::prelude::*;

/// A storage of 1..=4 words with a bit length somewhere inside the last word.
fn any_storage() -> impl Strategy<Value = BitStorage> {
    prop::collection::vec(any::<u64>(), 1..=4).prop_flat_map(|words| {
        let max = words.len() * 64;
        let min = max - 63;
        (min..=max).prop_map(move |bit_len| BitStorage::new(bit_len, words.clone()).unwrap())
    })
}

/// A storage together with an in-range `(offset, length)` field of at most `max_len` bits.
fn storage_with_field(max_len: usize) -> impl Strategy<Value = (BitStorage, usize, usize)> {
    any_storage().prop_flat_map(move |bits| {
        let bit_len = bits.len();
        (0..=bit_len).prop_flat_map(move |offset| {
            let bits = bits.clone();
            let room = (bit_len - offset).min(max_len);
            (0..=room).prop_map(move |length| (bits.clone(), offset, length))
        })
    })
}

fn low_bits(value: u64, length: usize) -> u64 {
    if length >= 64 {
        value
    } else {
        value & ((1u64 << length) - 1)
    }
}

//
// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_capacity_enforced(word_count in 0usize..6, bit_len in 0usize..400) {
        let result = BitStorage::new(bit_len, vec![0u64; word_count]);
        if bit_len <= word_count * 64 {
            let bits = result.unwrap();
            prop_assert_eq!(bits.len(), bit_len);
            prop_assert_eq!(bits.word_count(), word_count);
        } else {
            prop_assert_eq!(
                result,
                Err(BitStorageError::InsufficientCapacity { bit_len, capacity: word_count * 64 })
            );
        }
    }
}

//
// -----------------------------------------------------------------------------
// Field Round-Trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_then_get_u64((bits, offset, length) in storage_with_field(64), value: u64) {
        let mut bits = bits;
        bits.set_field_from_u64(offset, length, value).unwrap();
        prop_assert_eq!(bits.get_field_as_u64(offset, length).unwrap(), low_bits(value, length));
    }
}

proptest! {
    #[test]
    fn prop_extraction_consistent((bits, offset, length) in storage_with_field(64)) {
        let field = bits.get_field(offset, length).unwrap();
        prop_assert_eq!(field.len(), length);
        prop_assert_eq!(field.word_count(), length.div_ceil(64));
        prop_assert_eq!(
            field.get_field_as_u64(0, length).unwrap(),
            bits.get_field_as_u64(offset, length).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn prop_extract_and_write_back_is_identity((bits, offset, length) in storage_with_field(256)) {
        let field = bits.get_field(offset, length).unwrap();
        let mut copy = bits.clone();
        copy.set_field(offset, &field).unwrap();
        prop_assert_eq!(copy, bits);
    }
}

proptest! {
    #[test]
    fn prop_extracted_bits_match_source((bits, offset, length) in storage_with_field(256)) {
        let field = bits.get_field(offset, length).unwrap();
        for i in 0..length {
            prop_assert_eq!(
                field.get_field_as_u64(i, 1).unwrap(),
                bits.get_field_as_u64(offset + i, 1).unwrap()
            );
        }
    }
}

//
// -----------------------------------------------------------------------------
// Neighbouring Bits
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_setters_preserve_outside_bits(
        (bits, offset, length) in storage_with_field(128),
        value: u64
    ) {
        let mut written = bits.clone();
        written.set_field_from_u64(offset, length, value).unwrap();

        for i in (0..offset).chain(offset + length..bits.len()) {
            prop_assert_eq!(
                written.get_field_as_u64(i, 1).unwrap(),
                bits.get_field_as_u64(i, 1).unwrap()
            );
        }
    }
}

proptest! {
    #[test]
    fn prop_wide_u64_field_zero_fills((bits, offset, length) in storage_with_field(256), value: u64) {
        let mut bits = bits;
        bits.set_field_from_u64(offset, length, value).unwrap();
        for i in 64..length {
            prop_assert_eq!(bits.get_field_as_u64(offset + i, 1).unwrap(), 0);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_out_of_range_rejected_without_mutation(
        bits in any_storage(),
        overshoot in 1usize..100,
        length in 0usize..=64,
        value: u64
    ) {
        let bit_len = bits.len();
        let offset = (bit_len + overshoot).saturating_sub(length);
        prop_assume!(offset + length > bit_len);

        let mut target = bits.clone();
        let source = BitStorage::zeroed(length);

        prop_assert!(target.set_field_from_u64(offset, length, value).unwrap_err().is_range_error());
        prop_assert!(target.set_field(offset, &source).unwrap_err().is_range_error());
        prop_assert!(target.get_field(offset, length).unwrap_err().is_range_error());
        prop_assert!(target.get_field_as_u64(offset, length).unwrap_err().is_range_error());
        prop_assert_eq!(target, bits);
    }
}

proptest! {
    #[test]
    fn prop_integer_field_wider_than_64_rejected(bits in any_storage(), length in 65usize..200) {
        prop_assert_eq!(
            bits.get_field_as_u64(0, length),
            Err(BitStorageError::FieldTooWide { length, max: 64 })
        );
    }
}

//
// -----------------------------------------------------------------------------
// Hex Rendering
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_hex_is_fixed_width_and_stable(bits in any_storage()) {
        let hex = bits.to_hex_string();
        prop_assert_eq!(hex.len(), 16 * bits.word_count());
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        prop_assert_eq!(bits.to_hex_string(), hex);
    }
}

proptest! {
    #[test]
    fn prop_hex_groups_are_reversed_words(words in prop::collection::vec(any::<u64>(), 0..6)) {
        let bits = BitStorage::new(0, words.clone()).unwrap();
        let hex = bits.to_hex_string();

        for (group, word) in hex.as_bytes().chunks(16).zip(words.iter().rev()) {
            let group = std::str::from_utf8(group).unwrap();
            prop_assert_eq!(u64::from_str_radix(group, 16).unwrap(), *word);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Concrete Scenario
// -----------------------------------------------------------------------------

#[test]
fn two_word_scenario() -> Result<(), BitStorageError> {
    let mut bits = BitStorage::new(128, vec![0x123456789ABCDEF0, 0x0FEDCBA987654321])?;
    assert_eq!(bits.to_hex_string(), "0fedcba987654321123456789abcdef0");

    let field = bits.get_field(4, 8)?;
    assert_eq!(field.to_hex_string(), "00000000000000ef");

    bits.set_field_from_u64(16, 8, 0xAA)?;
    assert_eq!(bits.get_field_as_u64(16, 8)?, 0xAA);
    assert_eq!(bits.to_hex_string(), "0fedcba987654321123456789aaadef0");
    Ok(())
}
