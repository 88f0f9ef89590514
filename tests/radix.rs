//! Equivalence tests between the radix codec and `num_bigint`'s own radix formatting.

mod common;

use common::bigint;
use nail_digits::{
    BigInt, DecodeError, Grouping, combine, decode, decode_radix, encode, encode_grouped,
    encode_signed, to_twos_complement,
};
use num_traits::{Signed, Zero};
use proptest::prelude::*;

/// Strip the sign, prefix and separators from an encoding.
fn bare_digits(text: &str, radix: u32) -> String {
    let text = text.trim_start_matches('-');
    let prefix = match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => "",
    };
    let text = text.strip_prefix(prefix).unwrap_or(text);
    text.chars().filter(|&ch| ch != '_').collect()
}

fn bare_groups(text: &str) -> Vec<&str> {
    text.strip_prefix("0x").unwrap_or(text).split('_').collect()
}

fn radix() -> impl Strategy<Value = u32> {
    prop_oneof![Just(2u32), Just(8), Just(10), Just(16), Just(36), Just(64), 2..=64u32]
}

proptest! {
    #[test]
    fn roundtrip(n in bigint(), radix in radix()) {
        prop_assert_eq!(decode_radix(&encode(&n, radix), radix), Ok(n));
    }

    #[test]
    fn roundtrip_grouped(
        n in bigint(),
        radix in radix(),
        size in prop_oneof![Just(0usize), 2..=16usize],
        min_groups in 0..6usize,
    ) {
        let text = encode_grouped(&n, radix, Grouping::new(size, min_groups));
        prop_assert_eq!(decode_radix(&text, radix), Ok(n));
    }

    #[test]
    fn auto_radix_roundtrip(
        n in bigint(),
        radix in prop_oneof![Just(2u32), Just(8), Just(10), Just(16)],
    ) {
        prop_assert_eq!(decode(&encode(&n, radix)), Ok(n));
    }

    #[test]
    fn digits_match_num_bigint(n in bigint(), radix in 2..=36u32) {
        let expected = n.magnitude().to_str_radix(radix).to_uppercase();
        prop_assert_eq!(bare_digits(&encode(&n, radix), radix), expected);
    }

    #[test]
    fn sign_only_for_negatives(n in bigint(), radix in 2..=64u32) {
        let positive = encode(&n.abs(), radix);
        let negative = encode(&-n.abs(), radix);

        prop_assert!(!positive.starts_with('-'));
        prop_assert_eq!(negative.starts_with('-'), !n.is_zero());
        prop_assert_eq!(bare_digits(&negative, radix), bare_digits(&positive, radix));
    }

    #[test]
    fn roundtrip_leading_plus_or_slash(
        radix in 63..=64u32,
        top in 62..=63u32,
        low in prop::collection::vec(0..63u32, 0..24),
        negative in any::<bool>(),
        size in prop_oneof![Just(0usize), 2..=8usize],
        min_groups in 0..4usize,
    ) {
        let top = top.min(radix - 1);
        let mut digits = low;
        digits.push(top);
        let magnitude = BigInt::from(combine(&digits, radix));
        let n = if negative { -magnitude } else { magnitude };

        prop_assert_eq!(decode_radix(&encode(&n, radix), radix), Ok(n.clone()));
        let grouped = encode_grouped(&n, radix, Grouping::new(size, min_groups));
        prop_assert_eq!(decode_radix(&grouped, radix), Ok(n));
    }

    #[test]
    fn separators_are_ignored(n in bigint(), radix in radix()) {
        let grouped = encode_grouped(&n, radix, Grouping::new(2, 0));
        let plain = grouped.replace('_', "");
        prop_assert_eq!(decode_radix(&grouped, radix), decode_radix(&plain, radix));
    }

    #[test]
    fn padding_fills_short_encodings(n in bigint(), min_groups in 1..6usize) {
        let n = n.abs();
        let unpadded = encode(&n, 16);
        let text = encode_grouped(&n, 16, Grouping::padded(min_groups));

        let groups: Vec<&str> = bare_groups(&text);
        prop_assert!(groups.len() >= min_groups);
        if bare_groups(&unpadded).len() <= min_groups {
            prop_assert_eq!(groups.len(), min_groups);
            prop_assert!(groups.iter().all(|group| group.len() == 4));
        } else {
            prop_assert_eq!(&text, &unpadded);
        }
    }

    #[test]
    fn signed_encoding_is_twos_complement(
        n in bigint(),
        radix in prop_oneof![Just(2u32), Just(8), Just(16)],
    ) {
        let text = encode_signed(&n, radix, Grouping::DEFAULT);
        prop_assert!(!text.starts_with('-'));

        let pattern = decode_radix(&text, radix).unwrap();
        let bits = bare_digits(&text, radix).len() as u64 * u64::from(radix.trailing_zeros());
        prop_assert_eq!(pattern.magnitude(), &to_twos_complement(&n, bits));
    }
}

#[test]
fn large_values() {
    let n = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
    assert_eq!(decode(&encode(&n, 10)), Ok(n.clone()));
    assert_eq!(
        encode_grouped(&n, 10, Grouping::new(64, 0)).replace('_', ""),
        n.to_string()
    );
}

#[test]
fn decode_errors() {
    assert_eq!(decode("  "), Err(DecodeError::Empty));
    assert_eq!(
        decode("0o8"),
        Err(DecodeError::InvalidDigit {
            digit: '8',
            radix: 8
        })
    );
    assert_eq!(
        decode_radix("0b101", 8),
        Err(DecodeError::RadixConflict { prefix: 2, radix: 8 })
    );
}
