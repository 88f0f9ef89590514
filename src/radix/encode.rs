//! Integer to text.

use super::{Grouping, RadixStyle, alphabet::digit_char, assert_radix};
use crate::{
    digits::split,
    twos_complement::{signed_bits, to_twos_complement},
};
use alloc::{string::String, vec::Vec};
use core::{cmp, iter};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

const SEPARATOR: u8 = b'_';

/// Encode `value` in base `radix` using the default grouping and prefix of the radix.
///
/// ```
/// use nail_digits::{encode, BigInt};
///
/// assert_eq!(encode(&BigInt::from(1_000_000), 10), "1_000_000");
/// assert_eq!(encode(&BigInt::from(-255), 16), "-0xFF");
/// ```
///
/// # Panics
/// If `radix` is outside [`RADIX_RANGE`][`super::RADIX_RANGE`].
#[must_use]
pub fn encode(value: &BigInt, radix: u32) -> String {
    encode_grouped(value, radix, Grouping::DEFAULT)
}

/// Encode `value` in base `radix`, separating every `grouping.size` digits with `_` and
/// zero-padding to at least `grouping.min_groups` groups.
///
/// Padding applies only to radices that group their digits, and never to decimal.
///
/// # Panics
/// - If `radix` is outside [`RADIX_RANGE`][`super::RADIX_RANGE`].
/// - If `grouping.size` is neither zero nor within
///   [`GROUP_SIZE_RANGE`][`super::GROUP_SIZE_RANGE`].
#[must_use]
pub fn encode_grouped(value: &BigInt, radix: u32, grouping: Grouping) -> String {
    assert_radix(radix);
    let Grouping {
        size,
        mut min_groups,
    } = Grouping::new(grouping.size, grouping.min_groups);

    if value.is_zero() && min_groups == 0 {
        return String::from("0");
    }

    let style = RadixStyle::for_radix(radix);
    let width = if size == 0 { style.group_size } else { size };

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    out.push_str(style.prefix);

    // Built least significant digit first and reversed once complete.
    let digits = split(value, radix);
    let mut buf = Vec::with_capacity(digits.len() * 2);
    for (i, &digit) in digits.iter().enumerate() {
        if width > 0 && i > 0 && i % width == 0 {
            buf.push(SEPARATOR);
            min_groups = min_groups.saturating_sub(1);
        }
        buf.push(digit_char(digit));
    }

    if radix != 10 && width > 0 && min_groups > 0 {
        let partial = digits.len() % width;
        if partial != 0 {
            buf.extend(iter::repeat_n(b'0', width - partial));
        }
        for _ in 1..min_groups {
            buf.push(SEPARATOR);
            buf.extend(iter::repeat_n(b'0', width));
        }
    }

    out.extend(buf.iter().rev().map(|&b| char::from(b)));
    out
}

/// Encode `value` in base 2, 8 or 16, rendering negative values as their two's complement
/// bit pattern instead of with a `-` sign.
///
/// The pattern is as wide as the fewest whole groups that hold the value as a signed
/// integer, and no narrower than `grouping.min_groups` groups. Each digit of these radices
/// covers a whole number of bits, so the pattern is exact for octal as well.
///
/// ```
/// use nail_digits::{encode_signed, BigInt, Grouping};
///
/// assert_eq!(encode_signed(&BigInt::from(-1), 16, Grouping::DEFAULT), "0xFFFF");
/// assert_eq!(encode_signed(&BigInt::from(-5), 2, Grouping::DEFAULT), "0b11111011");
/// ```
///
/// # Panics
/// If `radix` is not 2, 8 or 16, or `grouping.size` is invalid.
#[must_use]
pub fn encode_signed(value: &BigInt, radix: u32, grouping: Grouping) -> String {
    assert!(
        matches!(radix, 2 | 8 | 16),
        "two's complement rendering needs radix 2, 8 or 16"
    );
    let grouping = Grouping::new(grouping.size, grouping.min_groups);

    if !value.is_negative() {
        return encode_grouped(value, radix, grouping);
    }

    let width = match grouping.size {
        0 => RadixStyle::for_radix(radix).group_size,
        size => size,
    };
    let group_bits = u64::from(radix.trailing_zeros()) * width as u64;
    let groups = cmp::max(
        grouping.min_groups,
        signed_bits(value).div_ceil(group_bits) as usize,
    );
    let pattern = to_twos_complement(value, groups as u64 * group_bits);

    encode_grouped(&BigInt::from(pattern), radix, Grouping::new(width, groups))
}
