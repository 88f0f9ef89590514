//! Text to integer.

use super::{RadixStyle, alphabet::digit_value, assert_radix, prefix_radix};
use crate::{
    Limb, Word,
    digits::{combine_limbs, fast_base, mul_add_digit},
};
use alloc::vec::Vec;
use core::fmt;
use num_bigint::{BigInt, BigUint};

/// Radix assumed when the text carries no prefix and none is given.
const DEFAULT_RADIX: u32 = 10;

/// The failure result for radix decoding operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contained no digits.
    Empty,

    /// A character is neither a separator nor a digit of the radix in use.
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The radix the text was decoded in.
        radix: u32,
    },

    /// The text carries a radix prefix that contradicts the radix asked for.
    RadixConflict {
        /// The radix announced by the prefix.
        prefix: u32,
        /// The radix passed by the caller.
        radix: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no digits to decode"),
            Self::InvalidDigit { digit, radix } => {
                write!(f, "invalid base-{radix} digit {digit:?}")
            }
            Self::RadixConflict { prefix, radix } => {
                write!(f, "base-{prefix} prefix conflicts with base {radix}")
            }
        }
    }
}

impl core::error::Error for DecodeError {}

/// Decode `src`, taking the radix from its prefix (`0b`, `0o`, `0d`, `0x`) or assuming
/// decimal.
///
/// ```
/// use nail_digits::{decode, BigInt};
///
/// assert_eq!(decode("0xFF"), Ok(BigInt::from(255)));
/// assert_eq!(decode("-1_000,000"), Ok(BigInt::from(-1_000_000)));
/// ```
pub fn decode(src: &str) -> Result<BigInt, DecodeError> {
    decode_inner(src, None)
}

/// Decode `src` in base `radix`.
///
/// A matching prefix is accepted and skipped. A prefix naming a different radix is a
/// [`DecodeError::RadixConflict`], unless `radix` has no prefix of its own and the marker
/// letter is one of its digits (e.g. `0b1` in base 12), in which case it is read as digits.
///
/// In bases 63 and 64, where `+` is a digit, only `-` and whitespace are read as signs.
///
/// # Panics
/// If `radix` is outside [`RADIX_RANGE`][`super::RADIX_RANGE`].
pub fn decode_radix(src: &str, radix: u32) -> Result<BigInt, DecodeError> {
    assert_radix(radix);
    decode_inner(src, Some(radix))
}

fn decode_inner(src: &str, radix: Option<u32>) -> Result<BigInt, DecodeError> {
    let (negative, rest) = strip_sign(src.trim(), radix);
    let (radix, digits) = strip_prefix(rest, radix)?;
    let magnitude = fold_digits(digits, radix)?;

    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}

/// Consume the leading run of `+`, `-` and whitespace. Every `-` flips the sign. A `+`
/// that is a digit of `radix` ends the run.
fn strip_sign(src: &str, radix: Option<u32>) -> (bool, &str) {
    let plus_is_digit = radix.is_some_and(|radix| digit_value('+', radix).is_some());

    let mut negative = false;
    for (i, ch) in src.char_indices() {
        match ch {
            '-' => negative = !negative,
            '+' if !plus_is_digit => {}
            ch if ch.is_whitespace() => {}
            _ => return (negative, &src[i..]),
        }
    }
    (negative, "")
}

/// Resolve the radix, skipping a leading `0` and any prefix marker after it.
fn strip_prefix(src: &str, radix: Option<u32>) -> Result<(u32, &str), DecodeError> {
    let bytes = src.as_bytes();
    if bytes.len() <= 2 || bytes[0] != b'0' {
        return Ok((radix.unwrap_or(DEFAULT_RADIX), src));
    }

    let marker = bytes[1];
    match (prefix_radix(marker), radix) {
        (Some(prefix), None) => Ok((prefix, &src[2..])),
        (Some(prefix), Some(radix)) if prefix == radix => Ok((radix, &src[2..])),
        (Some(_), Some(radix))
            if RadixStyle::for_radix(radix).prefix.is_empty()
                && digit_value(char::from(marker), radix).is_some() =>
        {
            Ok((radix, &src[1..]))
        }
        (Some(prefix), Some(radix)) => Err(DecodeError::RadixConflict { prefix, radix }),
        (None, radix) => Ok((radix.unwrap_or(DEFAULT_RADIX), &src[1..])),
    }
}

/// Fold digits most significant first, batching as many as fit in one limb between
/// limb-vector multiplications. Separators (`_`, `,`, whitespace) are skipped.
fn fold_digits(src: &str, radix: u32) -> Result<BigUint, DecodeError> {
    let (_, chunk_digits) = fast_base(radix);

    let mut limbs = Vec::new();
    let mut seen = false;
    let mut chunk: Word = 0;
    let mut scale: Word = 1;
    let mut pending = 0;

    for ch in src.chars() {
        if ch == '_' || ch == ',' || ch.is_whitespace() {
            continue;
        }
        let digit = digit_value(ch, radix)
            .ok_or(DecodeError::InvalidDigit { digit: ch, radix })?;

        chunk = chunk * radix + digit;
        scale *= radix;
        pending += 1;
        seen = true;

        if pending == chunk_digits {
            mul_add_digit(&mut limbs, Limb::new(scale), Limb::new(chunk));
            (chunk, scale, pending) = (0, 1, 0);
        }
    }

    if !seen {
        return Err(DecodeError::Empty);
    }
    if pending > 0 {
        mul_add_digit(&mut limbs, Limb::new(scale), Limb::new(chunk));
    }
    Ok(combine_limbs(&limbs))
}
