//! Conversion between integers and little-endian digit vectors.
//!
//! A digit vector holds the digits of a magnitude in some base `B`, least significant
//! first, so that `value == Σ digits[i] * B^i`. The vector for zero is `[0]`; no other
//! vector ends in a zero digit. Signs are never stored: callers carry them out-of-band.

mod arith;

pub use self::arith::{add_digit, mul_digit, sub_digit};
pub(crate) use self::arith::mul_add_digit;

use crate::{Limb, WideWord, Word};
use alloc::{vec, vec::Vec};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Smallest supported digit base.
pub const BASE_MIN: Word = 2;

/// Largest supported digit base: the limb base itself.
pub const BASE_MAX: Word = Limb::BASE;

/// Returns the largest power of `base` that is still below [`Limb::BASE`], along with its
/// exponent, i.e. how many base-`base` digits fit in one limb-sized chunk.
///
/// For `base == Limb::BASE` this is `(1, 0)`.
///
/// # Panics
/// If `base < 2`.
#[must_use]
pub const fn fast_base(base: Word) -> (Word, u32) {
    assert!(base >= BASE_MIN, "unsupported base");

    let mut power: Word = 1;
    let mut exponent = 0;
    while (power as WideWord) * (base as WideWord) < Limb::BASE as WideWord {
        power *= base;
        exponent += 1;
    }
    (power, exponent)
}

/// Split the magnitude of `value` into base-`base` digits, least significant first.
///
/// The sign of `value` is discarded.
///
/// # Panics
/// If `base` is outside `2..=Limb::BASE`.
#[must_use]
pub fn split(value: &BigInt, base: Word) -> Vec<Word> {
    split_unsigned(value.magnitude(), base)
}

/// Split `value` into base-`base` digits, least significant first.
///
/// # Panics
/// If `base` is outside `2..=Limb::BASE`.
#[must_use]
pub fn split_unsigned(value: &BigUint, base: Word) -> Vec<Word> {
    assert_base(base);

    if value.is_zero() {
        return vec![0];
    }

    // Peel off one limb-sized chunk per division and break it up with word arithmetic.
    let (chunk, per_chunk) = match fast_base(base) {
        (_, 0) => (base, 1),
        params => params,
    };
    let divisor = BigUint::from(chunk);
    let mut digits = Vec::new();
    let mut rest = value.clone();

    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&divisor);
        let mut remainder = low_word(&remainder);
        for _ in 0..per_chunk {
            digits.push(remainder % base);
            remainder /= base;
        }
        rest = quotient;
    }

    // The final chunk is zero-padded at the top.
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}

/// Combine base-`base` digits, least significant first, back into a magnitude.
///
/// # Panics
/// If `base` is outside `2..=Limb::BASE`.
#[must_use]
pub fn combine(digits: &[Word], base: Word) -> BigUint {
    assert_base(base);
    digits.iter().rev().fold(BigUint::zero(), |acc, &digit| {
        debug_assert!(digit < base, "digit out of range");
        acc * base + digit
    })
}

/// Split the magnitude of `value` into limbs, least significant first.
#[must_use]
pub fn split_limbs(value: &BigInt) -> Vec<Limb> {
    split(value, Limb::BASE).into_iter().map(Limb).collect()
}

/// Combine limbs, least significant first, back into a magnitude.
#[must_use]
pub fn combine_limbs(limbs: &[Limb]) -> BigUint {
    limbs.iter().rev().fold(BigUint::zero(), |acc, limb| {
        debug_assert!(limb.is_valid(), "limb has nail bits set");
        (acc << Limb::BITS) + limb.0
    })
}

/// Count the base-`base` digits of the magnitude of `value`. Zero has one digit.
///
/// # Panics
/// If `base` is outside `2..=Limb::BASE`.
#[must_use]
pub fn count_digits(value: &BigInt, base: Word) -> usize {
    assert_base(base);

    let magnitude = value.magnitude();
    if magnitude.is_zero() {
        1
    } else if base.is_power_of_two() {
        magnitude.bits().div_ceil(u64::from(base.trailing_zeros())) as usize
    } else {
        split_unsigned(magnitude, base).len()
    }
}

/// Returns the largest power of `base` that does not exceed `value`, e.g. `1000` for `1234`
/// in base 10. Returns zero for zero.
///
/// # Panics
/// If `base < 2`.
#[must_use]
pub fn place_value(value: &BigUint, base: Word) -> BigUint {
    assert!(base >= BASE_MIN, "unsupported base");

    if value.is_zero() {
        return BigUint::zero();
    }
    if base == 2 {
        return BigUint::one() << (value.bits() - 1);
    }

    let mut place = BigUint::one();
    loop {
        let next = place.clone() * base;
        if next > *value {
            return place;
        }
        place = next;
    }
}

/// Low word of a value known to fit in one [`Word`].
fn low_word(value: &BigUint) -> Word {
    value.iter_u32_digits().next().unwrap_or(0)
}

#[inline]
fn assert_base(base: Word) {
    assert!((BASE_MIN..=BASE_MAX).contains(&base), "unsupported base");
}
