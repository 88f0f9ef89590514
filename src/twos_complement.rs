//! Two's complement views of signed integers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};

/// Reinterpret `value` as the unsigned value of its two's complement bit pattern, keeping
/// the low `bit_count` bits.
///
/// Non-negative values are returned unchanged, even when wider than `bit_count`.
///
/// ```
/// use nail_digits::{to_twos_complement, BigInt, BigUint};
///
/// assert_eq!(to_twos_complement(&BigInt::from(-1), 8), BigUint::from(0xFFu32));
/// assert_eq!(to_twos_complement(&BigInt::from(300), 8), BigUint::from(300u32));
/// ```
#[must_use]
pub fn to_twos_complement(value: &BigInt, bit_count: u64) -> BigUint {
    if !value.is_negative() {
        return value.magnitude().clone();
    }

    let modulus = BigInt::one() << bit_count;
    value.mod_floor(&modulus).magnitude().clone()
}

/// Number of bits needed to hold `value` as a two's complement signed integer, including
/// the sign bit.
#[must_use]
pub fn signed_bits(value: &BigInt) -> u64 {
    if value.is_negative() {
        // -2^(n-1) <= value  <=>  |value + 1| < 2^(n-1)
        (value + BigInt::one()).magnitude().bits() + 1
    } else {
        value.magnitude().bits() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{signed_bits, to_twos_complement};
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn negative_wraps() {
        assert_eq!(to_twos_complement(&BigInt::from(-1), 4), BigUint::from(0b1111u32));
        assert_eq!(to_twos_complement(&BigInt::from(-2), 8), BigUint::from(0xFEu32));
        assert_eq!(
            to_twos_complement(&BigInt::from(-1), 64),
            BigUint::from(u64::MAX)
        );
    }

    #[test]
    fn keeps_low_bits_of_wide_negatives() {
        assert_eq!(to_twos_complement(&BigInt::from(-257), 8), BigUint::from(0xFFu32));
    }

    #[test]
    fn non_negative_unchanged() {
        assert_eq!(to_twos_complement(&BigInt::from(0), 8), BigUint::from(0u32));
        assert_eq!(to_twos_complement(&BigInt::from(1000), 8), BigUint::from(1000u32));
    }

    #[test]
    fn signed_bit_widths() {
        assert_eq!(signed_bits(&BigInt::from(-1)), 1);
        assert_eq!(signed_bits(&BigInt::from(-128)), 8);
        assert_eq!(signed_bits(&BigInt::from(-129)), 9);
        assert_eq!(signed_bits(&BigInt::from(127)), 8);
        assert_eq!(signed_bits(&BigInt::from(0)), 1);
    }
}
