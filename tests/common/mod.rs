//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use nail_digits::{Limb, Word};
use num_bigint::{BigInt, BigUint, Sign};
use proptest::prelude::*;

/// Limb vector to `num_bigint::BigUint`, reading each limb as a base-2^30 digit.
pub fn to_biguint(limbs: &[Limb]) -> BigUint {
    limbs.iter().rev().fold(BigUint::default(), |acc, limb| {
        (acc << Limb::BITS) + Word::from(*limb)
    })
}

/// Build a `BigInt` from a sign flag and little-endian magnitude bytes.
pub fn to_bigint(negative: bool, bytes: &[u8]) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_le(sign, bytes)
}

prop_compose! {
    /// A valid limb: any word with the nail bits clear.
    pub fn limb()(x in 0..=Limb::MASK.0) -> Limb {
        Limb::new(x)
    }
}

prop_compose! {
    /// A signed integer of up to 256 bits.
    pub fn bigint()(
        negative in any::<bool>(),
        bytes in prop::collection::vec(any::<u8>(), 0..32),
    ) -> BigInt {
        to_bigint(negative, &bytes)
    }
}
