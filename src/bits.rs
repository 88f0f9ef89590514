//! Bit-field extraction across limb boundaries.

use crate::{
    Limb, WideWord,
    digits::{split_limbs, split_unsigned},
};
use alloc::{borrow::Cow, vec::Vec};
use num_bigint::{BigInt, BigUint};

/// Anything that can be viewed as a little-endian vector of [`Limb`]s.
///
/// Integers are split into limbs on demand (their sign is discarded); limb slices are
/// borrowed as-is and must already be in limb base.
pub trait BitSource {
    /// Borrow or compute the limbs of this value, least significant first.
    fn to_limbs(&self) -> Cow<'_, [Limb]>;
}

impl BitSource for [Limb] {
    #[inline]
    fn to_limbs(&self) -> Cow<'_, [Limb]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> BitSource for [Limb; N] {
    #[inline]
    fn to_limbs(&self) -> Cow<'_, [Limb]> {
        Cow::Borrowed(self)
    }
}

impl BitSource for Vec<Limb> {
    #[inline]
    fn to_limbs(&self) -> Cow<'_, [Limb]> {
        Cow::Borrowed(self)
    }
}

impl BitSource for BigInt {
    #[inline]
    fn to_limbs(&self) -> Cow<'_, [Limb]> {
        Cow::Owned(split_limbs(self))
    }
}

impl BitSource for BigUint {
    #[inline]
    fn to_limbs(&self) -> Cow<'_, [Limb]> {
        Cow::Owned(
            split_unsigned(self, Limb::BASE)
                .into_iter()
                .map(Limb)
                .collect(),
        )
    }
}

impl_bit_source_for_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Widest field [`get_bits`] can return: two limbs' worth of bits.
pub const MAX_FIELD_BITS: u32 = 2 * Limb::BITS;

/// Returns `true` if bit `index` of `source` is set.
///
/// An empty limb vector reads as zero.
///
/// # Panics
/// If `index` lies beyond the last limb of a non-empty source.
pub fn get_bit<S: BitSource + ?Sized>(source: &S, index: usize) -> bool {
    let limbs = source.to_limbs();
    !limbs.is_empty() && read_bit(&limbs, index)
}

/// Read the `count`-bit field of `source` starting at bit `index`. The bit at `index`
/// lands in the least significant position of the result, regardless of where limb
/// boundaries fall.
///
/// An empty limb vector reads as zero.
///
/// # Panics
/// - If `count` is outside `1..=MAX_FIELD_BITS`.
/// - If the field reaches beyond the last limb of a non-empty source.
pub fn get_bits<S: BitSource + ?Sized>(source: &S, index: usize, count: u32) -> WideWord {
    let limbs = source.to_limbs();
    if limbs.is_empty() {
        return 0;
    }
    assert!(
        (1..=MAX_FIELD_BITS).contains(&count),
        "bit count out of range"
    );

    (0..count as usize).rev().fold(0, |acc, offset| {
        (acc << 1) | WideWord::from(read_bit(&limbs, index + offset))
    })
}

fn read_bit(limbs: &[Limb], index: usize) -> bool {
    let limb_bits = Limb::BITS as usize;
    let (digit, offset) = (index / limb_bits, index % limb_bits);
    assert!(digit < limbs.len(), "bit index beyond limb vector");
    limbs[digit].bit(offset as u32)
}
