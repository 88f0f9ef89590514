//! `Word` is the storage integer of a [`Limb`][`crate::Limb`]. Only the low
//! [`Limb::BITS`][`crate::Limb::BITS`] bits of a word carry value; the remaining high
//! "nail" bits stay clear so that a single add or subtract can overflow into them.

/// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u32;

/// Wide integer type: double the width of [`Word`].
pub type WideWord = u64;

/// Signed integer type with the same width as [`Word`].
pub type SignedWord = i32;

/// Returns `true` if the most significant storage bit of `value` is set.
#[inline(always)]
pub(crate) const fn msb(value: Word) -> bool {
    value >> (Word::BITS - 1) == 1
}
