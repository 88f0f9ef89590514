use crate::{
    Limb,
    word::{self, SignedWord, WideWord, Word},
};

/// Computes `lhs + rhs + carry`, returning the masked result along with the new carry (0 or 1).
///
/// Both operands are at most [`Limb::MASK`], so the sum always fits in the nail bits of a
/// [`Word`] and never overflows the storage type.
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let ret = lhs + rhs + carry;
    (ret & Limb::MASK.0, ret >> Limb::BITS)
}

/// Computes `lhs - (rhs + borrow)`, returning the masked result along with the new borrow
/// (0 or 1), taken from the sign bit of the raw signed difference.
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let ret = (lhs as SignedWord) - (rhs as SignedWord) - (borrow as SignedWord);
    let ret = ret as Word;
    (ret & Limb::MASK.0, word::msb(ret) as Word)
}

/// Computes `lhs * rhs`, returning the low [`Limb::BITS`] bits and everything above them.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: Word, rhs: Word) -> (Word, Word) {
    let ret = (lhs as WideWord) * (rhs as WideWord);
    (
        (ret & Limb::MASK.0 as WideWord) as Word,
        (ret >> Limb::BITS) as Word,
    )
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    // Cannot overflow the carry:
    // (2^30-1) * (2^30-1) + (2^30-1) + (2^30-1) = 2^60 - 1
    // which leaves at most 2^30 - 1 above the low 30 bits.
    let ret = (lhs as WideWord) * (rhs as WideWord) + (addend as WideWord) + (carry as WideWord);
    (
        (ret & Limb::MASK.0 as WideWord) as Word,
        (ret >> Limb::BITS) as Word,
    )
}
