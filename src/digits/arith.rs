//! Single-limb arithmetic over limb vectors.
//!
//! Each operation updates a little-endian limb vector in place, running the carry or
//! borrow through the [`Limb`] methods one limb at a time. Results are normalized: zero is
//! `[Limb::ZERO]` and no other vector ends in a zero limb. An empty vector reads as zero.

use crate::Limb;
use alloc::vec::Vec;

/// Computes `limbs += digit`.
pub fn add_digit(limbs: &mut Vec<Limb>, digit: Limb) {
    let mut carry = digit;
    for limb in limbs.iter_mut() {
        if carry.is_zero() {
            break;
        }
        (*limb, carry) = limb.carrying_add(Limb::ZERO, carry);
    }
    if !carry.is_zero() {
        limbs.push(carry);
    }
    normalize(limbs);
}

/// Computes `|limbs - digit|`, returning `true` if `digit` was the larger of the two, i.e.
/// if the difference is negative.
pub fn sub_digit(limbs: &mut Vec<Limb>, digit: Limb) -> bool {
    normalize(limbs);
    if limbs.len() == 1 && limbs[0] < digit {
        limbs[0] = digit.wrapping_sub(limbs[0]);
        return true;
    }

    let mut borrow = digit;
    for limb in limbs.iter_mut() {
        if borrow.is_zero() {
            break;
        }
        (*limb, borrow) = limb.borrowing_sub(borrow, Limb::ZERO);
    }
    debug_assert!(borrow.is_zero());
    normalize(limbs);
    false
}

/// Computes `limbs *= digit`.
pub fn mul_digit(limbs: &mut Vec<Limb>, digit: Limb) {
    let mut carry = Limb::ZERO;
    for limb in limbs.iter_mut() {
        (*limb, carry) = limb.carrying_mul_add(digit, Limb::ZERO, carry);
    }
    if !carry.is_zero() {
        limbs.push(carry);
    }
    normalize(limbs);
}

/// Computes `limbs = limbs * scale + digit`: shift in one chunk of digits during decoding.
pub(crate) fn mul_add_digit(limbs: &mut Vec<Limb>, scale: Limb, digit: Limb) {
    let mut carry = digit;
    for limb in limbs.iter_mut() {
        (*limb, carry) = limb.carrying_mul_add(scale, Limb::ZERO, carry);
    }
    if !carry.is_zero() {
        limbs.push(carry);
    }
    normalize(limbs);
}

fn normalize(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs.last() == Some(&Limb::ZERO) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(Limb::ZERO);
    }
}
