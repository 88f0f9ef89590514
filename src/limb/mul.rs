//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};

impl Limb {
    /// Compute "wide" multiplication, returning the low [`Limb::BITS`] bits of the product
    /// along with the carry holding everything above them.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Limb) -> (Limb, Limb) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Computes `(self * rhs) + addend + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform checked multiplication, returning [`None`] if the product needs more than
    /// one limb.
    #[inline]
    #[must_use]
    pub const fn checked_mul(self, rhs: Limb) -> Option<Limb> {
        match self.widening_mul(rhs) {
            (lo, Limb::ZERO) => Some(lo),
            _ => None,
        }
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Limb) -> Limb {
        self.widening_mul(rhs).0
    }
}

impl Mul for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: Limb) -> Self {
        self.checked_mul(rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Limb> for Limb {
    type Output = Limb;

    #[inline]
    fn mul(self, rhs: &Limb) -> Self {
        self * *rhs
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
