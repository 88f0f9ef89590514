//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self - rhs`, returning the difference wrapped modulo [`Limb::BASE`]
    /// along with the borrow (1 iff `self < rhs`).
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_sub(self, rhs: Limb) -> (Limb, Limb) {
        self.borrowing_sub(rhs, Limb::ZERO)
    }

    /// Perform checked subtraction, returning [`None`] on underflow.
    #[inline]
    #[must_use]
    pub const fn checked_sub(self, rhs: Limb) -> Option<Limb> {
        match self.overflowing_sub(rhs) {
            (res, Limb::ZERO) => Some(res),
            _ => None,
        }
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the limb.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Limb) -> Limb {
        self.overflowing_sub(rhs).0
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn overflowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.overflowing_sub(Limb::ONE);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn overflowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.overflowing_sub(Limb::ONE);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::ONE);
    }

    #[test]
    fn borrowing_sub_with_borrow_in() {
        let (res, borrow) = Limb::MAX.borrowing_sub(Limb::MAX, Limb::ONE);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::ONE);
    }

    #[test]
    fn wrapping_sub_with_borrow() {
        assert_eq!(Limb::ZERO.wrapping_sub(Limb::ONE), Limb::MAX);
    }

    #[test]
    fn checked_sub() {
        assert_eq!(Limb::ONE.checked_sub(Limb::ONE), Some(Limb::ZERO));
        assert_eq!(Limb::ZERO.checked_sub(Limb::ONE), None);
    }

    #[test]
    #[should_panic]
    fn sub_with_underflow() {
        let _ = Limb::ZERO - Limb::ONE;
    }
}
