//! Limb addition

use crate::{Limb, primitives::carrying_add};
use core::ops::{Add, AddAssign};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self + rhs`, returning the result along with the carry (0 or 1).
    ///
    /// The carry is set exactly when `self + rhs >= Limb::BASE`.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_add(self, rhs: Limb) -> (Limb, Limb) {
        self.carrying_add(rhs, Limb::ZERO)
    }

    /// Perform checked addition, returning [`None`] on overflow.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: Limb) -> Option<Limb> {
        match self.overflowing_add(rhs) {
            (res, Limb::ZERO) => Some(res),
            _ => None,
        }
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Limb) -> Limb {
        self.overflowing_add(rhs).0
    }
}

impl Add for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs)
            .expect("attempted to add with overflow")
    }
}

impl Add<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Limb {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
