use super::Limb;

impl Limb {
    /// Returns `true` if the bit at position `index` is set, `false` for an unset bit
    /// or for indices at or above [`Limb::BITS`].
    #[inline(always)]
    #[must_use]
    pub const fn bit(self, index: u32) -> bool {
        if index >= Limb::BITS {
            false
        } else {
            (self.0 >> index) & 1 == 1
        }
    }

    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u32 {
        Limb::BITS - self.leading_zeros()
    }

    /// Calculate the number of leading zeros within the effective width of this limb.
    #[inline(always)]
    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros() - Limb::NAIL_BITS
    }
}
