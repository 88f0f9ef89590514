//! Big integers are represented as a little-endian vector of "limbs": fixed-width digits
//! narrower than their storage word.

mod add;
mod bits;
mod mul;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{WideWord, Word};
use core::fmt;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A single digit of a limb vector.
///
/// The [`Limb`] type stores a [`Word`] of which only the low [`Limb::BITS`] bits are used.
/// The top [`Limb::NAIL_BITS`] "nail" bits of a valid limb are always zero; arithmetic
/// lets a carry or borrow spill into them before masking it back out.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Number of unused high bits in the storage [`Word`].
    pub const NAIL_BITS: u32 = 2;

    /// Effective width of a limb in bits.
    pub const BITS: u32 = Word::BITS - Self::NAIL_BITS;

    /// Size of the storage integer in bytes.
    pub const BYTES: usize = size_of::<Word>();

    /// Number of distinct limb values, `2^BITS`.
    pub const BASE: Word = 1 << Self::BITS;

    /// Mask selecting the semantic bits of a limb.
    pub const MASK: Self = Limb(Self::BASE - 1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Self::MASK;

    /// Width of the zero-padded hexadecimal rendering.
    const HEX_DIGITS: usize = Self::BITS.div_ceil(4) as usize;

    /// Create a [`Limb`], asserting that no nail bits are set.
    #[inline]
    #[must_use]
    pub const fn new(word: Word) -> Self {
        assert!(word <= Self::MASK.0, "limb out of range");
        Limb(word)
    }

    /// Create a [`Limb`] from the low [`Limb::BITS`] bits of `word`.
    #[inline]
    #[must_use]
    pub const fn from_word_masked(word: Word) -> Self {
        Limb(word & Self::MASK.0)
    }

    /// Create a [`Limb`] from the low [`Limb::BITS`] bits of a wide word.
    #[inline]
    #[must_use]
    pub const fn from_wide_masked(wide: WideWord) -> Self {
        Limb((wide & Self::MASK.0 as WideWord) as Word)
    }

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Does this limb leave its nail bits clear?
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 <= Self::MASK.0
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u16> for Limb {
    #[inline]
    fn from(n: u16) -> Limb {
        Limb(n.into())
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Word {
        limb.0
    }
}

impl From<Limb> for WideWord {
    #[inline]
    fn from(limb: Limb) -> WideWord {
        limb.0.into()
    }
}

impl num_traits::Zero for Limb {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Limb::is_zero(self)
    }
}

impl num_traits::One for Limb {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl num_traits::Bounded for Limb {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::Binary for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }

        write!(f, "{:0width$b}", &self.0, width = Self::BITS as usize)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::HEX_DIGITS)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::HEX_DIGITS)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Limb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let word = Word::deserialize(deserializer)?;
        if word > Self::MASK.0 {
            return Err(D::Error::custom("limb has nail bits set"));
        }
        Ok(Self(word))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Limb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}
