//! Text encoding of big integers in any radix from 2 to 64.
//!
//! Encoded text looks like `-0x1234_ABCD`: an optional sign, an optional radix prefix
//! (`0b`, `0o`, `0x`), then digits from the [`ALPHABET`] with `_` separating groups.

mod alphabet;
mod decode;
mod encode;

pub use self::{
    alphabet::{ALPHABET, digit_value},
    decode::{DecodeError, decode, decode_radix},
    encode::{encode, encode_grouped, encode_signed},
};

use core::ops::RangeInclusive;

/// Supported radices.
pub const RADIX_RANGE: RangeInclusive<u32> = 2..=64;

/// Supported explicit group sizes (zero selects the radix default).
pub const GROUP_SIZE_RANGE: RangeInclusive<usize> = 2..=64;

/// Digit grouping applied while encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grouping {
    /// Digits between `_` separators. Zero selects the default width of the radix.
    pub size: usize,

    /// Minimum number of groups to emit, padding with zero digits as needed.
    pub min_groups: usize,
}

impl Grouping {
    /// Default width for the radix, no padding.
    pub const DEFAULT: Self = Self {
        size: 0,
        min_groups: 0,
    };

    /// Create a new grouping.
    ///
    /// # Panics
    /// If `size` is neither zero nor within [`GROUP_SIZE_RANGE`].
    #[must_use]
    pub const fn new(size: usize, min_groups: usize) -> Self {
        assert!(
            size == 0 || (size >= *GROUP_SIZE_RANGE.start() && size <= *GROUP_SIZE_RANGE.end()),
            "unsupported group size"
        );
        Self { size, min_groups }
    }

    /// Pad to at least `min_groups` groups of the default width.
    #[must_use]
    pub const fn padded(min_groups: usize) -> Self {
        Self::new(0, min_groups)
    }
}

/// Prefix and default group width conventionally used with a radix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct RadixStyle {
    pub(crate) prefix: &'static str,
    pub(crate) group_size: usize,
}

impl RadixStyle {
    pub(crate) const fn for_radix(radix: u32) -> Self {
        let (prefix, group_size) = match radix {
            2 => ("0b", 8),
            8 => ("0o", 3),
            10 => ("", 3),
            16 => ("0x", 4),
            _ => ("", 0),
        };
        Self { prefix, group_size }
    }
}

/// Returns the radix announced by the character following a leading `0`.
pub(crate) const fn prefix_radix(marker: u8) -> Option<u32> {
    match marker {
        b'b' | b'B' => Some(2),
        b'o' | b'O' => Some(8),
        b'd' | b'D' => Some(10),
        b'x' | b'X' => Some(16),
        _ => None,
    }
}

#[inline]
pub(crate) fn assert_radix(radix: u32) {
    assert!(RADIX_RANGE.contains(&radix), "unsupported radix");
}

#[cfg(test)]
mod tests {
    use super::{Grouping, RadixStyle, prefix_radix};

    #[test]
    fn styles() {
        assert_eq!(RadixStyle::for_radix(2).prefix, "0b");
        assert_eq!(RadixStyle::for_radix(8).group_size, 3);
        assert_eq!(RadixStyle::for_radix(10).prefix, "");
        assert_eq!(RadixStyle::for_radix(16).group_size, 4);
        assert_eq!(RadixStyle::for_radix(36).group_size, 0);
    }

    #[test]
    fn prefixes() {
        assert_eq!(prefix_radix(b'X'), Some(16));
        assert_eq!(prefix_radix(b'd'), Some(10));
        assert_eq!(prefix_radix(b'z'), None);
    }

    #[test]
    #[should_panic]
    fn group_size_one_rejected() {
        let _ = Grouping::new(1, 0);
    }
}
