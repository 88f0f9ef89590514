//! Digit alphabet shared by every radix.

/// Digit value to character, for radices up to 64.
pub const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Marks bytes outside the alphabet in [`INVERSE`].
const INVALID: u8 = u8::MAX;

/// Character to digit value.
const INVERSE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Largest radix whose digits are case-insensitive.
const CASELESS_RADIX_MAX: u32 = 36;

/// Returns the value of `ch` as a digit in `radix`, or [`None`] if `ch` is not a digit of
/// that radix.
///
/// Radices up to 36 accept either letter case; above that, case is significant.
#[must_use]
pub fn digit_value(ch: char, radix: u32) -> Option<u32> {
    if !ch.is_ascii() {
        return None;
    }

    let byte = if radix <= CASELESS_RADIX_MAX {
        ch.to_ascii_uppercase() as u8
    } else {
        ch as u8
    };

    match INVERSE[byte as usize] {
        INVALID => None,
        value if u32::from(value) < radix => Some(value.into()),
        _ => None,
    }
}

/// Character for digit `value`.
#[inline]
pub(crate) fn digit_char(value: u32) -> u8 {
    ALPHABET[value as usize]
}
