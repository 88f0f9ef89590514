//! Fixed-width limb arithmetic with nail bits, and the digit-level toolkit built on it:
//! digit-vector conversion in any base, bit-field extraction, an arbitrary-radix text
//! codec, two's complement rendering and English spelling of integers.
//!
//! # About
//! A [`Limb`] is a 32-bit word of which only the low 30 bits carry value. The two high
//! "nail" bits stay clear at rest and absorb the carry of an addition or the high half of
//! a product, so carries are read with a shift instead of an overflow check.
//!
//! Arbitrary-precision values are [`num_bigint::BigInt`] and [`num_bigint::BigUint`],
//! re-exported from this crate.
//!
//! # Usage
//!
//! ```
//! use nail_digits::{BigInt, Grouping, decode, encode, encode_grouped, get_bits, to_words};
//!
//! let n = decode("0xDEAD_BEEF").unwrap();
//! assert_eq!(encode(&n, 10), "3_735_928_559");
//! assert_eq!(encode_grouped(&n, 16, Grouping::new(2, 0)), "0xDE_AD_BE_EF");
//! assert_eq!(get_bits(&n, 28, 4), 0xD);
//! assert_eq!(to_words(&BigInt::from(21)), "twenty-one");
//! ```
//!
//! # Text format
//! Encoded integers look like `-0x1234_ABCD`: an optional `-` sign, a radix prefix
//! (`0b`, `0o`, `0x`; none for other radices), then digits from
//! [`ALPHABET`] separated into groups by `_`. Decoding accepts any run of `+`/`-` signs,
//! an optional `0b`/`0o`/`0d`/`0x` prefix and `_`, `,` or whitespace between digits.
//!
//! # Minimum Supported Rust Version
//! **Rust 1.85** at a minimum.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    unused_qualifications
)]

extern crate alloc;

#[macro_use]
mod macros;

mod bits;
pub mod digits;
mod limb;
mod primitives;
pub mod radix;
mod twos_complement;
mod word;
mod words;

pub use crate::{
    bits::{BitSource, MAX_FIELD_BITS, get_bit, get_bits},
    digits::{
        add_digit, combine, combine_limbs, count_digits, fast_base, mul_digit, place_value, split,
        split_limbs, sub_digit,
    },
    limb::Limb,
    radix::{
        ALPHABET, DecodeError, Grouping, decode, decode_radix, digit_value, encode,
        encode_grouped, encode_signed,
    },
    twos_complement::{signed_bits, to_twos_complement},
    word::{SignedWord, WideWord, Word},
    words::to_words,
};
pub use num_bigint::{self, BigInt, BigUint};

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
