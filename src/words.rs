//! English cardinal names for integers, e.g. `"one thousand two-hundred thirty-four"`.

use crate::digits::split;
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Names of the powers of one thousand. Groups past the last name are spelled without one.
const SCALES: [&str; 22] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
];

/// Spell out `value` in English.
///
/// Zero is `"zero"`. Negative values are prefixed with `"negative"`.
///
/// ```
/// use nail_digits::{to_words, BigInt};
///
/// assert_eq!(to_words(&BigInt::from(1234)), "one thousand two-hundred thirty-four");
/// assert_eq!(to_words(&BigInt::from(-5)), "negative five");
/// ```
#[must_use]
pub fn to_words(value: &BigInt) -> String {
    if value.is_zero() {
        return ONES[0].to_string();
    }

    // Spelled least significant group first; emitted in reverse.
    let mut phrases = Vec::new();
    for (scale, group) in split(value, 10).chunks(3).enumerate() {
        let ones = group[0] as usize;
        let tens = group.get(1).copied().unwrap_or(0) as usize;
        let hundreds = group.get(2).copied().unwrap_or(0) as usize;

        if ones == 0 && tens == 0 && hundreds == 0 {
            continue;
        }
        if let Some(&name) = SCALES.get(scale).filter(|name| !name.is_empty()) {
            phrases.push(name.to_string());
        }
        match (tens, ones) {
            (0, 0) => {}
            (0, ones) => phrases.push(ONES[ones].to_string()),
            (1, ones) => phrases.push(TEENS[ones].to_string()),
            (tens, 0) => phrases.push(TENS[tens].to_string()),
            (tens, ones) => phrases.push([TENS[tens], ONES[ones]].join("-")),
        }
        if hundreds != 0 {
            phrases.push([ONES[hundreds], "hundred"].join("-"));
        }
    }
    if value.is_negative() {
        phrases.push("negative".to_string());
    }

    phrases.reverse();
    phrases.join(" ")
}
