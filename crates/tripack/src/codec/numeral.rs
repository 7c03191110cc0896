//! Base-`C` numerals over the symbol alphabet.

use super::Symbol;
use crate::core::constants::{ALPHABET_SIZE, CHUNK_RADIX, DIGITS_PER_CHUNK, ZERO_SYMBOL};
use crate::core::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

const RADIX: u64 = ALPHABET_SIZE as u64;

/// Encodes `n` as a base-`C` numeral, most significant symbol first.
///
/// `0` encodes as `"0"`; every other value starts with a non-zero symbol.
/// Conversion is iterative and peels `C^3` per big-integer division.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use tripack::codec::{decode, encode};
///
/// assert_eq!(encode(&BigUint::from(0u32)), "0");
/// assert_eq!(encode(&BigUint::from(7u32)), "7");
///
/// let big = BigUint::from(1u32) << 4096u32;
/// let text = encode(&big);
/// assert_eq!(decode(&text).unwrap(), big);
/// ```
#[must_use]
pub fn encode(n: &BigUint) -> String {
    if n.is_zero() {
        return ZERO_SYMBOL.to_string();
    }

    // least significant digit first
    let mut digits: Vec<u32> = Vec::with_capacity(symbol_len_hint(n));
    let chunk = BigUint::from(CHUNK_RADIX);
    let mut rest = n.clone();
    while rest >= chunk {
        let quotient = &rest / CHUNK_RADIX;
        let mut limb = low_limb(&(&rest - &quotient * CHUNK_RADIX));
        for _ in 0..DIGITS_PER_CHUNK {
            digits.push((limb % RADIX) as u32);
            limb /= RADIX;
        }
        rest = quotient;
    }
    let mut tail = low_limb(&rest);
    while tail > 0 {
        digits.push((tail % RADIX) as u32);
        tail /= RADIX;
    }
    debug_assert_ne!(digits.last(), Some(&0), "artifact leading zero");

    let text: String = digits
        .iter()
        .rev()
        .filter_map(|&d| Symbol::from_digit(d))
        .map(Symbol::character)
        .collect();
    tracing::trace!(bits = n.bits(), symbols = digits.len(), "encoded integer");
    text
}

/// Encodes a signed integer.
///
/// # Errors
///
/// [`Error::NegativeValue`] if `n < 0`.
pub fn encode_signed(n: &BigInt) -> Result<String> {
    n.to_biguint()
        .map(|magnitude| encode(&magnitude))
        .ok_or_else(|| Error::negative("codec input", n))
}

/// Decodes a base-`C` numeral, most significant symbol first.
///
/// `""` and `"0"` both decode to 0.
///
/// # Errors
///
/// [`Error::MalformedInput`] if the zero symbol is followed by further
/// symbols. `encode` never produces such a string, and accepting it would
/// give 0 and every other value more than one spelling.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use tripack::codec::decode;
///
/// assert_eq!(decode("").unwrap(), BigUint::from(0u32));
/// assert_eq!(decode("42").unwrap(), BigUint::from(4u32 * 1_112_064 + 2));
/// assert!(decode("042").is_err());
/// ```
pub fn decode(s: &str) -> Result<BigUint> {
    let mut chars = s.chars();
    if chars.next() == Some(ZERO_SYMBOL) && chars.next().is_some() {
        return Err(Error::MalformedInput {
            position: 0,
            reason: "zero symbol followed by further symbols",
        });
    }

    let mut acc = BigUint::zero();
    let mut limb = 0u64;
    let mut limb_len = 0usize;
    for c in s.chars() {
        limb = limb * RADIX + u64::from(Symbol::from_char(c).digit());
        limb_len += 1;
        if limb_len == DIGITS_PER_CHUNK {
            acc = acc * CHUNK_RADIX + limb;
            limb = 0;
            limb_len = 0;
        }
    }
    if limb_len > 0 {
        let scale = (0..limb_len).fold(1u64, |scale, _| scale * RADIX);
        acc = acc * scale + limb;
    }
    Ok(acc)
}

/// Value of a big integer known to be below 2^64.
fn low_limb(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

/// Upper estimate of the symbol count: `C > 2^20`, so one symbol per 20 bits.
fn symbol_len_hint(n: &BigUint) -> usize {
    usize::try_from(n.bits() / 20 + 1).unwrap_or(0)
}
