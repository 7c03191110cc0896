//! Bijective integer ↔ string codec.
//!
//! A non-negative integer is written as a base-`C` numeral whose digits are
//! Unicode scalar values ([`Symbol`]), with `C = 1_112_064` (every scalar
//! value). Each symbol carries a little over 20 bits, so a graph bit-vector
//! of `R^3` bits becomes a string of about `R^3 / 20` characters.
//!
//! The codec is a bijection between integers and *well-formed* strings: `"0"`
//! is the only string starting with the zero symbol. [`decode`] rejects any
//! other string with a leading zero symbol.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use tripack::codec::{decode, encode};
//!
//! let n = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
//! let text = encode(&n);
//! assert_eq!(text.chars().count(), 5);
//! assert_eq!(decode(&text).unwrap(), n);
//! ```

mod numeral;
mod symbol;

pub use numeral::{decode, encode, encode_signed};
pub use symbol::Symbol;

#[cfg(test)]
mod tests;
