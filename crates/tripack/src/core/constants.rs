//! Constants for the triple space and the codec alphabet.
//!
//! The codec alphabet is derived from the Unicode scalar value space. No
//! constant here is arbitrary: each one follows from the code-point layout or
//! from the dense bit-vector cost model.

/// Number of positions in a triple (subject, predicate, object).
pub const ARITY: usize = 3;

/// Largest triple-space capacity accepted, in bits (2^32).
///
/// A graph is a dense bit-vector of `capacity` bits regardless of how many
/// triples it holds. 2^32 bits is 512 MiB per graph.
pub const MAX_CAPACITY: u64 = 1 << 32;

/// Highest Unicode code point (U+10FFFF).
pub const CODEPOINT_MAX: u32 = 0x10_FFFF;

/// First surrogate code point (U+D800).
///
/// Surrogates are not scalar values and can never appear in a `str`.
pub const SURROGATE_BASE: u32 = 0xD800;

/// Number of surrogate code points (U+D800-U+DFFF).
pub const SURROGATE_COUNT: u32 = 0x800;

/// Codec alphabet size `C`: every Unicode scalar value.
///
/// 0x110000 code points minus 0x800 surrogates = 1,112,064.
pub const ALPHABET_SIZE: u32 = CODEPOINT_MAX + 1 - SURROGATE_COUNT;

/// Scalar ordinal carrying digit 0.
///
/// Digits are laid over the scalar values in code-point order, rotated so
/// that digit 0 lands on `'0'`. Digits 0-9 are therefore the ASCII digits.
pub const ZERO_ORDINAL: u32 = '0' as u32;

/// The zero symbol: sole encoding of the integer 0.
pub const ZERO_SYMBOL: char = '0';

/// Digits packed per `u64` limb during base conversion.
///
/// `C^3 ≈ 1.38e18 < 2^63`, `C^4` overflows.
pub const DIGITS_PER_CHUNK: usize = 3;

/// `C^DIGITS_PER_CHUNK`, the chunk radix used by encode and decode.
pub const CHUNK_RADIX: u64 =
    ALPHABET_SIZE as u64 * ALPHABET_SIZE as u64 * ALPHABET_SIZE as u64;
