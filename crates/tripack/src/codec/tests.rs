//! Tests for the integer/string codec.

use super::{decode, encode, encode_signed, Symbol};
use crate::core::constants::{ALPHABET_SIZE, CHUNK_RADIX};
use crate::Error;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

const C: u64 = ALPHABET_SIZE as u64;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

// ============================================================================
// Symbol tests
// ============================================================================

#[test]
fn test_symbol_ascii_digits() {
    for d in 0..10u32 {
        let s = Symbol::from_digit(d).unwrap();
        assert_eq!(s.character(), char::from_digit(d, 10).unwrap());
    }
}

#[test]
fn test_symbol_wraps_to_nul() {
    let nul = Symbol::from_digit(ALPHABET_SIZE - '0' as u32).unwrap();
    assert_eq!(nul.character(), '\u{0}');
    assert_eq!(Symbol::MAX.character(), '/');
}

#[test]
fn test_symbol_skips_surrogates() {
    let before = Symbol::from_char('\u{D7FF}');
    let after = Symbol::from_char('\u{E000}');
    assert_eq!(after.digit(), before.digit() + 1);
    assert_eq!(before.codepoint(), 0xD7FF);
    assert_eq!(after.codepoint(), 0xE000);
}

#[test]
fn test_symbol_extremes() {
    let top = Symbol::from_char(char::MAX);
    assert_eq!(top.codepoint(), 0x10_FFFF);
    assert_eq!(Symbol::from_digit(top.digit()), Some(top));
    assert_eq!(Symbol::from_digit(ALPHABET_SIZE), None);
}

#[test]
fn test_symbol_char_roundtrip_sampled() {
    for cp in (0..=0x10_FFFFu32).step_by(997).chain([0xD7FF, 0xE000, 0x10_FFFF]) {
        if let Some(c) = char::from_u32(cp) {
            assert_eq!(Symbol::from_char(c).character(), c, "U+{cp:04X}");
        }
    }
}

#[test]
fn test_symbol_display() {
    assert_eq!(Symbol::ZERO.to_string(), "0");
    assert_eq!(format!("{:?}", Symbol::ZERO), "Symbol(0, U+0030)");
}

// ============================================================================
// Encode / decode
// ============================================================================

#[test]
fn test_encode_zero() {
    assert_eq!(encode(&BigUint::zero()), "0");
    assert_eq!(decode("0"), Ok(BigUint::zero()));
    assert_eq!(decode(""), Ok(BigUint::zero()));
}

#[test]
fn test_encode_small_values_are_ascii_digits() {
    for n in 1..10u64 {
        assert_eq!(encode(&big(n)), n.to_string());
    }
    assert_eq!(encode(&big(10)), ":");
}

#[test]
fn test_encode_radix_boundaries() {
    assert_eq!(encode(&big(C - 1)), "/");
    assert_eq!(encode(&big(C)), "10");
    assert_eq!(encode(&big(C * C)), "100");
    assert_eq!(encode(&big(CHUNK_RADIX)), "1000");
    assert_eq!(encode(&(big(CHUNK_RADIX) * CHUNK_RADIX)), "1000000");
}

#[test]
fn test_encode_never_leading_zero() {
    let samples = [
        big(1),
        big(C),
        big(CHUNK_RADIX),
        big(CHUNK_RADIX) * C,
        big(CHUNK_RADIX) * CHUNK_RADIX,
        BigUint::one() << 4096u32,
    ];
    for n in samples {
        let text = encode(&n);
        assert_ne!(text.chars().next(), Some('0'), "n={n}");
    }
}

#[test]
fn test_roundtrip_around_chunk_boundaries() {
    for base in [big(C), big(CHUNK_RADIX), big(CHUNK_RADIX) * CHUNK_RADIX] {
        for delta in 0..3u32 {
            let above = &base + delta;
            assert_eq!(decode(&encode(&above)), Ok(above.clone()));
            let below = &base - (delta + 1);
            assert_eq!(decode(&encode(&below)), Ok(below.clone()));
        }
    }
}

#[test]
fn test_roundtrip_ten_thousand_digits() {
    let n = BigUint::from(10u32).pow(10_000) - 1u32;
    assert_eq!(n.to_string().len(), 10_000);
    let text = encode(&n);
    assert_eq!(decode(&text), Ok(n));
}

#[test]
fn test_roundtrip_huge_power_of_two() {
    // 2^(27^3), about 20k bits
    let n = BigUint::one() << 19_683u32;
    let text = encode(&n);
    assert!(text.chars().count() < 19_683 / 20 + 2);
    assert_eq!(decode(&text), Ok(n));
}

#[test]
fn test_decode_rejects_leading_zero() {
    assert_eq!(
        decode("00"),
        Err(Error::MalformedInput {
            position: 0,
            reason: "zero symbol followed by further symbols",
        })
    );
    assert!(decode("07").is_err());
}

#[test]
fn test_decode_accepts_any_scalar() {
    let text = "\u{0}\u{10FFFF}";
    let n = decode(text).unwrap();
    assert_eq!(encode(&n), text);
}

#[test]
fn test_injective_small_range() {
    use std::collections::HashSet;
    let mut seen = HashSet::new();
    for n in (0..5_000u64).chain((C - 5_000)..(C + 5_000)) {
        assert!(seen.insert(encode(&big(n))), "collision at {n}");
    }
}

#[test]
fn test_encode_signed() {
    assert_eq!(encode_signed(&BigInt::from(7)), Ok("7".to_string()));
    assert_eq!(encode_signed(&BigInt::zero()), Ok("0".to_string()));
    assert_eq!(
        encode_signed(&BigInt::from(-5)),
        Err(Error::NegativeValue {
            what: "codec input",
            value: "-5".to_string(),
        })
    );
}
