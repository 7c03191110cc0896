//! A single codec symbol: one base-`C` digit carried by a Unicode scalar.

use crate::core::constants::{
    ALPHABET_SIZE, SURROGATE_BASE, SURROGATE_COUNT, ZERO_ORDINAL, ZERO_SYMBOL,
};
use core::fmt;

/// One digit of a codec string, in `[0, C)` with `C = 1_112_064`.
///
/// Every Unicode scalar value is a symbol and every digit has exactly one
/// scalar. Scalars are numbered in code-point order skipping the surrogate
/// block (the *ordinal*); the digit is the ordinal rotated so that digit 0 is
/// `'0'`.
///
/// ```text
/// digit      0 ..= 9       ->  '0' ..= '9'
/// digit     10             ->  ':'
/// digit  C-48              ->  U+0000
/// digit  C-1               ->  '/'
/// ```
///
/// # Example
///
/// ```
/// use tripack::codec::Symbol;
///
/// let s = Symbol::from_digit(7).unwrap();
/// assert_eq!(s.character(), '7');
/// assert_eq!(Symbol::from_char('7'), s);
/// assert_eq!(Symbol::ZERO.character(), '0');
/// assert!(Symbol::from_digit(1_112_064).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Digit 0, the zero symbol `'0'`.
    pub const ZERO: Self = Self(0);

    /// Digit `C - 1`.
    pub const MAX: Self = Self(ALPHABET_SIZE - 1);

    /// Creates a symbol from a digit; `None` if `digit >= C`.
    #[must_use]
    pub const fn from_digit(digit: u32) -> Option<Self> {
        if digit < ALPHABET_SIZE {
            Some(Self(digit))
        } else {
            None
        }
    }

    /// Digit carried by `c`. Total: every `char` is a symbol.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        let scalar = c as u32;
        let ordinal = if scalar < SURROGATE_BASE {
            scalar
        } else {
            scalar - SURROGATE_COUNT
        };
        Self((ordinal + ALPHABET_SIZE - ZERO_ORDINAL) % ALPHABET_SIZE)
    }

    /// The digit value in `[0, C)`.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u32 {
        self.0
    }

    /// Unicode code point of this symbol's character.
    #[must_use]
    pub const fn codepoint(self) -> u32 {
        let ordinal = (self.0 + ZERO_ORDINAL) % ALPHABET_SIZE;
        if ordinal < SURROGATE_BASE {
            ordinal
        } else {
            ordinal + SURROGATE_COUNT
        }
    }

    /// The character carrying this digit.
    #[must_use]
    pub fn character(self) -> char {
        // codepoint() skips the surrogates and tops out at U+10FFFF
        char::from_u32(self.codepoint()).unwrap_or(ZERO_SYMBOL)
    }
}

impl From<char> for Symbol {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<Symbol> for char {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        symbol.character()
    }
}

impl From<Symbol> for u32 {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        symbol.digit()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}, U+{:04X})", self.digit(), self.codepoint())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}
