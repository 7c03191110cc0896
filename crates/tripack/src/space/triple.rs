//! Triple value type and text parsing shared with patterns.

use crate::core::constants::ARITY;
use crate::core::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// One of the three positions of a triple.
///
/// Axes are listed in place-value order: the subject is the least
/// significant digit of an index, the object the most significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// Subject position (stride 1).
    Subject = 0,
    /// Predicate position (stride `Rs`).
    Predicate = 1,
    /// Object position (stride `Rs * Rp`).
    Object = 2,
}

impl Axis {
    /// All axes in place-value order.
    pub const ALL: [Self; ARITY] = [Self::Subject, Self::Predicate, Self::Object];

    /// Lower-case axis name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered `(subject, predicate, object)` record over bounded domains.
///
/// A triple carries no bound of its own; range checking happens against a
/// [`TripleSpace`](super::TripleSpace).
///
/// # Example
///
/// ```
/// use tripack::Triple;
///
/// let t: Triple = "0,2,5".parse().unwrap();
/// assert_eq!(t, Triple::new(0, 2, 5));
/// assert_eq!(t.to_string(), "(0, 2, 5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    /// Subject component.
    pub subject: u32,
    /// Predicate component.
    pub predicate: u32,
    /// Object component.
    pub object: u32,
}

impl Triple {
    /// Creates a triple.
    #[inline]
    #[must_use]
    pub const fn new(subject: u32, predicate: u32, object: u32) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Returns the component at `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> u32 {
        match axis {
            Axis::Subject => self.subject,
            Axis::Predicate => self.predicate,
            Axis::Object => self.object,
        }
    }

    /// Components in place-value order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u32; ARITY] {
        [self.subject, self.predicate, self.object]
    }
}

impl From<(u32, u32, u32)> for Triple {
    fn from((subject, predicate, object): (u32, u32, u32)) -> Self {
        Self::new(subject, predicate, object)
    }
}

impl From<[u32; 3]> for Triple {
    fn from([subject, predicate, object]: [u32; 3]) -> Self {
        Self::new(subject, predicate, object)
    }
}

impl TryFrom<(i64, i64, i64)> for Triple {
    type Error = Error;

    /// Converts signed components, rejecting negatives with
    /// [`Error::NegativeValue`].
    fn try_from((s, p, o): (i64, i64, i64)) -> Result<Self> {
        Ok(Self::new(
            component_from_signed(Axis::Subject, s)?,
            component_from_signed(Axis::Predicate, p)?,
            component_from_signed(Axis::Object, o)?,
        ))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

impl FromStr for Triple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [subject, predicate, object] = split_components("triple", s)?;
        let mut out = [0u32; 3];
        for (axis, text) in Axis::ALL.into_iter().zip([subject, predicate, object]) {
            out[axis as usize] = parse_component(axis, text)?.ok_or_else(|| {
                Error::InvalidSyntax {
                    what: "triple",
                    input: s.to_string(),
                    reason: "wildcards are only allowed in patterns",
                }
            })?;
        }
        Ok(Self::from(out))
    }
}

pub(crate) fn component_from_signed(axis: Axis, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(Error::negative(axis.name(), value));
    }
    u32::try_from(value)
        .map_err(|_| Error::out_of_range(axis.name(), value as u64, u64::from(u32::MAX) + 1))
}

/// Splits `"s,p,o"` (optionally parenthesised) into three trimmed fields.
pub(crate) fn split_components<'a>(what: &'static str, s: &'a str) -> Result<[&'a str; 3]> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    let mut fields = inner.split(',').map(str::trim);
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(Error::InvalidSyntax {
            what,
            input: s.to_string(),
            reason: "expected three comma-separated components",
        }),
    }
}

/// Parses one component; `*`, `_` and `?` are wildcards (`None`).
pub(crate) fn parse_component(axis: Axis, text: &str) -> Result<Option<u32>> {
    if matches!(text, "*" | "_" | "?") {
        return Ok(None);
    }
    let value: i64 = text.parse().map_err(|_| Error::InvalidSyntax {
        what: axis.name(),
        input: text.to_string(),
        reason: "not an integer or wildcard",
    })?;
    component_from_signed(axis, value).map(Some)
}
