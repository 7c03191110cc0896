//! Wildcard patterns over triples.

use super::triple::{parse_component, split_components, Axis, Triple};
use crate::core::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// A triple whose positions are either concrete values or wildcards.
///
/// `None` in a position is the wildcard: any value of that axis matches.
///
/// # Example
///
/// ```
/// use tripack::{Pattern, Triple};
///
/// let p: Pattern = "0,*,8".parse().unwrap();
/// assert_eq!(p, Pattern::new(Some(0), None, Some(8)));
/// assert!(p.matches(Triple::new(0, 3, 8)));
/// assert!(!p.matches(Triple::new(1, 3, 8)));
/// assert_eq!(p.to_string(), "(0, *, 8)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    /// Subject value, or `None` for any subject.
    pub subject: Option<u32>,
    /// Predicate value, or `None` for any predicate.
    pub predicate: Option<u32>,
    /// Object value, or `None` for any object.
    pub object: Option<u32>,
}

impl Pattern {
    /// The pattern matching every triple.
    pub const ANY: Self = Self::new(None, None, None);

    /// Creates a pattern.
    #[inline]
    #[must_use]
    pub const fn new(subject: Option<u32>, predicate: Option<u32>, object: Option<u32>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Returns the slot at `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> Option<u32> {
        match axis {
            Axis::Subject => self.subject,
            Axis::Predicate => self.predicate,
            Axis::Object => self.object,
        }
    }

    /// Number of wildcard positions (0-3).
    #[must_use]
    pub fn wildcard_count(self) -> usize {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.get(axis).is_none())
            .count()
    }

    /// The triple this pattern denotes, if it has no wildcards.
    #[must_use]
    pub const fn as_triple(self) -> Option<Triple> {
        match (self.subject, self.predicate, self.object) {
            (Some(s), Some(p), Some(o)) => Some(Triple::new(s, p, o)),
            _ => None,
        }
    }

    /// Positional match: every concrete slot equals the triple's component.
    #[must_use]
    pub fn matches(self, triple: Triple) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.get(axis).map_or(true, |v| v == triple.get(axis)))
    }
}

impl From<Triple> for Pattern {
    fn from(t: Triple) -> Self {
        Self::new(Some(t.subject), Some(t.predicate), Some(t.object))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.get(axis) {
                Some(v) => write!(f, "{v}")?,
                None => f.write_str("*")?,
            }
        }
        f.write_str(")")
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [subject, predicate, object] = split_components("pattern", s)?;
        Ok(Self::new(
            parse_component(Axis::Subject, subject)?,
            parse_component(Axis::Predicate, predicate)?,
            parse_component(Axis::Object, object)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_spellings() {
        for text in ["*,*,*", "_,_,_", "?,?,?", "(*, *, *)"] {
            assert_eq!(text.parse::<Pattern>(), Ok(Pattern::ANY), "{text}");
        }
    }

    #[test]
    fn test_wildcard_count() {
        assert_eq!(Pattern::ANY.wildcard_count(), 3);
        assert_eq!(Pattern::new(Some(0), None, Some(8)).wildcard_count(), 1);
        assert_eq!(Pattern::from(Triple::new(1, 2, 3)).wildcard_count(), 0);
    }

    #[test]
    fn test_as_triple() {
        assert_eq!(
            Pattern::new(Some(1), Some(2), Some(3)).as_triple(),
            Some(Triple::new(1, 2, 3))
        );
        assert_eq!(Pattern::new(Some(1), None, Some(3)).as_triple(), None);
    }

    #[test]
    fn test_matches() {
        let p = Pattern::new(None, Some(2), None);
        assert!(p.matches(Triple::new(0, 2, 5)));
        assert!(p.matches(Triple::new(9, 2, 0)));
        assert!(!p.matches(Triple::new(0, 3, 5)));
        assert!(Pattern::ANY.matches(Triple::default()));
    }

    #[test]
    fn test_display_roundtrip() {
        let p = Pattern::new(None, Some(4), None);
        assert_eq!(p.to_string().parse::<Pattern>(), Ok(p));
    }
}
