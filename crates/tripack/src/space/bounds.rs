//! Per-axis domain bounds of a triple space.

use super::triple::Axis;
use crate::core::constants::MAX_CAPACITY;
use crate::core::error::{Error, Result};

/// Exclusive upper bounds `(Rs, Rp, Ro)` for the three triple positions.
///
/// The uniform case `Rs = Rp = Ro = R` is [`Bounds::uniform`]. A valid
/// `Bounds` always has non-zero axes and a capacity `Rs * Rp * Ro` of at most
/// [`MAX_CAPACITY`] bits.
///
/// # Example
///
/// ```
/// use tripack::Bounds;
///
/// let b = Bounds::uniform(10).unwrap();
/// assert_eq!(b.capacity(), 1000);
/// assert_eq!(b.strides(), [1, 10, 100]);
///
/// let mixed = Bounds::new(11, 6, 16).unwrap();
/// assert_eq!(mixed.capacity(), 11 * 6 * 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u32; 3]", into = "[u32; 3]")
)]
pub struct Bounds {
    subject: u32,
    predicate: u32,
    object: u32,
}

impl Bounds {
    /// Creates bounds with one limit per axis.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDomainBound`] if any axis is zero or the capacity
    /// exceeds [`MAX_CAPACITY`].
    pub fn new(subject: u32, predicate: u32, object: u32) -> Result<Self> {
        for bound in [subject, predicate, object] {
            if bound == 0 {
                return Err(Error::InvalidDomainBound {
                    bound: 0,
                    reason: "every axis bound must be positive",
                });
            }
        }
        let capacity = u64::from(subject)
            .checked_mul(u64::from(predicate))
            .and_then(|c| c.checked_mul(u64::from(object)));
        match capacity {
            Some(c) if c <= MAX_CAPACITY => Ok(Self {
                subject,
                predicate,
                object,
            }),
            _ => Err(Error::InvalidDomainBound {
                bound: i64::from(subject.max(predicate).max(object)),
                reason: "capacity exceeds the dense bit-vector limit of 2^32 bits",
            }),
        }
    }

    /// Creates bounds with the same limit `r` on every axis.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDomainBound`] if `r == 0` or `r^3` exceeds
    /// [`MAX_CAPACITY`].
    pub fn uniform(r: u32) -> Result<Self> {
        Self::new(r, r, r).map_err(|err| match err {
            Error::InvalidDomainBound { reason, .. } => Error::InvalidDomainBound {
                bound: i64::from(r),
                reason,
            },
            other => other,
        })
    }

    /// Exclusive bound of `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> u32 {
        match axis {
            Axis::Subject => self.subject,
            Axis::Predicate => self.predicate,
            Axis::Object => self.object,
        }
    }

    /// Bit width of every graph and mask: `Rs * Rp * Ro`.
    #[inline]
    #[must_use]
    pub const fn capacity(self) -> u64 {
        self.subject as u64 * self.predicate as u64 * self.object as u64
    }

    /// Place value of each axis: `[1, Rs, Rs * Rp]`.
    #[inline]
    #[must_use]
    pub const fn strides(self) -> [u64; 3] {
        [1, self.subject as u64, self.subject as u64 * self.predicate as u64]
    }

    /// Whether every axis has the same bound.
    #[must_use]
    pub const fn is_uniform(self) -> bool {
        self.subject == self.predicate && self.predicate == self.object
    }
}

impl TryFrom<[u32; 3]> for Bounds {
    type Error = Error;

    fn try_from([subject, predicate, object]: [u32; 3]) -> Result<Self> {
        Self::new(subject, predicate, object)
    }
}

impl From<Bounds> for [u32; 3] {
    fn from(b: Bounds) -> Self {
        [b.subject, b.predicate, b.object]
    }
}

impl TryFrom<i64> for Bounds {
    type Error = Error;

    /// Uniform bounds from a signed value; non-positive `r` is rejected.
    fn try_from(r: i64) -> Result<Self> {
        if r <= 0 {
            return Err(Error::InvalidDomainBound {
                bound: r,
                reason: "domain bound must be positive",
            });
        }
        let r32 = u32::try_from(r).map_err(|_| Error::InvalidDomainBound {
            bound: r,
            reason: "capacity exceeds the dense bit-vector limit of 2^32 bits",
        })?;
        Self::uniform(r32)
    }
}
