//! Bijective triple/index mapping and pattern queries.

use super::bounds::Bounds;
use super::graph::{intersects, Graph, Mask};
use super::mask;
use super::pattern::Pattern;
use super::triple::{Axis, Triple};
use crate::core::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// A bounded triple space: the linearization of `[0,Rs)×[0,Rp)×[0,Ro)` onto
/// bit positions `[0, capacity)`.
///
/// `index(s, p, o) = s + p*Rs + o*Rs*Rp` (subject least significant, object
/// most significant). With uniform bounds this is `s + p*R + o*R^2`.
///
/// # Example
///
/// ```
/// use tripack::{Pattern, TripleSpace, Triple};
///
/// let space = TripleSpace::new(10).unwrap();
/// let graph = space
///     .build_graph([(0, 2, 5), (0, 2, 6), (0, 3, 8)].map(Triple::from))
///     .unwrap();
///
/// assert!(space.has_triple(&graph, Triple::new(0, 2, 5)).unwrap());
/// assert!(space.matches_pattern(&graph, "0,*,8".parse().unwrap()).unwrap());
/// assert!(!space.matches_pattern(&graph, "1,*,8".parse().unwrap()).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripleSpace {
    bounds: Bounds,
}

impl TripleSpace {
    /// Creates a space with bound `r` on every axis.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDomainBound`] if `r == 0` or `r^3` exceeds the dense
    /// bit-vector limit.
    pub fn new(r: u32) -> Result<Self> {
        Bounds::uniform(r).map(Self::with_bounds)
    }

    /// Creates a space from per-axis bounds.
    #[must_use]
    pub const fn with_bounds(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// The axis bounds.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of distinct triples, equal to the bit width of a graph.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.bounds.capacity()
    }

    /// Largest valid index, `capacity - 1`.
    #[inline]
    #[must_use]
    pub const fn max_index(&self) -> u64 {
        self.capacity() - 1
    }

    /// Whether every component of `triple` is inside its axis' range.
    #[must_use]
    pub fn contains(&self, triple: Triple) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| triple.get(axis) < self.bounds.get(axis))
    }

    /// Index of `triple`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming the first component outside its axis.
    pub fn index(&self, triple: Triple) -> Result<u64> {
        let strides = self.bounds.strides();
        let mut index = 0u64;
        for axis in Axis::ALL {
            let value = self.check_axis(axis, triple.get(axis))?;
            index += u64::from(value) * strides[axis as usize];
        }
        Ok(index)
    }

    /// Triple at `index`; inverse of [`TripleSpace::index`].
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= capacity`.
    pub fn triple(&self, index: u64) -> Result<Triple> {
        if index >= self.capacity() {
            return Err(Error::out_of_range("index", index, self.capacity()));
        }
        let rs = u64::from(self.bounds.get(Axis::Subject));
        let rp = u64::from(self.bounds.get(Axis::Predicate));
        // each remainder is below a u32 bound
        let subject = (index % rs) as u32;
        let rest = index / rs;
        let predicate = (rest % rp) as u32;
        let object = (rest / rp) as u32;
        Ok(Triple::new(subject, predicate, object))
    }

    /// [`TripleSpace::triple`] for a signed index.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeValue`] for `index < 0` (not [`Error::OutOfRange`]),
    /// otherwise as [`TripleSpace::triple`].
    pub fn triple_signed(&self, index: i64) -> Result<Triple> {
        let index = u64::try_from(index).map_err(|_| Error::negative("index", index))?;
        self.triple(index)
    }

    /// Packs `triples` into a graph. Duplicates are idempotent; an empty
    /// input yields the empty graph.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for the first triple outside the space.
    pub fn build_graph<I>(&self, triples: I) -> Result<Graph>
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut bits = BigUint::zero();
        let mut count = 0usize;
        for triple in triples {
            bits.set_bit(self.index(triple)?, true);
            count += 1;
        }
        let graph = Graph::from_bits(bits);
        tracing::debug!(
            inputs = count,
            distinct = graph.len(),
            capacity = self.capacity(),
            "built graph"
        );
        Ok(graph)
    }

    /// Whether `triple` is present in `graph`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `triple` is outside the space.
    pub fn has_triple(&self, graph: &Graph, triple: Triple) -> Result<bool> {
        Ok(graph.contains_index(self.index(triple)?))
    }

    /// Mask with ones at exactly the indices of the triples `pattern` matches.
    ///
    /// Built in closed form from the bounds; see the `mask` module docs.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if a concrete slot is outside its axis.
    pub fn pattern_mask(&self, pattern: Pattern) -> Result<Mask> {
        self.check_pattern(pattern)?;
        let bits = mask::closed_form(self.bounds, pattern);
        tracing::trace!(
            %pattern,
            wildcards = pattern.wildcard_count(),
            "built pattern mask"
        );
        Ok(Mask::from_bits(bits))
    }

    /// Union of the masks of `patterns`; empty for an empty slice.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if any pattern has an out-of-range slot.
    pub fn any_mask(&self, patterns: &[Pattern]) -> Result<Mask> {
        let mut bits = BigUint::zero();
        for &pattern in patterns {
            self.check_pattern(pattern)?;
            bits |= mask::closed_form(self.bounds, pattern);
        }
        Ok(Mask::from_bits(bits))
    }

    /// `graph & pattern_mask(pattern) != 0`.
    ///
    /// # Errors
    ///
    /// As [`TripleSpace::pattern_mask`].
    pub fn matches_pattern(&self, graph: &Graph, pattern: Pattern) -> Result<bool> {
        if let Some(triple) = pattern.as_triple() {
            return self.has_triple(graph, triple);
        }
        Ok(graph.intersects(&self.pattern_mask(pattern)?))
    }

    /// Whether any pattern matches, tested with one combined mask and a
    /// single AND. `false` for an empty slice.
    ///
    /// # Errors
    ///
    /// As [`TripleSpace::any_mask`].
    pub fn matches_any(&self, graph: &Graph, patterns: &[Pattern]) -> Result<bool> {
        let combined = self.any_mask(patterns)?;
        Ok(intersects(graph.bits(), combined.bits()))
    }

    /// Whether every pattern matches. Stops at the first pattern with no
    /// match; `true` for an empty slice.
    ///
    /// # Errors
    ///
    /// As [`TripleSpace::pattern_mask`], for patterns evaluated before the
    /// first miss.
    pub fn matches_all(&self, graph: &Graph, patterns: &[Pattern]) -> Result<bool> {
        for &pattern in patterns {
            if !self.matches_pattern(graph, pattern)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Decodes `graph` back into its triples, in index order.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `graph` has a bit at or beyond `capacity`,
    /// i.e. it was not built in this space.
    pub fn triples(&self, graph: &Graph) -> Result<Vec<Triple>> {
        let width = graph.bits().bits();
        if width > self.capacity() {
            return Err(Error::out_of_range("index", width - 1, self.capacity()));
        }
        graph.indices().map(|i| self.triple(i)).collect()
    }

    /// Triples of `graph` matched by `pattern`, in index order.
    ///
    /// # Errors
    ///
    /// As [`TripleSpace::pattern_mask`] and [`TripleSpace::triples`].
    pub fn select(&self, graph: &Graph, pattern: Pattern) -> Result<Vec<Triple>> {
        let mask = self.pattern_mask(pattern)?;
        self.triples(&(graph & &mask))
    }

    fn check_axis(&self, axis: Axis, value: u32) -> Result<u32> {
        let bound = self.bounds.get(axis);
        if value < bound {
            Ok(value)
        } else {
            Err(Error::out_of_range(
                axis.name(),
                u64::from(value),
                u64::from(bound),
            ))
        }
    }

    fn check_pattern(&self, pattern: Pattern) -> Result<()> {
        for axis in Axis::ALL {
            if let Some(value) = pattern.get(axis) {
                self.check_axis(axis, value)?;
            }
        }
        Ok(())
    }
}
