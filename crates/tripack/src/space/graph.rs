//! Packed graph and mask bit-vectors.

use crate::codec;
use crate::core::error::Result;
use core::fmt;
use core::ops::{BitAnd, BitOr};
use num_bigint::BigUint;
use num_traits::Zero;

/// A set of triples packed into one arbitrary-precision bit-vector.
///
/// Bit `i` is set iff the triple with index `i` is present. A graph does not
/// carry its bounds: the same value is interpreted through a
/// [`TripleSpace`](super::TripleSpace). Graphs are plain values; merging two
/// triple sets is a union producing a new graph.
///
/// # Example
///
/// ```
/// use tripack::{Graph, TripleSpace, Triple};
///
/// let space = TripleSpace::new(10).unwrap();
/// let a = space.build_graph([Triple::new(0, 2, 5)]).unwrap();
/// let b = space.build_graph([Triple::new(0, 3, 8)]).unwrap();
/// let merged = &a | &b;
/// assert_eq!(merged.len(), 2);
///
/// let text = merged.to_codec_string();
/// assert_eq!(Graph::from_codec_string(&text).unwrap(), merged);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Graph(BigUint);

/// Bit-vector with ones at every index consistent with one or more patterns.
///
/// Produced by [`TripleSpace::pattern_mask`](super::TripleSpace::pattern_mask)
/// and [`TripleSpace::any_mask`](super::TripleSpace::any_mask).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask(BigUint);

impl Graph {
    /// The graph with no triples.
    #[must_use]
    pub fn empty() -> Self {
        Self(BigUint::zero())
    }

    /// Wraps a raw bit-vector.
    #[must_use]
    pub fn from_bits(bits: BigUint) -> Self {
        Self(bits)
    }

    /// Borrows the raw bit-vector.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &BigUint {
        &self.0
    }

    /// Unwraps the raw bit-vector.
    #[must_use]
    pub fn into_bits(self) -> BigUint {
        self.0
    }

    /// Whether no triple is present.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of triples present.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.0.count_ones()
    }

    /// Whether bit `index` is set. No range check.
    #[inline]
    #[must_use]
    pub fn contains_index(&self, index: u64) -> bool {
        self.0.bit(index)
    }

    /// Set bit positions in ascending order.
    #[must_use]
    pub fn indices(&self) -> Indices {
        Indices::new(&self.0)
    }

    /// Triples present in either graph.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(&self.0 | &other.0)
    }

    /// Triples present in both graphs.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(&self.0 & &other.0)
    }

    /// Whether the graph has a set bit in common with `mask`.
    ///
    /// Compares limb by limb without materialising `graph & mask`.
    #[must_use]
    pub fn intersects(&self, mask: &Mask) -> bool {
        intersects(&self.0, &mask.0)
    }

    /// Encodes the graph integer with the [`codec`].
    #[must_use]
    pub fn to_codec_string(&self) -> String {
        codec::encode(&self.0)
    }

    /// Decodes a graph integer produced by [`Graph::to_codec_string`].
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`](crate::Error::MalformedInput) if the string
    /// has an artifact leading zero symbol.
    pub fn from_codec_string(s: &str) -> Result<Self> {
        codec::decode(s).map(Self)
    }
}

impl Mask {
    pub(crate) fn from_bits(bits: BigUint) -> Self {
        Self(bits)
    }

    /// Borrows the raw bit-vector.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &BigUint {
        &self.0
    }

    /// Whether the mask selects nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of indices selected.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.0.count_ones()
    }

    /// Whether `index` is selected.
    #[must_use]
    pub fn contains_index(&self, index: u64) -> bool {
        self.0.bit(index)
    }

    /// Indices selected by either mask.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(&self.0 | &other.0)
    }
}

impl BitOr for Graph {
    type Output = Graph;

    fn bitor(self, rhs: Graph) -> Graph {
        Graph(self.0 | rhs.0)
    }
}

impl BitOr<&Graph> for &Graph {
    type Output = Graph;

    fn bitor(self, rhs: &Graph) -> Graph {
        self.union(rhs)
    }
}

impl BitAnd<&Graph> for &Graph {
    type Output = Graph;

    fn bitand(self, rhs: &Graph) -> Graph {
        self.intersection(rhs)
    }
}

/// Restricts a graph to the indices a mask selects.
impl BitAnd<&Mask> for &Graph {
    type Output = Graph;

    fn bitand(self, rhs: &Mask) -> Graph {
        Graph(&self.0 & &rhs.0)
    }
}

impl BitOr<&Mask> for &Mask {
    type Output = Mask;

    fn bitor(self, rhs: &Mask) -> Mask {
        self.union(rhs)
    }
}

impl From<BigUint> for Graph {
    fn from(bits: BigUint) -> Self {
        Self(bits)
    }
}

impl From<Graph> for BigUint {
    fn from(graph: Graph) -> Self {
        graph.0
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(len={}, bits={:#x})", self.len(), self.0)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask(len={}, bits={:#x})", self.len(), self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_codec_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Graph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_codec_string(&text).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn intersects(a: &BigUint, b: &BigUint) -> bool {
    a.iter_u64_digits()
        .zip(b.iter_u64_digits())
        .any(|(x, y)| x & y != 0)
}

/// Iterator over the set bit positions of a graph, ascending.
#[derive(Clone, Debug)]
pub struct Indices {
    words: std::vec::IntoIter<u64>,
    base: u64,
    next_base: u64,
    current: u64,
}

impl Indices {
    fn new(bits: &BigUint) -> Self {
        Self {
            words: bits.to_u64_digits().into_iter(),
            base: 0,
            next_base: 0,
            current: 0,
        }
    }
}

impl Iterator for Indices {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            if self.current != 0 {
                let offset = u64::from(self.current.trailing_zeros());
                self.current &= self.current - 1;
                return Some(self.base + offset);
            }
            self.current = self.words.next()?;
            self.base = self.next_base;
            self.next_base += 64;
        }
    }
}
