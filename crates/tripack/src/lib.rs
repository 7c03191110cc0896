//! tripack - bounded triple sets packed into a single bit-vector
//!
//! A set of `(subject, predicate, object)` triples over small integer domains
//! is stored as one arbitrary-precision integer: bit `index(t)` is set iff
//! triple `t` is present. Membership and wildcard pattern queries are answered
//! with one AND against a precomputed mask, without unpacking the set. A
//! companion codec writes any non-negative integer, including a packed graph,
//! as a compact string over the Unicode scalar values.
//!
//! # Model
//!
//! ```text
//! Triple  = (s, p, o)              s < Rs, p < Rp, o < Ro
//! Index   = s + p*Rs + o*Rs*Rp     bijective onto [0, capacity)
//! Graph   = OR of 1 << Index       capacity = Rs*Rp*Ro bits
//! Mask    = OR over matching t     closed form, no enumeration
//! Query   = Graph & Mask != 0
//! ```
//!
//! # Example: Pattern Queries
//!
//! ```
//! use tripack::{Pattern, Triple, TripleSpace};
//!
//! let space = TripleSpace::new(10).unwrap();
//! let graph = space
//!     .build_graph([(0, 2, 5), (0, 2, 6), (0, 2, 7), (0, 3, 8), (0, 3, 9)].map(Triple::from))
//!     .unwrap();
//!
//! assert!(space.has_triple(&graph, Triple::new(0, 2, 5)).unwrap());
//! assert!(!space.has_triple(&graph, Triple::new(0, 2, 8)).unwrap());
//!
//! let wildcard: Pattern = "0,*,8".parse().unwrap();
//! assert!(space.matches_pattern(&graph, wildcard).unwrap());
//! ```
//!
//! # Example: Codec
//!
//! ```
//! use tripack::{Graph, Triple, TripleSpace};
//!
//! let space = TripleSpace::new(10).unwrap();
//! let graph = space.build_graph([Triple::new(0, 3, 9)]).unwrap();
//!
//! let text = graph.to_codec_string();
//! assert_eq!(text.chars().count(), 47);
//! assert_eq!(Graph::from_codec_string(&text).unwrap(), graph);
//! ```
//!
//! # Design Principles
//!
//! - **Pure functions**: no operation mutates its inputs; every type is
//!   `Send + Sync`
//! - **No silent truncation**: graphs and codec values are `BigUint`
//! - **Synchronous errors**: out-of-domain input is an [`Error`], never
//!   clamped

// Constants and the shared error type
mod core;

// Triple spaces, graphs, masks, patterns
pub mod space;

// Integer <-> string codec over Unicode scalar values
pub mod codec;

pub use crate::core::constants;
pub use crate::core::error::{Error, Result};
pub use space::{Axis, Bounds, Graph, Indices, Mask, Pattern, Triple, TripleSpace};

/// Prelude module for convenient imports.
///
/// ```
/// use tripack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{decode, encode, Symbol};
    pub use crate::core::error::{Error, Result};
    pub use crate::space::{Bounds, Graph, Mask, Pattern, Triple, TripleSpace};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_send_sync() {
        assert_send_sync::<TripleSpace>();
        assert_send_sync::<Graph>();
        assert_send_sync::<Mask>();
        assert_send_sync::<Pattern>();
        assert_send_sync::<codec::Symbol>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_graph_codec_roundtrip() {
        let space = TripleSpace::new(10).unwrap();
        let graph = space
            .build_graph([(0, 2, 5), (0, 2, 6), (1, 4, 1)].map(Triple::from))
            .unwrap();
        let text = graph.to_codec_string();
        let back = Graph::from_codec_string(&text).unwrap();
        assert_eq!(space.triples(&back).unwrap(), space.triples(&graph).unwrap());
    }
}
