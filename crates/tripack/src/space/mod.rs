//! Bounded triple spaces packed into bit-vectors.
//!
//! A [`TripleSpace`] linearizes triples into bit positions; a [`Graph`] is the
//! OR of one bit per triple; a [`Mask`] holds the bits of every triple a
//! [`Pattern`] matches. Queries are a single AND of graph and mask, so they
//! never unpack the graph.
//!
//! # Layout
//!
//! ```text
//! index = s + p*Rs + o*Rs*Rp
//!
//! (*, p, o)  one run of Rs bits
//! (*, *, o)  one run of Rs*Rp bits
//! (s, p, *)  Ro single bits, Rs*Rp apart
//! (*, p, *)  Ro runs of Rs bits, Rs*Rp apart
//! (*, *, *)  one run of capacity bits
//! ```
//!
//! # Example
//!
//! ```
//! use tripack::{Pattern, TripleSpace, Triple};
//!
//! let space = TripleSpace::new(10).unwrap();
//! let graph = space
//!     .build_graph([(0, 2, 5), (0, 2, 6), (0, 2, 7), (0, 3, 8), (0, 3, 9)].map(Triple::from))
//!     .unwrap();
//!
//! let p = |s: &str| s.parse::<Pattern>().unwrap();
//! assert!(space.matches_any(&graph, &[p("0,*,8"), p("1,*,8")]).unwrap());
//! assert!(space.matches_all(&graph, &[p("0,*,8"), p("0,2,*")]).unwrap());
//! assert!(!space.matches_all(&graph, &[p("0,*,8"), p("1,*,8")]).unwrap());
//! ```

mod bounds;
mod graph;
mod index;
mod mask;
mod pattern;
mod triple;

pub use bounds::Bounds;
pub use graph::{Graph, Indices, Mask};
pub use index::TripleSpace;
pub use pattern::Pattern;
pub use triple::{Axis, Triple};
