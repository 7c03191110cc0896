//! Property-based tests for triple spaces and pattern queries.
//!
//! Uses proptest to check the index bijection and that mask queries agree
//! with a direct scan of the triple set.

use proptest::prelude::*;
use std::collections::BTreeSet;
use tripack::{Bounds, Pattern, Triple, TripleSpace};

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (1u32..=12, 1u32..=12, 1u32..=12).prop_map(|(s, p, o)| Bounds::new(s, p, o).unwrap())
}

fn triple_in(bounds: Bounds) -> impl Strategy<Value = Triple> {
    let [s, p, o]: [u32; 3] = bounds.into();
    (0..s, 0..p, 0..o).prop_map(Triple::from)
}

fn pattern_in(bounds: Bounds) -> impl Strategy<Value = Pattern> {
    let [s, p, o]: [u32; 3] = bounds.into();
    (
        proptest::option::of(0..s),
        proptest::option::of(0..p),
        proptest::option::of(0..o),
    )
        .prop_map(|(s, p, o)| Pattern::new(s, p, o))
}

fn space_with_data() -> impl Strategy<Value = (TripleSpace, Vec<Triple>, Vec<Pattern>)> {
    bounds_strategy().prop_flat_map(|bounds| {
        (
            Just(TripleSpace::with_bounds(bounds)),
            proptest::collection::vec(triple_in(bounds), 0..40),
            proptest::collection::vec(pattern_in(bounds), 0..5),
        )
    })
}

fn scan(triples: &[Triple], pattern: Pattern) -> bool {
    triples.iter().any(|&t| pattern.matches(t))
}

// =============================================================================
// Bijection
// =============================================================================

proptest! {
    /// triple(index(t)) = t
    #[test]
    fn prop_triple_of_index((bounds, t) in bounds_strategy().prop_flat_map(|b| (Just(b), triple_in(b)))) {
        let space = TripleSpace::with_bounds(bounds);
        let i = space.index(t).unwrap();
        prop_assert!(i < space.capacity());
        prop_assert_eq!(space.triple(i).unwrap(), t);
    }

    /// index(triple(i)) = i
    #[test]
    fn prop_index_of_triple((bounds, i) in bounds_strategy().prop_flat_map(|b| (Just(b), 0..b.capacity()))) {
        let space = TripleSpace::with_bounds(bounds);
        let t = space.triple(i).unwrap();
        prop_assert_eq!(space.index(t).unwrap(), i);
    }

    /// (R, 0, 0) is always rejected
    #[test]
    fn prop_subject_at_bound_rejected(r in 1u32..=1000) {
        let space = TripleSpace::new(r).unwrap();
        prop_assert!(space.index(Triple::new(r, 0, 0)).is_err());
    }
}

// =============================================================================
// Graph construction
// =============================================================================

proptest! {
    /// Decoding a built graph yields the distinct input triples
    #[test]
    fn prop_graph_decodes_to_set((space, triples, _) in space_with_data()) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        let decoded = space.triples(&graph).unwrap();
        let expected: BTreeSet<Triple> = triples.iter().copied().collect();
        let got: BTreeSet<Triple> = decoded.iter().copied().collect();
        prop_assert_eq!(decoded.len(), expected.len());
        prop_assert_eq!(got, expected);
    }

    /// has_triple agrees with set membership
    #[test]
    fn prop_has_triple_is_membership((space, triples, _) in space_with_data(), probe in 0u64..1728) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        let t = space.triple(probe % space.capacity()).unwrap();
        prop_assert_eq!(space.has_triple(&graph, t).unwrap(), triples.contains(&t));
    }

    /// Graph survives the codec
    #[test]
    fn prop_graph_codec_roundtrip((space, triples, _) in space_with_data()) {
        let graph = space.build_graph(triples).unwrap();
        let text = graph.to_codec_string();
        prop_assert_eq!(tripack::Graph::from_codec_string(&text).unwrap(), graph);
    }
}

// =============================================================================
// Pattern queries
// =============================================================================

proptest! {
    /// matches_pattern is true iff some triple matches positionally
    #[test]
    fn prop_matches_pattern_is_scan((space, triples, patterns) in space_with_data()) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        for p in patterns {
            prop_assert_eq!(space.matches_pattern(&graph, p).unwrap(), scan(&triples, p), "{}", p);
        }
    }

    /// matches_any is the OR of matches_pattern
    #[test]
    fn prop_matches_any_is_or((space, triples, patterns) in space_with_data()) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        let expected = patterns.iter().any(|&p| space.matches_pattern(&graph, p).unwrap());
        prop_assert_eq!(space.matches_any(&graph, &patterns).unwrap(), expected);
    }

    /// matches_all is the AND of matches_pattern, independent of order
    #[test]
    fn prop_matches_all_is_and((space, triples, patterns) in space_with_data()) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        let expected = patterns.iter().all(|&p| space.matches_pattern(&graph, p).unwrap());
        prop_assert_eq!(space.matches_all(&graph, &patterns).unwrap(), expected);
        let reversed: Vec<Pattern> = patterns.iter().rev().copied().collect();
        prop_assert_eq!(space.matches_all(&graph, &reversed).unwrap(), expected);
    }

    /// select returns exactly the matching triples
    #[test]
    fn prop_select_filters((space, triples, patterns) in space_with_data()) {
        let graph = space.build_graph(triples.iter().copied()).unwrap();
        let distinct: BTreeSet<Triple> = triples.iter().copied().collect();
        for p in patterns {
            let got: BTreeSet<Triple> = space.select(&graph, p).unwrap().into_iter().collect();
            let expected: BTreeSet<Triple> = distinct.iter().copied().filter(|&t| p.matches(t)).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
