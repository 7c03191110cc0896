//! Command implementations behind the `tripack` binary.
//!
//! Each command returns its output instead of printing it, so the binary
//! stays a thin clap shell and the commands are testable.

use std::fmt;

use anyhow::{bail, Context, Result};
use num_bigint::{BigInt, BigUint};
use tripack::{codec, Graph, Pattern, Triple, TripleSpace};

/// How a graph is passed on the command line.
///
/// Codec strings may contain U+0000, which cannot travel through process
/// arguments, so the decimal form is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphInput {
    /// Codec string produced by `tripack encode` or `tripack build`.
    Codec(String),
    /// Base-10 integer.
    Decimal(String),
}

impl GraphInput {
    /// Decodes the graph.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed codec text or a non-decimal / negative
    /// integer.
    pub fn read(&self) -> Result<Graph> {
        match self {
            Self::Codec(text) => Graph::from_codec_string(text).context("invalid codec string"),
            Self::Decimal(text) => {
                let bits = parse_natural(text)?;
                Ok(Graph::from_bits(bits))
            }
        }
    }
}

/// Combinator applied by [`query`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum QueryMode {
    /// Exactly one pattern, `matches_pattern`.
    #[default]
    Single,
    /// `matches_any` over all patterns.
    Any,
    /// `matches_all` over all patterns.
    All,
}

/// Output of [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Built {
    /// Number of distinct triples set.
    pub count: u64,
    /// Graph integer in base 10.
    pub decimal: String,
    /// Graph integer as a codec string.
    pub codec: String,
}

impl fmt::Display for Built {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "triples: {}", self.count)?;
        writeln!(f, "decimal: {}", self.decimal)?;
        write!(f, "codec:   {}", self.codec)
    }
}

fn parse_natural(text: &str) -> Result<BigUint> {
    let value: BigInt = text
        .trim()
        .parse()
        .with_context(|| format!("not a decimal integer: {text:?}"))?;
    let natural = value
        .to_biguint()
        .ok_or_else(|| tripack::Error::NegativeValue {
            what: "integer",
            value: value.to_string(),
        })?;
    Ok(natural)
}

/// Encodes a decimal integer as a codec string.
///
/// # Errors
///
/// Returns an error if `decimal` does not parse or is negative.
pub fn encode(decimal: &str) -> Result<String> {
    let value: BigInt = decimal
        .trim()
        .parse()
        .with_context(|| format!("not a decimal integer: {decimal:?}"))?;
    Ok(codec::encode_signed(&value)?)
}

/// Decodes a codec string to a decimal integer.
///
/// # Errors
///
/// Returns an error if `text` is not a well-formed codec string.
pub fn decode(text: &str) -> Result<String> {
    Ok(codec::decode(text)?.to_string())
}

/// Packs `triples` into a graph.
///
/// # Errors
///
/// Returns an error if any triple is outside `space`.
pub fn build(space: &TripleSpace, triples: &[Triple]) -> Result<Built> {
    let graph = space
        .build_graph(triples.iter().copied())
        .context("cannot build graph")?;
    Ok(Built {
        count: graph.len(),
        decimal: graph.bits().to_string(),
        codec: graph.to_codec_string(),
    })
}

/// Evaluates `patterns` against `graph` with the chosen combinator.
///
/// # Errors
///
/// Returns an error if a pattern component is outside `space`, or if
/// [`QueryMode::Single`] is given anything but one pattern.
pub fn query(
    space: &TripleSpace,
    graph: &Graph,
    patterns: &[Pattern],
    mode: QueryMode,
) -> Result<bool> {
    tracing::debug!(?mode, patterns = patterns.len(), "query");
    let hit = match mode {
        QueryMode::Single => {
            let [pattern] = patterns else {
                bail!("--mode single takes exactly one --pattern, got {}", patterns.len());
            };
            space.matches_pattern(graph, *pattern)?
        }
        QueryMode::Any => space.matches_any(graph, patterns)?,
        QueryMode::All => space.matches_all(graph, patterns)?,
    };
    Ok(hit)
}

/// Lists the triples present in `graph`, optionally filtered by `pattern`.
///
/// # Errors
///
/// Returns an error if `graph` has bits beyond the capacity of `space`.
pub fn triples(space: &TripleSpace, graph: &Graph, pattern: Option<Pattern>) -> Result<Vec<Triple>> {
    let found = match pattern {
        Some(pattern) => space.select(graph, pattern)?,
        None => space.triples(graph)?,
    };
    Ok(found)
}

/// Triples of the worked example at `R = 10`.
pub const DEMO_TRIPLES: [Triple; 5] = [
    Triple::new(0, 2, 5),
    Triple::new(0, 2, 6),
    Triple::new(0, 2, 7),
    Triple::new(0, 3, 8),
    Triple::new(0, 3, 9),
];

/// Runs the worked example and returns one report line per check.
///
/// # Errors
///
/// Returns an error only if the example itself is out of range, which
/// cannot happen at `R = 10`.
pub fn demo() -> Result<Vec<String>> {
    let space = TripleSpace::new(10)?;
    let graph = space.build_graph(DEMO_TRIPLES)?;
    let mut lines = Vec::new();

    for triple in DEMO_TRIPLES {
        let hit = space.has_triple(&graph, triple)?;
        lines.push(format!("has_triple {triple}: {hit}"));
    }
    let absent = Triple::new(0, 2, 8);
    lines.push(format!("has_triple {absent}: {}", space.has_triple(&graph, absent)?));

    for pattern in [Pattern::new(Some(0), None, Some(8)), Pattern::new(Some(1), None, Some(8))] {
        let hit = space.matches_pattern(&graph, pattern)?;
        lines.push(format!("matches_pattern {pattern}: {hit}"));
    }

    for patterns in [
        [Pattern::new(Some(0), None, Some(8)), Pattern::new(Some(1), None, Some(8))],
        [Pattern::new(Some(1), None, Some(8)), Pattern::new(Some(1), None, Some(9))],
    ] {
        let hit = space.matches_any(&graph, &patterns)?;
        lines.push(format!("matches_any [{}, {}]: {hit}", patterns[0], patterns[1]));
    }

    for patterns in [
        [Pattern::new(Some(0), None, Some(8)), Pattern::new(Some(0), Some(2), None)],
        [Pattern::new(Some(0), None, Some(8)), Pattern::new(Some(1), None, Some(8))],
    ] {
        let hit = space.matches_all(&graph, &patterns)?;
        lines.push(format!("matches_all [{}, {}]: {hit}", patterns[0], patterns[1]));
    }

    lines.push(format!("graph: {}", graph.bits()));
    lines.push(format!("encoded: {}", graph.to_codec_string().escape_debug()));
    Ok(lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn space() -> TripleSpace {
        TripleSpace::new(10).unwrap()
    }

    #[test]
    fn test_encode_decode_decimal() {
        assert_eq!(encode("0").unwrap(), "0");
        assert_eq!(encode("1112064").unwrap(), "10");
        assert_eq!(decode("10").unwrap(), "1112064");
        assert!(encode("-3").is_err());
        assert!(encode("12ab").is_err());
        assert!(decode("0a").is_err());
    }

    #[test]
    fn test_build_reports_both_forms() {
        let built = build(&space(), &DEMO_TRIPLES).unwrap();
        assert_eq!(built.count, 5);
        let from_decimal = GraphInput::Decimal(built.decimal.clone()).read().unwrap();
        let from_codec = GraphInput::Codec(built.codec.clone()).read().unwrap();
        assert_eq!(from_decimal, from_codec);
    }

    #[test]
    fn test_build_rejects_out_of_range() {
        assert!(build(&space(), &[Triple::new(10, 0, 0)]).is_err());
    }

    #[test]
    fn test_query_modes() {
        let space = space();
        let graph = space.build_graph(DEMO_TRIPLES).unwrap();
        let hit = Pattern::new(Some(0), None, Some(8));
        let miss = Pattern::new(Some(1), None, Some(8));

        assert!(query(&space, &graph, &[hit], QueryMode::Single).unwrap());
        assert!(query(&space, &graph, &[hit, miss], QueryMode::Single).is_err());
        assert!(query(&space, &graph, &[hit, miss], QueryMode::Any).unwrap());
        assert!(!query(&space, &graph, &[hit, miss], QueryMode::All).unwrap());
        assert!(!query(&space, &graph, &[], QueryMode::Any).unwrap());
        assert!(query(&space, &graph, &[], QueryMode::All).unwrap());
    }

    #[test]
    fn test_triples_listing_and_filter() {
        let space = space();
        let graph = space.build_graph(DEMO_TRIPLES).unwrap();
        assert_eq!(triples(&space, &graph, None).unwrap(), DEMO_TRIPLES.to_vec());
        let filtered = triples(&space, &graph, Some(Pattern::new(None, Some(3), None))).unwrap();
        assert_eq!(filtered, vec![Triple::new(0, 3, 8), Triple::new(0, 3, 9)]);
    }

    #[test]
    fn test_negative_decimal_graph() {
        assert!(GraphInput::Decimal("-1".into()).read().is_err());
    }

    #[test]
    fn test_demo_checks() {
        let lines = demo().unwrap();
        let answers: Vec<&str> = lines[..12]
            .iter()
            .map(|line| line.rsplit(": ").next().unwrap())
            .collect();
        assert_eq!(
            answers,
            [
                "true", "true", "true", "true", "true", "false", "true", "false", "true", "false",
                "true", "false"
            ]
        );
        assert!(lines[10].starts_with("matches_all [(0, *, 8), (0, 2, *)]"));
        assert!(lines[11].starts_with("matches_all [(0, *, 8), (1, *, 8)]"));
        assert!(lines[12].starts_with("graph: "));
    }
}
