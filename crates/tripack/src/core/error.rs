//! Error type shared by the triple space and the codec.

/// Result alias for fallible tripack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by tripack operations.
///
/// Every operation is pure and deterministic: a failed call fails identically
/// on retry, so callers must fix the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A triple component or index lies outside its declared domain.
    #[error("{what} {value} is out of range [0, {bound})")]
    OutOfRange {
        /// Which value was checked (`"subject"`, `"index"`, ...).
        what: &'static str,
        /// The offending value.
        value: u64,
        /// Exclusive upper bound of the domain.
        bound: u64,
    },

    /// A domain bound is zero, negative, or yields an unusable capacity.
    #[error("invalid domain bound {bound}: {reason}")]
    InvalidDomainBound {
        /// The rejected bound, as supplied.
        bound: i64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A codec string violates the no-leading-zero invariant.
    #[error("malformed codec string at symbol {position}: {reason}")]
    MalformedInput {
        /// Symbol (not byte) offset of the violation.
        position: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// A negative value was given where a non-negative one is required.
    #[error("{what} must be non-negative, got {value}")]
    NegativeValue {
        /// Which value was checked.
        what: &'static str,
        /// The offending value in decimal.
        value: String,
    },

    /// Text could not be parsed as a triple or pattern.
    #[error("invalid {what} syntax {input:?}: {reason}")]
    InvalidSyntax {
        /// What was being parsed.
        what: &'static str,
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn out_of_range(what: &'static str, value: u64, bound: u64) -> Self {
        Self::OutOfRange { what, value, bound }
    }

    pub(crate) fn negative(what: &'static str, value: impl ToString) -> Self {
        Self::NegativeValue {
            what,
            value: value.to_string(),
        }
    }
}
