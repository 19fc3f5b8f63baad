//! Error types for automaton construction and correction queries.

use thiserror::Error;

/// Errors raised when an automaton or a correction query is misused.
///
/// All of these describe caller contract violations and are detected before
/// any work is done. A failed automaton transition is not an error; it is
/// reported as `None` by the transition functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The query word for an automaton was empty.
    #[error("Word should have one or more letters")]
    InvalidWord,

    /// The requested maximum edit distance has no parametric tables.
    ///
    /// Only distances 1 and 2 are supported.
    #[error("Unsupported edit distance {0}: supported edit distances are 1 and 2")]
    UnsupportedDistance(u8),

    /// A state, offset or characteristic vector lies outside the domain of
    /// the active tables.
    #[error("{what} {value} is out of range (max {max})")]
    OutOfRange {
        /// Which argument was rejected (`"state"`, `"offset"` or `"vector"`).
        what: &'static str,
        /// The rejected value.
        value: usize,
        /// The largest accepted value.
        max: usize,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange {
            what: "vector",
            value: 32,
            max: 31,
        };
        assert_eq!(err.to_string(), "vector 32 is out of range (max 31)");
    }

    #[test]
    fn test_unsupported_distance_message() {
        assert_eq!(
            Error::UnsupportedDistance(3).to_string(),
            "Unsupported edit distance 3: supported edit distances are 1 and 2"
        );
    }
}
