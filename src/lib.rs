//! # fbtrie
//!
//! Spelling correction with universal Levenshtein automata and
//! forward/backward tries.
//!
//! Candidate words are found by walking a trie of the lexicon while a
//! parametric Levenshtein automaton for the typo tracks how many edits the
//! current path costs. Insertions, deletions, substitutions and adjacent
//! transpositions each count as one edit, up to a bound of 1 or 2. The
//! automata are driven by precomputed tables following:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! Queries are split in half and answered from a forward trie and a trie of
//! reversed words, so that one half always anchors the search.
//!
//! ## Example
//!
//! ```rust
//! use fbtrie::prelude::*;
//!
//! let checker: SpellChecker = ["fuzzy", "fully", "funny", "fast"].into_iter().collect();
//! let found = checker.corrections("fulzy", 2)?;
//! assert!(found.contains("fuzzy"));
//! assert!(found.contains("funny"));
//!
//! let mut automaton = ParametricAutomaton::new("otter", 2)?;
//! assert!(automaton.accepts_word("toetr"));
//! assert!(!automaton.accepts_word("toert"));
//! # Ok::<(), fbtrie::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod correction;
pub mod distance;
pub mod error;
pub mod serialization;
pub mod trie;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{AutomatonState, ParametricAutomaton};
    pub use crate::correction::{Candidate, SpellChecker};
    pub use crate::distance::transposition_distance;
    pub use crate::error::{Error, Result};
    pub use crate::serialization::{LexiconSerializer, PlainTextSerializer};
    pub use crate::trie::{Trie, TrieNode};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::JsonSerializer;
}
