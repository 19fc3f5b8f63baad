//! Universal deterministic Levenshtein automata with transpositions.
//!
//! A [`ParametricAutomaton`] decides, letter by letter, whether an input
//! string stays within restricted Damerau-Levenshtein distance `n` of a fixed
//! query word. Insertions, deletions, substitutions and transpositions of
//! adjacent letters each cost one edit.
//!
//! The automaton never builds a word-specific state graph. Each step encodes
//! the input letter as a [characteristic vector](vector::characteristic_vector)
//! relative to the current offset and looks the transition up in shared
//! [parametric tables](tables::ParametricTables), based on:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! # Example
//!
//! ```rust
//! use fbtrie::automaton::ParametricAutomaton;
//!
//! let mut automaton = ParametricAutomaton::new("atlas", 1).unwrap();
//! assert!(automaton.accepts_word("atlsa"));  // transposition
//! assert!(automaton.accepts_word("atla"));   // deletion
//! assert!(!automaton.accepts_word("salomon"));
//! ```

pub mod state;
pub mod tables;
pub mod vector;

pub use state::AutomatonState;
pub use tables::ParametricTables;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use tables::distance_class;

/// Parametric Levenshtein automaton for one query word.
///
/// The automaton holds a current configuration that [`advance`] and
/// [`advance_letter`] move forward. [`peek_next_state`] and [`transition`]
/// compute successors without committing, which lets a trie search explore
/// several children from the same node.
///
/// An instance is cheap scratch state. It is not meant to be shared between
/// concurrent searches; build one per search or reload a snapshot before
/// each use.
///
/// [`advance`]: ParametricAutomaton::advance
/// [`advance_letter`]: ParametricAutomaton::advance_letter
/// [`peek_next_state`]: ParametricAutomaton::peek_next_state
/// [`transition`]: ParametricAutomaton::transition
#[derive(Debug, Clone)]
pub struct ParametricAutomaton {
    word: SmallVec<[char; 16]>,
    max_distance: u8,
    tables: &'static ParametricTables,
    /// `None` once the automaton is dead.
    current: Option<AutomatonState>,
    /// Active table slice, `min(W - offset, 5)`.
    class: usize,
}

impl ParametricAutomaton {
    /// Build an automaton for `word` with maximum edit distance `max_distance`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWord`] if `word` is empty.
    /// - [`Error::UnsupportedDistance`] unless `max_distance` is 1 or 2.
    pub fn new(word: &str, max_distance: u8) -> Result<Self> {
        let word: SmallVec<[char; 16]> = word.chars().collect();
        Self::build(word, max_distance)
    }

    /// Build an automaton from an already decoded word.
    ///
    /// # Errors
    ///
    /// Same as [`ParametricAutomaton::new`].
    pub fn from_chars(word: &[char], max_distance: u8) -> Result<Self> {
        Self::build(SmallVec::from_slice(word), max_distance)
    }

    fn build(word: SmallVec<[char; 16]>, max_distance: u8) -> Result<Self> {
        if word.is_empty() {
            return Err(Error::InvalidWord);
        }
        let tables = ParametricTables::for_distance(max_distance)
            .ok_or(Error::UnsupportedDistance(max_distance))?;
        let class = distance_class(word.len());

        Ok(Self {
            word,
            max_distance,
            tables,
            current: Some(AutomatonState::INITIAL),
            class,
        })
    }

    /// The query word.
    #[inline]
    pub fn word(&self) -> &[char] {
        &self.word
    }

    /// Length of the query word in characters (`W`).
    #[inline]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Maximum edit distance `n`.
    #[inline]
    pub fn max_distance(&self) -> u8 {
        self.max_distance
    }

    /// Number of parametric states of the table family.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.tables.state_count()
    }

    /// Characteristic vector width, `2n+1`.
    #[inline]
    pub fn vector_width(&self) -> usize {
        self.tables.vector_width()
    }

    /// Number of distinct characteristic vectors, `2^(2n+1)`.
    #[inline]
    pub fn vector_count(&self) -> usize {
        self.tables.vector_count()
    }

    /// Current configuration, or `None` if the automaton is dead.
    #[inline]
    pub fn current(&self) -> Option<AutomatonState> {
        self.current
    }

    /// Whether the automaton has reached the dead configuration.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.current.is_none()
    }

    /// Whether the current configuration is accepting.
    #[inline]
    pub fn is_in_accept_state(&self) -> bool {
        self.current.is_some_and(|s| self.is_accept_state(s))
    }

    /// Load a configuration, typically a snapshot taken from a search frame.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `offset > W` or `state >= state_count`.
    pub fn load(&mut self, snapshot: AutomatonState) -> Result<()> {
        self.validate(snapshot)?;
        self.set_current(Some(snapshot));
        Ok(())
    }

    /// Return to the initial configuration `(0, 0)`.
    #[inline]
    pub fn reset(&mut self) {
        self.set_current(Some(AutomatonState::INITIAL));
    }

    /// Characteristic vector of `letter` at `position` of the query word.
    #[inline]
    pub fn characteristic_vector(&self, letter: char, position: usize) -> u32 {
        vector::characteristic_vector(&self.word, letter, position, self.vector_width())
    }

    /// Whether `letter` occurs in the vector window starting at `position`.
    ///
    /// When it does not, the characteristic vector is zero and the zero-vector
    /// transition can be reused.
    #[inline]
    pub fn window_contains(&self, letter: char, position: usize) -> bool {
        vector::window_contains(&self.word, letter, position, self.vector_width())
    }

    /// Whether `snapshot` is accepting.
    ///
    /// Acceptance depends on the offset: the same parametric state can accept
    /// close to the end of the word and reject further from it. Offsets more
    /// than `2n` letters from the end never accept.
    pub fn is_accept_state(&self, snapshot: AutomatonState) -> bool {
        if snapshot.offset > self.word.len() {
            return false;
        }
        let distance_to_end = self.word.len() - snapshot.offset;
        self.tables
            .is_accept(snapshot.state as usize, distance_to_end)
    }

    /// Successor of `from` on `vector`, without touching the current
    /// configuration.
    ///
    /// Returns `Ok(None)` when the transition kills the automaton.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `vector >= 2^(2n+1)` or `from` is not a valid
    /// configuration for this word.
    pub fn transition(&self, from: AutomatonState, vector: u32) -> Result<Option<AutomatonState>> {
        self.validate_vector(vector)?;
        self.validate(from)?;
        let class = distance_class(self.word.len() - from.offset);
        Ok(self.lookup(from, class, vector))
    }

    /// Successor of the current configuration on `vector`, without
    /// committing to it.
    ///
    /// Returns `Ok(None)` if the automaton is dead or the table holds no
    /// transition.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `vector >= 2^(2n+1)`.
    pub fn peek_next_state(&self, vector: u32) -> Result<Option<AutomatonState>> {
        self.validate_vector(vector)?;
        Ok(self
            .current
            .and_then(|current| self.lookup(current, self.class, vector)))
    }

    /// Move to the successor on `vector`, or to the dead configuration if
    /// there is none.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `vector >= 2^(2n+1)`; the configuration is
    /// left unchanged in that case.
    pub fn advance(&mut self, vector: u32) -> Result<()> {
        let next = self.peek_next_state(vector)?;
        self.set_current(next);
        Ok(())
    }

    /// Consume one input letter. Does nothing once the automaton is dead.
    pub fn advance_letter(&mut self, letter: char) {
        let Some(current) = self.current else {
            return;
        };
        let vector = self.characteristic_vector(letter, current.offset);
        let next = self.lookup(current, self.class, vector);
        self.set_current(next);
    }

    /// Whether `candidate` is within distance `n` of the query word.
    ///
    /// Resets the automaton, feeds every letter of `candidate` and checks the
    /// final configuration.
    pub fn accepts_word(&mut self, candidate: &str) -> bool {
        self.reset();
        for letter in candidate.chars() {
            self.advance_letter(letter);
            if self.is_dead() {
                return false;
            }
        }
        self.is_in_accept_state()
    }

    /// Table lookup for a configuration already known to be valid.
    #[inline]
    fn lookup(&self, from: AutomatonState, class: usize, vector: u32) -> Option<AutomatonState> {
        self.tables
            .transition(class, vector as usize, from.state as usize)
            .map(|(state, increment)| {
                AutomatonState::new(state, from.offset + increment as usize)
            })
    }

    fn set_current(&mut self, next: Option<AutomatonState>) {
        self.current = next;
        if let Some(state) = next {
            self.class = distance_class(self.word.len() - state.offset);
        }
    }

    fn validate(&self, snapshot: AutomatonState) -> Result<()> {
        if snapshot.offset > self.word.len() {
            return Err(Error::OutOfRange {
                what: "offset",
                value: snapshot.offset,
                max: self.word.len(),
            });
        }
        if snapshot.state as usize >= self.state_count() {
            return Err(Error::OutOfRange {
                what: "state",
                value: snapshot.state as usize,
                max: self.state_count() - 1,
            });
        }
        Ok(())
    }

    fn validate_vector(&self, vector: u32) -> Result<()> {
        if vector as usize >= self.vector_count() {
            return Err(Error::OutOfRange {
                what: "vector",
                value: vector as usize,
                max: self.vector_count() - 1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_word() {
        assert_eq!(
            ParametricAutomaton::new("", 1).unwrap_err(),
            Error::InvalidWord
        );
    }

    #[test]
    fn test_rejects_unsupported_distance() {
        assert_eq!(
            ParametricAutomaton::new("atlas", 0).unwrap_err(),
            Error::UnsupportedDistance(0)
        );
        assert_eq!(
            ParametricAutomaton::new("atlas", 3).unwrap_err(),
            Error::UnsupportedDistance(3)
        );
    }

    #[test]
    fn test_dimensions() {
        let one = ParametricAutomaton::new("atlas", 1).unwrap();
        assert_eq!(one.word_len(), 5);
        assert_eq!(one.state_count(), 6);
        assert_eq!(one.vector_width(), 3);
        assert_eq!(one.vector_count(), 8);

        let two = ParametricAutomaton::new("atlas", 2).unwrap();
        assert_eq!(two.state_count(), 42);
        assert_eq!(two.vector_width(), 5);
        assert_eq!(two.vector_count(), 32);
        assert_eq!(two.current(), Some(AutomatonState::INITIAL));
    }

    #[test]
    fn test_load_validates_range() {
        let mut automaton = ParametricAutomaton::new("atlas", 2).unwrap();
        assert!(automaton.load(AutomatonState::new(41, 5)).is_ok());
        assert_eq!(
            automaton.load(AutomatonState::new(0, 6)).unwrap_err(),
            Error::OutOfRange {
                what: "offset",
                value: 6,
                max: 5
            }
        );
        assert_eq!(
            automaton.load(AutomatonState::new(42, 0)).unwrap_err(),
            Error::OutOfRange {
                what: "state",
                value: 42,
                max: 41
            }
        );
        // A rejected load leaves the previous configuration in place
        assert_eq!(automaton.current(), Some(AutomatonState::new(41, 5)));
    }

    #[test]
    fn test_peek_rejects_wide_vector() {
        let automaton = ParametricAutomaton::new("atlas", 1).unwrap();
        assert!(automaton.peek_next_state(7).is_ok());
        assert_eq!(
            automaton.peek_next_state(8).unwrap_err(),
            Error::OutOfRange {
                what: "vector",
                value: 8,
                max: 7
            }
        );
    }

    #[test]
    fn test_peek_does_not_commit() {
        let automaton = ParametricAutomaton::new("atlas", 1).unwrap();
        let matched = automaton.peek_next_state(0b100).unwrap();
        assert_eq!(matched, Some(AutomatonState::new(0, 1)));
        assert_eq!(automaton.current(), Some(AutomatonState::INITIAL));

        let mismatched = automaton.peek_next_state(0).unwrap();
        assert!(mismatched.is_some());
        assert_eq!(automaton.current(), Some(AutomatonState::INITIAL));
    }

    #[test]
    fn test_advance_matches_peek() {
        let mut automaton = ParametricAutomaton::new("atlas", 2).unwrap();
        for letter in "atl".chars() {
            let current = automaton.current().unwrap();
            let vector = automaton.characteristic_vector(letter, current.offset);
            let peeked = automaton.peek_next_state(vector).unwrap();
            assert_eq!(automaton.transition(current, vector).unwrap(), peeked);
            automaton.advance(vector).unwrap();
            assert_eq!(automaton.current(), peeked);
        }
        assert_eq!(automaton.current(), Some(AutomatonState::new(0, 3)));
    }

    #[test]
    fn test_dead_state_is_absorbing() {
        let mut automaton = ParametricAutomaton::new("a", 1).unwrap();
        for letter in "xyz".chars() {
            automaton.advance_letter(letter);
        }
        assert!(automaton.is_dead());
        assert!(!automaton.is_in_accept_state());

        automaton.advance_letter('a');
        assert!(automaton.is_dead());
        assert_eq!(automaton.peek_next_state(0b100).unwrap(), None);
        automaton.advance(0b100).unwrap();
        assert!(automaton.is_dead());
    }

    #[test]
    fn test_load_revives_dead_automaton() {
        let mut automaton = ParametricAutomaton::new("a", 1).unwrap();
        assert!(!automaton.accepts_word("xyz"));
        assert!(automaton.is_dead());
        automaton.load(AutomatonState::INITIAL).unwrap();
        assert!(!automaton.is_dead());
    }

    #[test]
    fn test_acceptance_depends_on_offset() {
        let automaton = ParametricAutomaton::new("atlas", 1).unwrap();
        // State 0 accepts with nothing or one letter left, not with two
        assert!(automaton.is_accept_state(AutomatonState::new(0, 5)));
        assert!(automaton.is_accept_state(AutomatonState::new(0, 4)));
        assert!(!automaton.is_accept_state(AutomatonState::new(0, 3)));
        // Offsets far from the end never accept
        assert!(!automaton.is_accept_state(AutomatonState::new(0, 0)));
        assert!(!automaton.is_accept_state(AutomatonState::new(0, 9)));
    }

    #[test]
    fn test_transition_validates_snapshot() {
        let automaton = ParametricAutomaton::new("ab", 1).unwrap();
        assert!(automaton
            .transition(AutomatonState::new(0, 3), 0)
            .is_err());
        assert!(automaton
            .transition(AutomatonState::new(6, 0), 0)
            .is_err());
        assert!(automaton.transition(AutomatonState::new(0, 2), 0).is_ok());
    }

    #[test]
    fn test_from_chars() {
        let word: Vec<char> = "fuzzy".chars().collect();
        let mut automaton = ParametricAutomaton::from_chars(&word, 1).unwrap();
        assert_eq!(automaton.word(), word.as_slice());
        assert!(automaton.accepts_word("fuzy"));
        assert!(ParametricAutomaton::from_chars(&[], 1).is_err());
    }

    #[test]
    fn test_accepts_short_word() {
        let mut automaton = ParametricAutomaton::new("a", 1).unwrap();
        assert!(automaton.accepts_word("a"));
        assert!(automaton.accepts_word(""));
        assert!(automaton.accepts_word("b"));
        assert!(automaton.accepts_word("ab"));
        assert!(automaton.accepts_word("ba"));
        assert!(!automaton.accepts_word("abc"));
        assert!(!automaton.accepts_word("abcd"));
    }
}
