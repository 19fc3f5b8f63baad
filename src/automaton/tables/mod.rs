//! Precomputed parametric tables for the transposition automata.
//!
//! A parametric automaton does not depend on the query word or the alphabet.
//! Its transitions are indexed by a characteristic vector (which positions
//! around the current offset match the input letter), the current parametric
//! state, and how far the offset is from the end of the word.
//!
//! # Table contract
//!
//! For each supported bound `n`:
//!
//! - `transition(class, vector, state)` yields the next state and the offset
//!   increment, or `None` when the automaton dies.
//! - `class` is the distance to the end of the word clamped to
//!   `0, 1, 2, 3, 4, >= 5` (see [`distance_class`]). Tables for distances of
//!   5 or more are identical, so one slice serves them all.
//! - `is_accept(state, distance_to_end)` is defined for distances `0..=2n`
//!   and holds exactly when the consumed input is within restricted
//!   Damerau-Levenshtein distance `n` of the query word.
//!
//! The statics live in [`lev1t`] and [`lev2t`] and are checked against
//! brute-force edit distance by `tests/table_conformance.rs`.

pub mod lev1t;
pub mod lev2t;

/// Number of distance-to-end classes (`0..=4` and `>= 5`).
pub const DISTANCE_CLASSES: usize = 6;

/// Sentinel in the transition tables meaning "no transition".
const NO_TRANSITION: i8 = -1;

/// Clamp a distance to the end of the word to its table class.
#[inline]
pub fn distance_class(distance_to_end: usize) -> usize {
    distance_to_end.min(DISTANCE_CLASSES - 1)
}

/// Read-only view over one family of parametric tables.
///
/// Instances are `'static` and shared by every automaton built for the same
/// bound; they are never mutated.
#[derive(Debug)]
pub struct ParametricTables {
    max_distance: u8,
    state_count: usize,
    vector_count: usize,
    /// Flattened `[class][vector][state]`.
    transitions: &'static [i8],
    /// Flattened `[class][vector][state]`.
    increments: &'static [u8],
    /// Flattened `[state][distance_to_end]`.
    accept: &'static [bool],
}

static LEV1T: ParametricTables = ParametricTables {
    max_distance: 1,
    state_count: lev1t::STATE_COUNT,
    vector_count: lev1t::VECTOR_COUNT,
    transitions: &lev1t::TRANSITIONS,
    increments: &lev1t::OFFSET_INCREMENTS,
    accept: &lev1t::ACCEPT,
};

static LEV2T: ParametricTables = ParametricTables {
    max_distance: 2,
    state_count: lev2t::STATE_COUNT,
    vector_count: lev2t::VECTOR_COUNT,
    transitions: &lev2t::TRANSITIONS,
    increments: &lev2t::OFFSET_INCREMENTS,
    accept: &lev2t::ACCEPT,
};

impl ParametricTables {
    /// Tables for the given maximum edit distance, if supported.
    pub fn for_distance(max_distance: u8) -> Option<&'static ParametricTables> {
        match max_distance {
            1 => Some(&LEV1T),
            2 => Some(&LEV2T),
            _ => None,
        }
    }

    /// The bound `n` these tables were built for.
    #[inline]
    pub fn max_distance(&self) -> u8 {
        self.max_distance
    }

    /// Number of parametric states (6 for `n = 1`, 42 for `n = 2`).
    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Number of characteristic vectors, `2^(2n+1)`.
    #[inline]
    pub fn vector_count(&self) -> usize {
        self.vector_count
    }

    /// Width of a characteristic vector in bits, `2n+1`.
    #[inline]
    pub fn vector_width(&self) -> usize {
        2 * self.max_distance as usize + 1
    }

    /// Look up the transition for `state` on `vector` in the given class.
    ///
    /// Returns the next state and the offset increment, or `None` when the
    /// table holds no transition. Arguments must already be in range.
    #[inline]
    pub fn transition(&self, class: usize, vector: usize, state: usize) -> Option<(u8, u8)> {
        debug_assert!(class < DISTANCE_CLASSES);
        debug_assert!(vector < self.vector_count);
        debug_assert!(state < self.state_count);

        let index = (class * self.vector_count + vector) * self.state_count + state;
        match self.transitions[index] {
            NO_TRANSITION => None,
            next => Some((next as u8, self.increments[index])),
        }
    }

    /// Accept predicate for `state` with `distance_to_end` letters of the
    /// word left unconsumed.
    ///
    /// Distances beyond `2n` are never accepting.
    #[inline]
    pub fn is_accept(&self, state: usize, distance_to_end: usize) -> bool {
        let width = self.vector_width();
        if state >= self.state_count || distance_to_end >= width {
            return false;
        }
        self.accept[state * width + distance_to_end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_families() {
        let one = ParametricTables::for_distance(1).unwrap();
        assert_eq!(one.state_count(), 6);
        assert_eq!(one.vector_count(), 8);
        assert_eq!(one.vector_width(), 3);

        let two = ParametricTables::for_distance(2).unwrap();
        assert_eq!(two.state_count(), 42);
        assert_eq!(two.vector_count(), 32);
        assert_eq!(two.vector_width(), 5);

        assert!(ParametricTables::for_distance(0).is_none());
        assert!(ParametricTables::for_distance(3).is_none());
    }

    #[test]
    fn test_flattened_lengths() {
        for n in 1..=2 {
            let tables = ParametricTables::for_distance(n).unwrap();
            let cells = DISTANCE_CLASSES * tables.vector_count() * tables.state_count();
            assert_eq!(tables.transitions.len(), cells);
            assert_eq!(tables.increments.len(), cells);
            assert_eq!(
                tables.accept.len(),
                tables.state_count() * tables.vector_width()
            );
        }
    }

    #[test]
    fn test_distance_class_clamps() {
        assert_eq!(distance_class(0), 0);
        assert_eq!(distance_class(4), 4);
        assert_eq!(distance_class(5), 5);
        assert_eq!(distance_class(100), 5);
    }

    #[test]
    fn test_initial_state_acceptance() {
        // The fresh automaton accepts iff the whole word can be deleted.
        for n in 1..=2u8 {
            let tables = ParametricTables::for_distance(n).unwrap();
            for d in 0..tables.vector_width() {
                assert_eq!(tables.is_accept(0, d), d <= n as usize, "n={n} d={d}");
            }
        }
    }

    #[test]
    fn test_exact_match_keeps_initial_state() {
        // Matching the letter at the offset advances by one and stays in state 0.
        for n in 1..=2u8 {
            let tables = ParametricTables::for_distance(n).unwrap();
            let leading_bit = 1 << (tables.vector_width() - 1);
            for class in 1..DISTANCE_CLASSES {
                assert_eq!(tables.transition(class, leading_bit, 0), Some((0, 1)));
            }
        }
    }

    #[test]
    fn test_no_transition_out_of_bounds_state_not_accepting() {
        let tables = ParametricTables::for_distance(1).unwrap();
        assert!(!tables.is_accept(6, 0));
        assert!(!tables.is_accept(0, 3));
    }
}
