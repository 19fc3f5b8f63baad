//! Snapshot of a parametric automaton.

use std::fmt;

/// A live configuration of a parametric automaton: the parametric state
/// number and the offset into the query word.
///
/// The dead configuration is not representable here; APIs that can reach it
/// use `Option<AutomatonState>` with `None` meaning dead. Dead is absorbing.
///
/// `AutomatonState` is `Copy` so that search frames can carry their own
/// snapshot and reload it into a shared automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutomatonState {
    /// Parametric state number, `0..state_count`.
    pub state: u8,
    /// Number of query word letters the automaton has moved past, `0..=W`.
    pub offset: usize,
}

impl AutomatonState {
    /// The configuration every automaton starts in.
    pub const INITIAL: AutomatonState = AutomatonState::new(0, 0);

    /// Create a new snapshot.
    #[inline]
    pub const fn new(state: u8, offset: usize) -> Self {
        Self { state, offset }
    }
}

impl Default for AutomatonState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for AutomatonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.state, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(AutomatonState::default(), AutomatonState::new(0, 0));
        assert_eq!(AutomatonState::INITIAL.to_string(), "0@0");
    }

    #[test]
    fn test_ordering() {
        let a = AutomatonState::new(1, 3);
        let b = AutomatonState::new(1, 4);
        let c = AutomatonState::new(2, 0);
        assert!(a < b);
        assert!(b < c);
    }
}
