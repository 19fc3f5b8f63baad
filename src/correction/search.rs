//! Automaton-guided depth-first search over a trie.

use tracing::trace;

use crate::automaton::{AutomatonState, ParametricAutomaton, ParametricTables};
use crate::error::{Error, Result};
use crate::trie::TrieNode;

/// One pending node together with the automaton configuration reached on it.
#[derive(Debug, Clone, Copy)]
struct SearchFrame<'t> {
    node: &'t TrieNode,
    state: AutomatonState,
}

/// Collect every node below `start` whose path from `start` is within
/// `max_distance` edits of `typo`.
///
/// `start` itself is reported when `typo` can be deleted entirely, that is
/// when `typo` has at most `max_distance` letters. With `words_only` set, only
/// nodes that end a word are reported; otherwise any accepting prefix node is,
/// which lets callers continue a search from an approximate prefix.
///
/// A single traversal never reports a node twice. An empty `typo` matches
/// nothing.
///
/// # Errors
///
/// [`Error::UnsupportedDistance`] unless `max_distance` is 1 or 2.
pub fn corrections_within<'t>(
    typo: &[char],
    start: &'t TrieNode,
    max_distance: u8,
    words_only: bool,
) -> Result<Vec<&'t TrieNode>> {
    if ParametricTables::for_distance(max_distance).is_none() {
        return Err(Error::UnsupportedDistance(max_distance));
    }
    if typo.is_empty() {
        return Ok(Vec::new());
    }

    let mut automaton = ParametricAutomaton::from_chars(typo, max_distance)?;
    let reportable = |node: &TrieNode| node.is_word() || !words_only;

    let mut found = Vec::new();
    if reportable(start) && automaton.is_accept_state(AutomatonState::INITIAL) {
        found.push(start);
    }

    let mut stack = vec![SearchFrame {
        node: start,
        state: AutomatonState::INITIAL,
    }];

    while let Some(frame) = stack.pop() {
        automaton.load(frame.state)?;
        let offset = frame.state.offset;
        // Letters absent from the window all share the zero-vector successor
        let absent = automaton.peek_next_state(0)?;

        trace!(
            target: "fbtrie::correction::search",
            key = frame.node.key(),
            state = %frame.state,
            children = frame.node.child_count(),
            "expand"
        );

        for (letter, child) in frame.node.children() {
            let next = if automaton.window_contains(letter, offset) {
                let vector = automaton.characteristic_vector(letter, offset);
                automaton.peek_next_state(vector)?
            } else {
                absent
            };

            let Some(next) = next else {
                continue;
            };

            if child.has_children() {
                stack.push(SearchFrame {
                    node: child,
                    state: next,
                });
            }
            if reportable(child) && automaton.is_accept_state(next) {
                found.push(child);
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;
    use std::collections::BTreeSet;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn keys(nodes: &[&TrieNode]) -> BTreeSet<String> {
        nodes.iter().map(|n| n.key().to_owned()).collect()
    }

    fn lexicon() -> Trie {
        ["fuzzy", "fully", "funny", "fast", "fun"].into_iter().collect()
    }

    #[test]
    fn test_search_from_root() {
        let trie = lexicon();
        let found = corrections_within(&chars("fulzy"), trie.root(), 1, true).unwrap();
        assert_eq!(
            keys(&found),
            BTreeSet::from(["fuzzy".to_owned(), "fully".to_owned()])
        );

        let found = corrections_within(&chars("fulzy"), trie.root(), 2, true).unwrap();
        assert_eq!(
            keys(&found),
            BTreeSet::from(["fuzzy".to_owned(), "fully".to_owned(), "funny".to_owned()])
        );
    }

    #[test]
    fn test_transposition_costs_one() {
        let trie = lexicon();
        let found = corrections_within(&chars("fuzyz"), trie.root(), 1, true).unwrap();
        assert_eq!(keys(&found), BTreeSet::from(["fuzzy".to_owned()]));
    }

    #[test]
    fn test_search_from_inner_node() {
        let trie = lexicon();
        let fu = trie.node_at("fu").unwrap();
        let found = corrections_within(&chars("lzy"), fu, 1, true).unwrap();
        assert_eq!(
            keys(&found),
            BTreeSet::from(["fuzzy".to_owned(), "fully".to_owned()])
        );
    }

    #[test]
    fn test_prefix_nodes_reported_without_words_only() {
        let trie = lexicon();
        let found = corrections_within(&chars("fz"), trie.root(), 1, false).unwrap();
        let expected: BTreeSet<String> = ["f", "fa", "fu", "fuz"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(keys(&found), expected);
    }

    #[test]
    fn test_start_node_reported_when_typo_deletable() {
        let trie = lexicon();
        let fun = trie.node_at("fun").unwrap();
        let found = corrections_within(&chars("x"), fun, 1, true).unwrap();
        assert!(keys(&found).contains("fun"));

        let found = corrections_within(&chars("xy"), fun, 1, true).unwrap();
        assert_eq!(keys(&found), BTreeSet::from(["funny".to_owned()]));
    }

    #[test]
    fn test_no_duplicates() {
        let trie = lexicon();
        let found = corrections_within(&chars("fun"), trie.root(), 2, false).unwrap();
        assert_eq!(found.len(), keys(&found).len());
    }

    #[test]
    fn test_empty_typo_matches_nothing() {
        let trie = lexicon();
        assert!(corrections_within(&[], trie.root(), 1, true)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unsupported_distance() {
        let trie = lexicon();
        assert_eq!(
            corrections_within(&chars("fun"), trie.root(), 3, true).unwrap_err(),
            Error::UnsupportedDistance(3)
        );
        assert_eq!(
            corrections_within(&[], trie.root(), 0, true).unwrap_err(),
            Error::UnsupportedDistance(0)
        );
    }
}
