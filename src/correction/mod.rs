//! Bidirectional spelling correction over forward and backward tries.
//!
//! A [`SpellChecker`] keeps every lexicon word in a forward [`Trie`] and its
//! reversal in a backward one. A query is split in half; a correction within
//! `n` edits must leave one half exact, or (for `n = 2`) spend one edit on
//! each half, or hinge on a transposition straddling the split. Each case
//! anchors the search on an exact or near-exact half, which keeps the
//! automaton from wandering over most of the trie.
//!
//! # Example
//!
//! ```rust
//! use fbtrie::correction::SpellChecker;
//!
//! let checker: SpellChecker = ["fuzzy", "fully", "funny", "fast"].into_iter().collect();
//!
//! let one = checker.corrections("fulzy", 1).unwrap();
//! assert_eq!(one.into_iter().collect::<Vec<_>>(), ["fully", "fuzzy"]);
//!
//! let two = checker.corrections("fulzy", 2).unwrap();
//! assert!(two.contains("funny"));
//! assert!(!two.contains("fast"));
//! ```

pub mod search;
pub mod split;

use std::collections::BTreeSet;

use smallvec::SmallVec;
use tracing::debug;

use crate::automaton::ParametricAutomaton;
use crate::distance::transposition_distance;
use crate::error::{Error, Result};
use crate::trie::{Trie, TrieNode, Words};

pub use search::corrections_within;
pub use split::{transpose_at_split, Split};

type Letters = SmallVec<[char; 32]>;

/// Typos this short are searched directly from the forward root.
const MIN_SPLIT_LEN: usize = 3;

/// A correction together with its edit distance from the typo.
///
/// Orders by distance first, then by word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Edit distance from the typo.
    pub distance: usize,
    /// The lexicon word.
    pub term: String,
}

/// Lexicon with forward and backward tries, answering correction queries.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    forward: Trie,
    backward: Trie,
}

impl SpellChecker {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            forward: Trie::new(),
            backward: Trie::new(),
        }
    }

    /// Add `word` to the lexicon.
    ///
    /// Empty strings are skipped. Returns `true` if the word was new.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let reversed: String = word.chars().rev().collect();
        self.backward.insert(&reversed);
        self.forward.insert(word)
    }

    /// Whether `word` is in the lexicon.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.forward.contains_word(word)
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the lexicon is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// All words, in no particular order.
    pub fn words(&self) -> Words<'_> {
        self.forward.words()
    }

    /// Trie of the words as spelled.
    #[inline]
    pub fn forward(&self) -> &Trie {
        &self.forward
    }

    /// Trie of the reversed words.
    #[inline]
    pub fn backward(&self) -> &Trie {
        &self.backward
    }

    /// Every lexicon word within `max_distance` edits of `typo`.
    ///
    /// Edits are insertions, deletions, substitutions and transpositions of
    /// adjacent letters. An empty typo yields an empty set.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDistance`] unless `max_distance` is 1 or 2.
    pub fn corrections(&self, typo: &str, max_distance: u8) -> Result<BTreeSet<String>> {
        match max_distance {
            1 => self.corrections_1t(typo),
            2 => self.corrections_2t(typo),
            n => Err(Error::UnsupportedDistance(n)),
        }
    }

    /// Like [`corrections`](SpellChecker::corrections), with distances,
    /// closest first.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDistance`] unless `max_distance` is 1 or 2.
    pub fn ranked_corrections(&self, typo: &str, max_distance: u8) -> Result<Vec<Candidate>> {
        let mut ranked: Vec<Candidate> = self
            .corrections(typo, max_distance)?
            .into_iter()
            .map(|term| Candidate {
                distance: transposition_distance(typo, &term),
                term,
            })
            .collect();
        ranked.sort_unstable();
        Ok(ranked)
    }

    /// Lexicon words within one edit of `typo`.
    pub fn corrections_1t(&self, typo: &str) -> Result<BTreeSet<String>> {
        let typo: Letters = typo.chars().collect();
        if typo.len() < MIN_SPLIT_LEN {
            return self.unsplit(&typo, 1);
        }

        let split = Split::new(&typo);
        let mut found = BTreeSet::new();
        let right_edit = self.right_half_edited(&split, 1, &mut found)?;
        let left_edit = self.left_half_edited(&split, 1, &mut found)?;

        let mut transposed = 0;
        if let Some(swapped) = transpose_at_split(&typo) {
            let swapped: String = swapped.into_iter().collect();
            if self.forward.contains_word(&swapped) && found.insert(swapped) {
                transposed = 1;
            }
        }

        debug!(
            target: "fbtrie::correction",
            typo = %typo.iter().collect::<String>(),
            right_edit,
            left_edit,
            transposed,
            total = found.len(),
            "corrections within 1"
        );
        Ok(found)
    }

    /// Lexicon words within two edits of `typo`.
    pub fn corrections_2t(&self, typo: &str) -> Result<BTreeSet<String>> {
        let typo: Letters = typo.chars().collect();
        if typo.len() < MIN_SPLIT_LEN {
            return self.unsplit(&typo, 2);
        }

        let split = Split::new(&typo);
        let mut found = BTreeSet::new();
        let right_edit = self.right_half_edited(&split, 2, &mut found)?;
        let left_edit = self.left_half_edited(&split, 2, &mut found)?;

        // One edit on each side of the split
        let mut both_edited = 0;
        let left = &typo[..split.left_len];
        for anchor in corrections_within(left, self.forward.root(), 1, false)? {
            for node in corrections_within(&split.right, anchor, 1, true)? {
                both_edited += usize::from(found.insert(node.key().to_owned()));
            }
        }

        // A transposition across the split plus one more edit in either half.
        // An edit landing between the transposed letters is not a valid
        // alignment, so candidates are confirmed against the whole typo.
        let mut transposed = 0;
        if let Some(swapped) = transpose_at_split(&typo) {
            let swapped_split = Split::new(&swapped);
            let mut patch = BTreeSet::new();
            self.right_half_edited(&swapped_split, 1, &mut patch)?;
            self.left_half_edited(&swapped_split, 1, &mut patch)?;

            let mut whole = ParametricAutomaton::from_chars(&typo, 2)?;
            for word in patch {
                if !found.contains(&word) && whole.accepts_word(&word) {
                    found.insert(word);
                    transposed += 1;
                }
            }
        }

        debug!(
            target: "fbtrie::correction",
            typo = %typo.iter().collect::<String>(),
            right_edit,
            left_edit,
            both_edited,
            transposed,
            total = found.len(),
            "corrections within 2"
        );
        Ok(found)
    }

    /// Words whose left half matches exactly; edits fall on the right.
    fn right_half_edited(
        &self,
        split: &Split,
        max_distance: u8,
        found: &mut BTreeSet<String>,
    ) -> Result<usize> {
        let Some(anchor) = self.forward.node_at(&split.left) else {
            return Ok(0);
        };
        let mut added = 0;
        for node in corrections_within(&split.right, anchor, max_distance, true)? {
            added += usize::from(found.insert(node.key().to_owned()));
        }
        Ok(added)
    }

    /// Words whose right half matches exactly; edits fall on the left.
    fn left_half_edited(
        &self,
        split: &Split,
        max_distance: u8,
        found: &mut BTreeSet<String>,
    ) -> Result<usize> {
        let Some(anchor) = self.backward.node_at(&split.reversed_right) else {
            return Ok(0);
        };
        let mut added = 0;
        for node in corrections_within(&split.reversed_left, anchor, max_distance, true)? {
            added += usize::from(found.insert(unreverse(node)));
        }
        Ok(added)
    }

    /// Plain forward search for typos too short to split.
    fn unsplit(&self, typo: &[char], max_distance: u8) -> Result<BTreeSet<String>> {
        let found: BTreeSet<String> =
            corrections_within(typo, self.forward.root(), max_distance, true)?
                .into_iter()
                .map(|node| node.key().to_owned())
                .collect();
        debug!(
            target: "fbtrie::correction",
            typo = %typo.iter().collect::<String>(),
            max_distance,
            total = found.len(),
            "unsplit corrections"
        );
        Ok(found)
    }
}

/// Spell a backward trie node the right way round.
fn unreverse(node: &TrieNode) -> String {
    node.key().chars().rev().collect()
}

impl<S: AsRef<str>> Extend<S> for SpellChecker {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SpellChecker {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut checker = SpellChecker::new();
        checker.extend(words);
        checker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SpellChecker {
        ["fuzzy", "fully", "funny", "fast"].into_iter().collect()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fulzy() {
        let checker = checker();
        assert_eq!(
            checker.corrections("fulzy", 1).unwrap(),
            set(&["fuzzy", "fully"])
        );
        assert_eq!(
            checker.corrections("fulzy", 2).unwrap(),
            set(&["fuzzy", "fully", "funny"])
        );
    }

    #[test]
    fn test_boundary_transposition() {
        let checker = checker();
        assert_eq!(checker.corrections_1t("fuzzy").unwrap(), set(&["fuzzy"]));
        assert_eq!(checker.corrections_1t("fzuzy").unwrap(), set(&["fuzzy"]));
        assert_eq!(checker.corrections_1t("afst").unwrap(), set(&["fast"]));
        assert_eq!(checker.corrections_1t("fsat").unwrap(), set(&["fast"]));
    }

    #[test]
    fn test_transposition_plus_edit() {
        let checker = checker();
        assert_eq!(checker.corrections_2t("fsatt").unwrap(), set(&["fast"]));
        assert!(checker.corrections_1t("fsatt").unwrap().is_empty());
    }

    #[test]
    fn test_short_typos() {
        let checker: SpellChecker = ["a", "ab", "abc", "b"].into_iter().collect();
        assert_eq!(checker.corrections("a", 1).unwrap(), set(&["a", "ab", "b"]));
        assert_eq!(checker.corrections("ba", 1).unwrap(), set(&["a", "ab", "b"]));
    }

    #[test]
    fn test_ranked_corrections() {
        let ranked = checker().ranked_corrections("fulzy", 2).unwrap();
        let ranked: Vec<(usize, &str)> = ranked
            .iter()
            .map(|c| (c.distance, c.term.as_str()))
            .collect();
        assert_eq!(ranked, [(1, "fully"), (1, "fuzzy"), (2, "funny")]);
    }

    #[test]
    fn test_empty_typo() {
        assert!(checker().corrections("", 1).unwrap().is_empty());
        assert!(checker().corrections("", 2).unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_distance() {
        assert_eq!(
            checker().corrections("fulzy", 3).unwrap_err(),
            Error::UnsupportedDistance(3)
        );
        assert_eq!(
            checker().corrections("", 0).unwrap_err(),
            Error::UnsupportedDistance(0)
        );
    }

    #[test]
    fn test_add_word() {
        let mut checker = SpellChecker::new();
        assert!(checker.add_word("atlas"));
        assert!(!checker.add_word("atlas"));
        assert!(!checker.add_word(""));
        assert_eq!(checker.len(), 1);
        assert!(checker.contains("atlas"));
        assert!(checker.backward().contains_word("salta"));
        assert!(!checker.forward().contains_word("salta"));
    }

    #[test]
    fn test_deleted_half() {
        // The whole right half of "abcx" is dropped or replaced
        let checker: SpellChecker = ["ab", "abcxyzw"].into_iter().collect();
        assert_eq!(checker.corrections_2t("abcx").unwrap(), set(&["ab"]));
    }
}
