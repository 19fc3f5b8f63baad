//! Property-based cross-validation of corrections against a linear scan.
//!
//! Whatever the lexicon and typo, the bidirectional trie search must return
//! exactly the words a linear scan with the reference distance finds.

use fbtrie::distance::{is_within, transposition_distance};
use fbtrie::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Words over a tiny alphabet, so that near misses are common.
fn dense_word_strategy() -> impl Strategy<Value = String> {
    "[abc]{0,8}"
}

fn ascii_word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

fn linear_scan(words: &[String], typo: &str, max_distance: u8) -> BTreeSet<String> {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .filter(|w| is_within(typo, w, max_distance as usize))
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_dense_corrections_match_linear_scan(
        words in prop::collection::vec(dense_word_strategy(), 1..=40),
        typo in dense_word_strategy(),
        max_distance in 1u8..=2,
    ) {
        let checker: SpellChecker = words.iter().collect();
        let found = checker.corrections(&typo, max_distance).unwrap();
        prop_assert_eq!(found, linear_scan(&words, &typo, max_distance));
    }

    #[test]
    fn prop_ascii_corrections_match_linear_scan(
        words in prop::collection::vec(ascii_word_strategy(), 1..=60),
        typo in ascii_word_strategy(),
        max_distance in 1u8..=2,
    ) {
        let checker: SpellChecker = words.iter().collect();
        let found = checker.corrections(&typo, max_distance).unwrap();
        prop_assert_eq!(found, linear_scan(&words, &typo, max_distance));
    }

    #[test]
    fn prop_automaton_matches_distance(
        word in "[abc]{1,10}",
        candidate in dense_word_strategy(),
        max_distance in 1u8..=2,
    ) {
        let mut automaton = ParametricAutomaton::new(&word, max_distance).unwrap();
        prop_assert_eq!(
            automaton.accepts_word(&candidate),
            transposition_distance(&word, &candidate) <= max_distance as usize
        );
    }

    #[test]
    fn prop_lexicon_word_always_corrects_to_itself(
        words in prop::collection::vec("[a-z]{1,10}", 1..=20),
        pick in any::<prop::sample::Index>(),
        max_distance in 1u8..=2,
    ) {
        let checker: SpellChecker = words.iter().collect();
        let word = pick.get(&words);
        prop_assert!(checker.corrections(word, max_distance).unwrap().contains(word));
    }

    #[test]
    fn prop_insertion_order_irrelevant(
        words in prop::collection::vec(dense_word_strategy(), 1..=30),
        typo in dense_word_strategy(),
    ) {
        let forward: SpellChecker = words.iter().collect();
        let backward: SpellChecker = words.iter().rev().collect();
        prop_assert_eq!(
            forward.corrections(&typo, 2).unwrap(),
            backward.corrections(&typo, 2).unwrap()
        );
    }
}
