//! Whole-word acceptance of the parametric automata.
//!
//! Each case lists candidates for a query word and whether they lie within
//! the edit bound, counting adjacent transpositions as one edit.

use fbtrie::automaton::ParametricAutomaton;
use fbtrie::distance::transposition_distance;

fn check(word: &str, max_distance: u8, cases: &[(&str, bool)]) {
    let mut automaton = ParametricAutomaton::new(word, max_distance).unwrap();
    for &(candidate, expected) in cases {
        assert_eq!(
            automaton.accepts_word(candidate),
            expected,
            "word={word:?} n={max_distance} candidate={candidate:?}"
        );
    }
}

/// Every string one insertion, deletion, substitution or adjacent swap away
/// from `word`, over the word's own letters plus `x`.
fn single_edit_neighbourhood(word: &str) -> Vec<String> {
    let letters: Vec<char> = word.chars().collect();
    let mut alphabet: Vec<char> = letters.clone();
    alphabet.push('x');
    alphabet.sort_unstable();
    alphabet.dedup();

    let mut out = Vec::new();
    for i in 0..=letters.len() {
        for &c in &alphabet {
            let mut inserted = letters.clone();
            inserted.insert(i, c);
            out.push(inserted.into_iter().collect());
        }
    }
    for i in 0..letters.len() {
        let mut deleted = letters.clone();
        deleted.remove(i);
        out.push(deleted.into_iter().collect());

        for &c in &alphabet {
            let mut substituted = letters.clone();
            substituted[i] = c;
            out.push(substituted.into_iter().collect());
        }
    }
    for i in 1..letters.len() {
        let mut swapped = letters.clone();
        swapped.swap(i - 1, i);
        out.push(swapped.into_iter().collect());
    }
    out
}

#[test]
fn test_single_letter_word_distance_1() {
    check(
        "a",
        1,
        &[
            ("a", true),
            ("", true),
            ("b", true),
            ("ab", true),
            ("ba", true),
            ("abc", false),
            ("abcd", false),
        ],
    );
}

#[test]
fn test_abcde_distance_1() {
    check(
        "abcde",
        1,
        &[
            ("abcde", true),
            ("aabcde", true),
            ("aaabcde", false),
            ("abced", true),
            ("acbed", false),
            ("abde", true),
            ("abd", false),
            ("xbcde", true),
            ("xbcxe", false),
            ("bacdx", false),
            ("bade", false),
            ("xbdce", false),
        ],
    );
}

#[test]
fn test_single_edit_neighbourhoods_distance_1() {
    for word in ["fuzzy", "atlas", "ababa"] {
        let mut automaton = ParametricAutomaton::new(word, 1).unwrap();
        for candidate in single_edit_neighbourhood(word) {
            assert!(
                automaton.accepts_word(&candidate),
                "{word:?} should accept {candidate:?}"
            );
        }
        assert!(!automaton.accepts_word("salomon"));
    }
}

#[test]
fn test_atlas_distance_2() {
    check(
        "atlas",
        2,
        &[
            ("atlas", true),
            ("xatlxs", true),
            ("otter", false),
            ("", false),
            ("aaatlas", true),
            ("aaaatlas", false),
            ("last", false),
            ("latas", true),
            ("taals", true),
            ("taalss", false),
            ("taasl", false),
            ("salomon", false),
        ],
    );
}

#[test]
fn test_otter_distance_2() {
    check(
        "otter",
        2,
        &[
            ("xotter", true),
            ("xyotter", true),
            ("xyzotter", false),
            ("oxtter", true),
            ("oxtyter", true),
            ("oxtyterz", false),
            ("", false),
            ("toter", true),
            ("toetr", true),
            ("toert", false),
            ("oter", true),
            ("ter", true),
            ("er", false),
            ("tre", false),
        ],
    );
}

#[test]
fn test_abcde_distance_2() {
    check(
        "abcde",
        2,
        &[
            ("aabcde", true),
            ("aaabcde", true),
            ("aaaabcde", false),
            ("abced", true),
            ("acbed", true),
            ("aacbed", false),
            ("abde", true),
            ("abd", true),
            ("ad", false),
            ("bd", false),
            ("xbcde", true),
            ("xbcxe", true),
            ("xxcdx", false),
            ("bacdx", true),
            ("bade", true),
            ("xbdce", true),
            ("xbdxe", false),
            ("xbdcx", false),
        ],
    );
}

#[test]
fn test_single_letter_word_distance_2() {
    check(
        "a",
        2,
        &[
            ("a", true),
            ("", true),
            ("b", true),
            ("ab", true),
            ("ba", true),
            ("abc", true),
            ("bac", true),
            ("bca", true),
            ("abcd", false),
        ],
    );
}

#[test]
fn test_accepts_over_word_list() {
    let mut automaton = ParametricAutomaton::new("fulzy", 2).unwrap();
    let accepted = ["fuzzy", "fully", "funny", "fast"]
        .into_iter()
        .filter(|w| automaton.accepts_word(w))
        .count();
    assert_eq!(accepted, 3);
}

#[test]
fn test_acceptance_agrees_with_distance() {
    let words = ["otter", "atlas", "abcde", "ababa", "a", "ab"];
    for n in 1..=2u8 {
        for word in words {
            let mut automaton = ParametricAutomaton::new(word, n).unwrap();
            let neighbours = single_edit_neighbourhood(word);
            let candidates = words
                .iter()
                .copied()
                .chain(neighbours.iter().map(String::as_str));
            for candidate in candidates {
                assert_eq!(
                    automaton.accepts_word(candidate),
                    transposition_distance(word, candidate) <= n as usize,
                    "word={word:?} n={n} candidate={candidate:?}"
                );
            }
        }
    }
}

#[test]
fn test_characteristic_vectors() {
    let automaton = ParametricAutomaton::new("atlas", 2).unwrap();
    let vectors: Vec<u32> = (0..7)
        .map(|position| automaton.characteristic_vector('a', position))
        .collect();
    assert_eq!(vectors, [18, 4, 8, 16, 0, 0, 0]);
}
