//! Parametric tables checked against brute-force edit distance.
//!
//! For every query word and candidate over a small alphabet, the automaton
//! must accept exactly when the restricted Damerau-Levenshtein distance is
//! within the bound. Short words are enumerated exhaustively; longer ones,
//! which exercise the far-from-end tables, are sampled.

use fbtrie::automaton::{AutomatonState, ParametricAutomaton};
use fbtrie::distance::transposition_distance;
use rand::prelude::*;

const ALPHABET: [char; 3] = ['a', 'b', 'c'];

/// All strings over `ALPHABET` with length in `0..=max_len`.
fn all_strings(max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
        for prefix in &frontier {
            for c in ALPHABET {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

fn assert_conforms(word: &str, max_distance: u8, candidates: &[String]) {
    let mut automaton = ParametricAutomaton::new(word, max_distance).unwrap();
    for candidate in candidates {
        let expected = transposition_distance(word, candidate) <= max_distance as usize;
        assert_eq!(
            automaton.accepts_word(candidate),
            expected,
            "word={word:?} n={max_distance} candidate={candidate:?}"
        );
    }
}

#[test]
fn test_exhaustive_distance_1() {
    let candidates = all_strings(7);
    for word in all_strings(5).iter().filter(|w| !w.is_empty()) {
        let limit = word.len() + 2;
        let nearby: Vec<String> = candidates
            .iter()
            .filter(|c| c.len() <= limit)
            .cloned()
            .collect();
        assert_conforms(word, 1, &nearby);
    }
}

#[test]
fn test_exhaustive_distance_2() {
    let candidates = all_strings(7);
    for word in all_strings(4).iter().filter(|w| !w.is_empty()) {
        let limit = word.len() + 3;
        let nearby: Vec<String> = candidates
            .iter()
            .filter(|c| c.len() <= limit)
            .cloned()
            .collect();
        assert_conforms(word, 2, &nearby);
    }
}

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .filter_map(|_| ALPHABET.choose(rng).copied())
        .collect()
}

/// Apply up to `edits` random insertions, deletions, substitutions or swaps.
fn mutate(rng: &mut StdRng, word: &str, edits: usize) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    for _ in 0..rng.gen_range(0..=edits) {
        let Some(&letter) = ALPHABET.choose(rng) else {
            continue;
        };
        match rng.gen_range(0..4) {
            0 => {
                let i = rng.gen_range(0..=letters.len());
                letters.insert(i, letter);
            }
            1 if !letters.is_empty() => {
                let i = rng.gen_range(0..letters.len());
                letters.remove(i);
            }
            2 if !letters.is_empty() => {
                let i = rng.gen_range(0..letters.len());
                letters[i] = letter;
            }
            3 if letters.len() > 1 => {
                let i = rng.gen_range(1..letters.len());
                letters.swap(i - 1, i);
            }
            _ => {}
        }
    }
    letters.into_iter().collect()
}

#[test]
fn test_sampled_long_words() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=2u8 {
        for _ in 0..300 {
            let len = rng.gen_range(6..=14);
            let word = random_word(&mut rng, len);
            let candidates: Vec<String> = (0..40)
                .map(|_| mutate(&mut rng, &word, n as usize + 2))
                .collect();
            assert_conforms(&word, n, &candidates);
        }
    }
}

#[test]
fn test_zero_vector_equals_absent_letter() {
    // A letter missing from the window yields the zero vector, so its
    // transition is the one taken for vector 0.
    for n in 1..=2u8 {
        let automaton = ParametricAutomaton::new("abcabc", n).unwrap();
        let mut frontier = vec![AutomatonState::INITIAL];
        let mut seen = std::collections::HashSet::new();
        while let Some(state) = frontier.pop() {
            if !seen.insert(state) {
                continue;
            }
            let absent = automaton.transition(state, 0).unwrap();
            for letter in ['a', 'b', 'c', 'z'] {
                let vector = automaton.characteristic_vector(letter, state.offset);
                let next = automaton.transition(state, vector).unwrap();
                if !automaton.window_contains(letter, state.offset) {
                    assert_eq!(vector, 0);
                    assert_eq!(next, absent);
                }
                frontier.extend(next);
            }
        }
        assert!(seen.len() > 1);
    }
}
