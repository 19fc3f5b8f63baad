//! Reference edit distance.
//!
//! The parametric automata recognise the restricted Damerau-Levenshtein
//! distance, also called optimal string alignment: insertions, deletions,
//! substitutions and swaps of two adjacent letters each cost one, and a
//! swapped pair is never edited again. This module computes that distance
//! directly, for verification and for reporting.

use smallvec::SmallVec;

type Row = SmallVec<[usize; 32]>;

/// Restricted Damerau-Levenshtein distance between `source` and `target`.
///
/// # Example
///
/// ```rust
/// use fbtrie::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("atlas", "atlsa"), 1);
/// assert_eq!(transposition_distance("fulzy", "funny"), 2);
/// // "ca" -> "ac" -> "abc" would edit inside the swapped pair
/// assert_eq!(transposition_distance("ca", "abc"), 3);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source: SmallVec<[char; 32]> = source.chars().collect();
    let target: SmallVec<[char; 32]> = target.chars().collect();

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let width = target.len() + 1;
    let mut two_ago: Row = SmallVec::from_elem(0, width);
    let mut previous: Row = (0..width).collect();
    let mut current: Row = SmallVec::from_elem(0, width);

    for (i, &s) in source.iter().enumerate() {
        current[0] = i + 1;
        for (j, &t) in target.iter().enumerate() {
            let substitution = previous[j] + usize::from(s != t);
            let mut best = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);

            if i > 0 && j > 0 && s == target[j - 1] && source[i - 1] == t {
                best = best.min(two_ago[j - 1] + 1);
            }
            current[j + 1] = best;
        }

        std::mem::swap(&mut two_ago, &mut previous);
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}

/// Whether `source` and `target` are within `max_distance` edits.
///
/// Pairs whose lengths differ by more than `max_distance` are rejected
/// without running the full computation.
pub fn is_within(source: &str, target: &str, max_distance: usize) -> bool {
    let (a, b) = (source.chars().count(), target.chars().count());
    a.abs_diff(b) <= max_distance && transposition_distance(source, target) <= max_distance
}
