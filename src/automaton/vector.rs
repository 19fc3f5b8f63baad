//! Characteristic vectors for the parametric automaton.
//!
//! The characteristic vector of a letter at a position of the query word
//! records which of the next `2n+1` letters of the word equal that letter:
//!
//! ```text
//! word = "atlas", n = 2, letter = 'a'
//!
//! position 0:  a t l a s  ->  1 0 0 1 0  = 0b10010
//! position 1:  t l a s    ->  0 0 1 0 0  = 0b00100
//! position 4:  s          ->  0 0 0 0 0  = 0
//! ```
//!
//! The earliest position is the most significant bit. Positions at or past
//! the end of the word contribute zero bits, so a vector never depends on the
//! size of the alphabet.

/// Compute the characteristic vector of `letter` over `word[position..position + width]`.
///
/// Bit `width - 1 - k` is set iff `word[position + k] == letter`.
#[inline]
pub fn characteristic_vector(word: &[char], letter: char, position: usize, width: usize) -> u32 {
    window(word, position, width)
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == letter)
        .fold(0, |vector, (k, _)| vector | 1 << (width - 1 - k))
}

/// Check whether `letter` occurs anywhere in the vector window at `position`.
///
/// When this is false the characteristic vector is zero.
#[inline]
pub fn window_contains(word: &[char], letter: char, position: usize, width: usize) -> bool {
    window(word, position, width).contains(&letter)
}

/// The slice of `word` covered by a vector starting at `position`.
#[inline]
fn window(word: &[char], position: usize, width: usize) -> &[char] {
    let start = position.min(word.len());
    let end = position.saturating_add(width).min(word.len());
    &word[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_existing_letter() {
        let word = chars("atlas");
        assert_eq!(characteristic_vector(&word, 'a', 0, 5), 0b10010);
        assert_eq!(characteristic_vector(&word, 'a', 1, 5), 0b00100);
        assert_eq!(characteristic_vector(&word, 'a', 2, 5), 0b01000);
        assert_eq!(characteristic_vector(&word, 'a', 3, 5), 0b10000);
        assert_eq!(characteristic_vector(&word, 'a', 4, 5), 0);
        assert_eq!(characteristic_vector(&word, 'a', 5, 5), 0);
        assert_eq!(characteristic_vector(&word, 'a', 6, 5), 0);
    }

    #[test]
    fn test_missing_letter() {
        let word = chars("atlas");
        for position in 0..7 {
            assert_eq!(characteristic_vector(&word, 'x', position, 5), 0);
        }
    }

    #[test]
    fn test_narrow_window() {
        let word = chars("atlas");
        // n = 1: only three letters are visible
        assert_eq!(characteristic_vector(&word, 'a', 0, 3), 0b100);
        assert_eq!(characteristic_vector(&word, 'a', 1, 3), 0b001);
        assert_eq!(characteristic_vector(&word, 's', 2, 3), 0b001);
        assert_eq!(characteristic_vector(&word, 's', 3, 3), 0b010);
    }

    #[test]
    fn test_window_contains_matches_nonzero_vector() {
        let word = chars("banana");
        for position in 0..8 {
            for letter in ['a', 'b', 'n', 'z'] {
                assert_eq!(
                    window_contains(&word, letter, position, 5),
                    characteristic_vector(&word, letter, position, 5) != 0,
                    "letter={letter} position={position}"
                );
            }
        }
    }

    #[test]
    fn test_position_past_end() {
        let word = chars("ab");
        assert!(!window_contains(&word, 'a', 2, 3));
        assert!(!window_contains(&word, 'a', usize::MAX, 3));
        assert_eq!(characteristic_vector(&word, 'a', usize::MAX, 3), 0);
    }
}
