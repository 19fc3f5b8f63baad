//! Splitting a typo into halves for bidirectional search.

use smallvec::SmallVec;

type Letters = SmallVec<[char; 32]>;

/// A typo cut into a left half of `len - len / 2` letters and the remaining
/// right half, with the lookup keys each trie direction needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Number of letters in the left half.
    pub left_len: usize,
    /// Left half, as a forward trie key.
    pub left: String,
    /// Right half, searched below the forward node for `left`.
    pub right: Letters,
    /// Left half reversed, searched below the backward node for `right`.
    pub reversed_left: Letters,
    /// Right half reversed, as a backward trie key.
    pub reversed_right: String,
}

impl Split {
    /// Split `typo` at its midpoint, rounding the left half up.
    pub fn new(typo: &[char]) -> Self {
        let left_len = typo.len() - typo.len() / 2;
        let (left, right) = typo.split_at(left_len);
        Self {
            left_len,
            left: left.iter().collect(),
            right: SmallVec::from_slice(right),
            reversed_left: left.iter().rev().copied().collect(),
            reversed_right: right.iter().rev().collect(),
        }
    }
}

/// `typo` with the two letters on either side of the split point swapped.
///
/// Returns `None` when either half would be empty.
pub fn transpose_at_split(typo: &[char]) -> Option<Letters> {
    let left_len = typo.len() - typo.len() / 2;
    if left_len == 0 || left_len >= typo.len() {
        return None;
    }
    let mut swapped = Letters::from_slice(typo);
    swapped.swap(left_len - 1, left_len);
    Some(swapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_split_odd_length() {
        let split = Split::new(&chars("fulzy"));
        assert_eq!(split.left_len, 3);
        assert_eq!(split.left, "ful");
        assert_eq!(split.right.as_slice(), &['z', 'y']);
        assert_eq!(split.reversed_left.as_slice(), &['l', 'u', 'f']);
        assert_eq!(split.reversed_right, "yz");
    }

    #[test]
    fn test_split_even_length() {
        let split = Split::new(&chars("atlas!"));
        assert_eq!(split.left_len, 3);
        assert_eq!(split.left, "atl");
        assert_eq!(split.reversed_right, "!sa");
    }

    #[test]
    fn test_transpose_at_split() {
        let swapped = transpose_at_split(&chars("fulzy")).unwrap();
        assert_eq!(swapped.iter().collect::<String>(), "fuzly");

        let swapped = transpose_at_split(&chars("abcd")).unwrap();
        assert_eq!(swapped.iter().collect::<String>(), "acbd");
    }

    #[test]
    fn test_transpose_needs_two_halves() {
        assert!(transpose_at_split(&chars("a")).is_none());
        assert!(transpose_at_split(&[]).is_none());
        assert_eq!(
            transpose_at_split(&chars("ab")).unwrap().as_slice(),
            &['b', 'a']
        );
    }
}
