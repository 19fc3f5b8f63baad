//! Prefix tree holding a lexicon.
//!
//! Each node owns its children, keyed by the next character, and stores the
//! full prefix spelled by the path from the root. Correction searches return
//! nodes, so carrying the key avoids rebuilding strings while walking.
//!
//! # Example
//!
//! ```rust
//! use fbtrie::trie::Trie;
//!
//! let trie: Trie = ["fuzzy", "fully", "funny"].into_iter().collect();
//! assert!(trie.contains_word("fully"));
//! assert!(trie.contains_prefix("fu"));
//! assert!(!trie.contains_word("fu"));
//! assert_eq!(trie.node_at("ful").map(|n| n.key()), Some("ful"));
//! ```

use rustc_hash::FxHashMap;
use tracing::trace;

/// A node of a [`Trie`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    key: String,
    children: FxHashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    fn new(key: String) -> Self {
        Self {
            key,
            children: FxHashMap::default(),
            is_word: false,
        }
    }

    /// The prefix spelled from the root to this node.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this node ends a lexicon entry.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Child reached by `letter`, if any.
    #[inline]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// All children with their edge labels, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(&letter, node)| (letter, node))
    }

    /// Whether this node has any children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Follow every character of `path` from this node.
    ///
    /// An empty path yields this node.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, letter| node.child(letter))
    }

    /// Like [`descend`](TrieNode::descend), but only yields word nodes.
    pub fn descend_to_word(&self, word: &str) -> Option<&TrieNode> {
        self.descend(word).filter(|node| node.is_word)
    }
}

/// Prefix tree over a set of words.
///
/// Built once, then read concurrently: all query methods take `&self`.
/// Callers that mutate a shared trie must serialize inserts against reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    len: usize,
    node_count: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(String::new()),
            len: 0,
            node_count: 1,
        }
    }

    /// Insert `word`, creating intermediate nodes as needed.
    ///
    /// Returns `true` if the word was not present before. Inserting the same
    /// word again changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut created = 0;
        let mut node = &mut self.root;
        for (start, letter) in word.char_indices() {
            let end = start + letter.len_utf8();
            node = node.children.entry(letter).or_insert_with(|| {
                created += 1;
                TrieNode::new(word[..end].to_owned())
            });
        }

        let added = !node.is_word;
        node.is_word = true;
        self.node_count += created;
        if added {
            self.len += 1;
        }
        trace!(target: "fbtrie::trie", word, added, created, "insert");
        added
    }

    /// The root node (empty key).
    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node reached by following `prefix` from the root, if every step exists.
    #[inline]
    pub fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        self.root.descend(prefix)
    }

    /// Node for `word`, only if it is a complete lexicon entry.
    #[inline]
    pub fn word_at(&self, word: &str) -> Option<&TrieNode> {
        self.root.descend_to_word(word)
    }

    /// Whether some word starts with `prefix`.
    #[inline]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Whether `word` is a complete lexicon entry.
    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_at(word).is_some()
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All words, depth first, in no particular order.
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![&self.root],
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

/// Iterator over the words of a [`Trie`].
pub struct Words<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if node.is_word {
                return Some(&node.key);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.root().key(), "");
        assert!(!trie.root().is_word());
        assert_eq!(trie.words().count(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Trie::default(), Trie::new());
    }

    #[test]
    fn test_keys_follow_paths() {
        let trie: Trie = ["atlas", "atom"].into_iter().collect();
        let node = trie.node_at("ato").unwrap();
        assert_eq!(node.key(), "ato");
        assert_eq!(node.child('m').unwrap().key(), "atom");
        assert_eq!(trie.node_at("at").unwrap().child_count(), 2);
        assert_eq!(trie.node_count(), 1 + 5 + 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("fuzzy"));
        let before = trie.clone();
        assert!(!trie.insert("fuzzy"));
        assert_eq!(trie, before);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_prefix_becomes_word() {
        let mut trie = Trie::new();
        trie.insert("fully");
        assert!(trie.contains_prefix("full"));
        assert!(!trie.contains_word("full"));
        assert!(trie.word_at("full").is_none());

        assert!(trie.insert("full"));
        assert!(trie.contains_word("full"));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_missing_paths() {
        let trie: Trie = ["fast"].into_iter().collect();
        assert!(trie.node_at("fat").is_none());
        assert!(trie.node_at("fastest").is_none());
        assert!(!trie.contains_word("fas"));
        assert_eq!(trie.node_at("").map(TrieNode::key), Some(""));
    }

    #[test]
    fn test_descend_from_inner_node() {
        let trie: Trie = ["funny", "fuzzy"].into_iter().collect();
        let fu = trie.node_at("fu").unwrap();
        assert_eq!(fu.descend("nny").map(TrieNode::key), Some("funny"));
        assert!(fu.descend_to_word("zz").is_none());
        assert!(fu.descend_to_word("zzy").is_some());
    }

    #[test]
    fn test_words_roundtrip() {
        let lexicon = ["fuzzy", "fully", "funny", "fast", "fun"];
        let trie: Trie = lexicon.iter().collect();
        let words: BTreeSet<&str> = trie.words().collect();
        let expected: BTreeSet<&str> = lexicon.iter().copied().collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_unicode_letters() {
        let trie: Trie = ["café", "cafe"].into_iter().collect();
        assert!(trie.contains_word("café"));
        assert_eq!(trie.node_at("caf").unwrap().child_count(), 2);
    }
}
