//! Lexicon loading and export.
//!
//! A lexicon is stored as its word list; both tries are rebuilt on load.
//!
//! # Example
//!
//! ```rust
//! use fbtrie::correction::SpellChecker;
//! use fbtrie::serialization::{LexiconSerializer, PlainTextSerializer};
//!
//! let input = "# colours\nred\ngreen\n\nblue\n";
//! let checker = PlainTextSerializer::deserialize(input.as_bytes()).unwrap();
//! assert_eq!(checker.len(), 3);
//!
//! let mut buffer = Vec::new();
//! PlainTextSerializer::serialize(&checker, &mut buffer).unwrap();
//! assert_eq!(String::from_utf8(buffer).unwrap(), "blue\ngreen\nred\n");
//! ```

use std::io::{Read, Write};

use crate::correction::SpellChecker;

#[cfg(feature = "serialization")]
mod json_impl;
mod plaintext_impl;

#[cfg(feature = "serialization")]
pub use self::json_impl::JsonSerializer;
pub use self::plaintext_impl::PlainTextSerializer;

/// Reads and writes a [`SpellChecker`]'s lexicon in some format.
pub trait LexiconSerializer {
    /// Write every word of `checker`, sorted, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(checker: &SpellChecker, writer: W) -> Result<(), SerializationError>;

    /// Build a [`SpellChecker`] from the words read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize<R: Read>(reader: R) -> Result<SpellChecker, SerializationError>;
}

/// Errors that can occur while loading or exporting a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON lexicon
    #[cfg(feature = "serialization")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The words of `checker` in lexicographic order.
pub fn sorted_words(checker: &SpellChecker) -> Vec<&str> {
    let mut words: Vec<&str> = checker.words().collect();
    words.sort_unstable();
    words
}
