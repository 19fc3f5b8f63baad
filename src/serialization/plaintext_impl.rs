//! Newline-delimited word lists.
//!
//! One word per line, UTF-8. On read, surrounding whitespace is trimmed and
//! blank lines and lines starting with `#` are skipped:
//!
//! ```text
//! # fruit
//! apple
//! banana
//! ```

use std::io::{BufRead, BufReader, Read, Write};

use super::{sorted_words, LexiconSerializer, SerializationError};
use crate::correction::SpellChecker;

/// Plain text serializer using newline-delimited UTF-8.
pub struct PlainTextSerializer;

impl LexiconSerializer for PlainTextSerializer {
    fn serialize<W: Write>(checker: &SpellChecker, mut writer: W) -> Result<(), SerializationError> {
        for word in sorted_words(checker) {
            writeln!(writer, "{word}")?;
        }
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<SpellChecker, SerializationError> {
        let mut checker = SpellChecker::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                checker.add_word(word);
            }
        }
        Ok(checker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_roundtrip() {
        let checker: SpellChecker = ["fuzzy", "fully", "funny"].into_iter().collect();
        let mut buffer = Vec::new();

        PlainTextSerializer::serialize(&checker, &mut buffer).unwrap();
        let loaded = PlainTextSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("fuzzy"));
        assert!(loaded.backward().contains_word("ynnuf"));
        assert!(!loaded.contains("fast"));
    }

    #[test]
    fn test_plaintext_format_is_sorted() {
        let checker: SpellChecker = ["testing", "test", "tested"].into_iter().collect();
        let mut buffer = Vec::new();

        PlainTextSerializer::serialize(&checker, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "test\ntested\ntesting\n");
    }

    #[test]
    fn test_plaintext_skips_blank_and_comment_lines() {
        let input = "# header\napple\n\n  banana  \n   \n#cherry\ncherry\n".as_bytes();
        let loaded = PlainTextSerializer::deserialize(input).unwrap();

        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("banana"));
        assert!(!loaded.contains("#cherry"));
    }

    #[test]
    fn test_plaintext_utf8() {
        let checker: SpellChecker = ["café", "naïve", "日本語"].into_iter().collect();
        let mut buffer = Vec::new();

        PlainTextSerializer::serialize(&checker, &mut buffer).unwrap();
        let loaded = PlainTextSerializer::deserialize(&buffer[..]).unwrap();

        assert!(loaded.contains("café"));
        assert!(loaded.contains("naïve"));
        assert!(loaded.contains("日本語"));
    }
}
