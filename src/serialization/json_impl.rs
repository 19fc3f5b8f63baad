//! JSON word lists.

use std::io::{Read, Write};

use super::{sorted_words, LexiconSerializer, SerializationError};
use crate::correction::SpellChecker;

/// JSON serializer: the lexicon is a single array of strings.
///
/// ```json
/// ["apple", "banana", "cherry"]
/// ```
///
/// Empty strings in the array are skipped on read.
pub struct JsonSerializer;

impl LexiconSerializer for JsonSerializer {
    fn serialize<W: Write>(checker: &SpellChecker, mut writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, &sorted_words(checker))?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<SpellChecker, SerializationError> {
        let words: Vec<String> = serde_json::from_reader(&mut reader)?;
        Ok(words.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let checker: SpellChecker = ["otter", "atlas", "abcde"].into_iter().collect();
        let mut buffer = Vec::new();

        JsonSerializer::serialize(&checker, &mut buffer).unwrap();
        let loaded = JsonSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("otter"));
        assert_eq!(
            loaded.corrections("atlsa", 1).unwrap().into_iter().collect::<Vec<_>>(),
            ["atlas"]
        );
    }

    #[test]
    fn test_json_is_sorted_array() {
        let checker: SpellChecker = ["b", "a"].into_iter().collect();
        let mut buffer = Vec::new();

        JsonSerializer::serialize(&checker, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value, serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_json_skips_empty_strings() {
        let loaded = JsonSerializer::deserialize(r#"["", "fast", ""]"#.as_bytes()).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_json_rejects_non_array() {
        let result = JsonSerializer::deserialize(r#"{"words": ["fast"]}"#.as_bytes());
        assert!(matches!(result, Err(SerializationError::Json(_))));
    }
}
