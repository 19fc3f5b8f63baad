//! Lexicon loading and export through files.

use fbtrie::prelude::*;
use std::fs::File;
use std::io::Write;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("fbtrie-{}-{}", std::process::id(), name))
}

#[test]
fn test_plaintext_file_roundtrip() {
    let path = temp_path("lexicon.txt");
    let checker: SpellChecker = ["fuzzy", "fully", "funny", "fast"].into_iter().collect();

    PlainTextSerializer::serialize(&checker, File::create(&path).unwrap()).unwrap();
    let loaded = PlainTextSerializer::deserialize(File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.len(), checker.len());
    assert_eq!(
        loaded.corrections("fulzy", 2).unwrap(),
        checker.corrections("fulzy", 2).unwrap()
    );
}

#[test]
fn test_plaintext_hand_written_file() {
    let path = temp_path("handwritten.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# animals").unwrap();
        writeln!(file, "otter").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  otter  ").unwrap();
        writeln!(file, "salamander").unwrap();
    }

    let loaded = PlainTextSerializer::deserialize(File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    assert!(loaded.contains("otter"));
    assert!(loaded.corrections("toetr", 2).unwrap().contains("otter"));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = temp_path("does-not-exist.txt");
    let error = File::open(&path).map_err(fbtrie::serialization::SerializationError::from);
    assert!(matches!(
        error,
        Err(fbtrie::serialization::SerializationError::Io(_))
    ));
}

#[cfg(feature = "serialization")]
#[test]
fn test_json_file_roundtrip() {
    let path = temp_path("lexicon.json");
    let checker: SpellChecker = ["atlas", "otter", "abcde"].into_iter().collect();

    JsonSerializer::serialize(&checker, File::create(&path).unwrap()).unwrap();
    let loaded = JsonSerializer::deserialize(File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut words: Vec<&str> = loaded.words().collect();
    words.sort_unstable();
    assert_eq!(words, ["abcde", "atlas", "otter"]);
}

#[cfg(feature = "serialization")]
#[test]
fn test_candidates_serialize_to_json() {
    let checker: SpellChecker = ["fuzzy", "fully", "funny", "fast"].into_iter().collect();
    let ranked = checker.ranked_corrections("fulzy", 1).unwrap();
    let json = serde_json::to_value(&ranked).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"distance": 1, "term": "fully"},
            {"distance": 1, "term": "fuzzy"},
        ])
    );
}

#[cfg(feature = "serialization")]
#[test]
fn test_candidates_json_roundtrip() {
    let checker: SpellChecker = ["fuzzy", "fully", "funny", "fast"].into_iter().collect();
    let ranked = checker.ranked_corrections("fulzy", 2).unwrap();
    let json = serde_json::to_string(&ranked).unwrap();
    let parsed: Vec<Candidate> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ranked);
    assert_eq!(parsed[0].distance, 1);
}
