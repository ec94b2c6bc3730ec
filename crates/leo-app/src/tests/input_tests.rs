use std::io::Write;

use crate::loader::{WordEntry, load_words, parse_words};
use crate::message::parse_line;

#[test]
fn test_parse_array_of_entries() {
    let entries = parse_words(
        r#"[
            {"word": " palabra ", "translation": " слово "},
            {"word": "casa"},
            {"word": "perro", "translation": null},
            {"word": "gato", "translation": "   "}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        entries,
        vec![
            WordEntry::new("palabra", Some("слово")),
            WordEntry::new("casa", None),
            WordEntry::new("perro", None),
            WordEntry::new("gato", None),
        ]
    );
}

#[test]
fn test_parse_words_object() {
    let entries = parse_words(r#"{"words": [{"word": "casa", "translation": "дом"}]}"#).unwrap();
    assert_eq!(entries, vec![WordEntry::new("casa", Some("дом"))]);

    assert!(parse_words(r#"{"other": 1}"#).unwrap().is_empty());
}

#[test]
fn test_numeric_translation_is_rendered() {
    let entries = parse_words(r#"[{"word": "diez", "translation": 10}]"#).unwrap();
    assert_eq!(entries[0].translation.as_deref(), Some("10"));
}

#[test]
fn test_invalid_entries() {
    let err = parse_words(r#"[{"word": "casa"}, "perro"]"#).unwrap_err();
    assert!(err.to_string().contains("Entry #2 is not an object"));

    let err = parse_words(r#"[{"translation": "дом"}]"#).unwrap_err();
    assert!(err.to_string().contains("Entry #1 must include 'word'"));

    let err = parse_words(r#"[{"word": "  "}]"#).unwrap_err();
    assert!(err.to_string().contains("must include 'word'"));

    assert!(parse_words(r#""just a string""#).is_err());
    assert!(parse_words(r#"{"words": 5}"#).is_err());
    assert!(parse_words("not json").is_err());
}

#[test]
fn test_load_words_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"word": "palabra", "translation": "слово"}}]"#).unwrap();

    let entries = load_words(file.path()).unwrap();
    assert_eq!(entries, vec![WordEntry::new("palabra", Some("слово"))]);

    let missing = file.path().with_extension("missing");
    assert!(load_words(&missing).is_err());
}

#[test]
fn test_parse_line_separators() {
    assert_eq!(parse_line("palabra — слово"), WordEntry::new("palabra", Some("слово")));
    assert_eq!(parse_line("palabra - слово"), WordEntry::new("palabra", Some("слово")));
    assert_eq!(parse_line("  palabra  "), WordEntry::new("palabra", None));
    assert_eq!(parse_line("palabra —  "), WordEntry::new("palabra", None));
}

#[test]
fn test_parse_line_em_dash_keeps_hyphens() {
    assert_eq!(
        parse_line("bien-estar — благополучие"),
        WordEntry::new("bien-estar", Some("благополучие"))
    );
}
