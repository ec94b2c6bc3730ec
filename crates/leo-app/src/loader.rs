use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// One word to import, with an optional desired translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub translation: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, translation: Option<&str>) -> Self {
        Self {
            word: word.into(),
            translation: translation
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }
}

/// Load entries from a JSON file
pub fn load_words(path: &Path) -> Result<Vec<WordEntry>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_words(&data)
}

/// Accepts an array of `{"word", "translation"}` objects, or an object with
/// such an array under `words`.
pub fn parse_words(data: &str) -> Result<Vec<WordEntry>> {
    let value: Value = serde_json::from_str(data).context("Invalid JSON")?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("words") {
            Some(Value::Array(items)) => items,
            None => Vec::new(),
            Some(_) => bail!("'words' must be an array"),
        },
        _ => bail!("JSON must be an array of {{'word','translation'}} objects"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| parse_entry(idx + 1, item))
        .collect()
}

fn parse_entry(number: usize, item: Value) -> Result<WordEntry> {
    let object = match item {
        Value::Object(object) => object,
        other => bail!("Entry #{number} is not an object: {other}"),
    };

    let word = object
        .get("word")
        .map(scalar_text)
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());
    let Some(word) = word else {
        bail!("Entry #{number} must include 'word'");
    };

    let translation = object
        .get("translation")
        .filter(|t| !t.is_null())
        .map(scalar_text);

    Ok(WordEntry::new(word, translation.as_deref()))
}

/// Strings as-is, other scalars rendered
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
