use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cookie-like tokens used to authenticate remote calls.
///
/// The server may rotate any of them on any response, so the set is
/// re-persisted after every authentication and every successful write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialSet(BTreeMap<String, String>);

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Copy every token of `other` into `self`; `other` wins on collision.
    pub fn overlay(&mut self, other: &CredentialSet) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Token names only, safe to log
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Render as a `Cookie` request header value
    pub fn cookie_header(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Offset that keeps locally minted ids clear of small catalog ids
const SYNTHETIC_ID_BASE: i64 = 1_000_000;
const SYNTHETIC_ID_SPAN: u64 = 1_000_000_000;

/// A translation option for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCandidate {
    pub id: i64,
    pub text: String,
    pub is_primary: bool,
    pub is_selected: bool,
}

impl TranslationCandidate {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_primary: false,
            is_selected: false,
        }
    }

    /// Mint a candidate for text the remote catalog doesn't know.
    ///
    /// The id is a hash of the text. It is stable for the same text but only
    /// unlikely to collide, nothing more.
    pub fn synthetic(text: &str) -> Self {
        let text = text.trim();
        Self {
            id: synthetic_id(text),
            text: text.to_string(),
            is_primary: true,
            is_selected: true,
        }
    }

    /// Whether the candidate can be sent in a write
    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// FNV-1a over the UTF-8 bytes, folded into a positive id range
pub fn synthetic_id(text: &str) -> i64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = text.bytes().fold(FNV_OFFSET, |acc, byte| {
        (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });

    SYNTHETIC_ID_BASE + (hash % SYNTHETIC_ID_SPAN) as i64
}

/// A word already present in the user's remote dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub id: Option<i64>,
    pub value: String,
    pub lemma: String,
    /// Semicolon-delimited translations as the server renders them
    pub combined_translation: String,
    /// Structured translations, in server order
    pub translations: Vec<String>,
}

impl WordRecord {
    /// Case-insensitive match on either the canonical or the lemma form
    pub fn matches(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.value.trim().to_lowercase() == word || self.lemma.trim().to_lowercase() == word
    }
}

/// Result of a successful `add_word`
#[derive(Debug, Clone)]
pub struct AddWordOutcome {
    /// Raw payload returned by the write call
    pub response: serde_json::Value,
    pub translation: TranslationCandidate,
    /// True only when no hint was given and the first remote candidate was used
    pub auto_selected: bool,
}

impl AddWordOutcome {
    pub fn translation_text(&self) -> &str {
        &self.translation.text
    }

    /// The `status` field of the write response, if any
    pub fn status(&self) -> &str {
        self.response
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown")
    }
}
