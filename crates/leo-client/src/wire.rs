//! Request bodies and response shapes of the remote API

use leo_core::{TranslationCandidate, WordRecord};
use serde::Deserialize;
use serde_json::{Value, json};

const API_VERSION: &str = "1.0.1";
const SEARCH_PAGE_SIZE: u32 = 30;

pub fn auth_body(email: &str, password: &str) -> Value {
    json!({
        "type": "mixed",
        "credentials": {
            "email": email,
            "password": password
        }
    })
}

pub fn get_words_body(word: &str, word_set_id: i64) -> Value {
    json!({
        "apiVersion": API_VERSION,
        "api_call": "GetWords",
        "wordSetId": word_set_id,
        "search": word,
        "category": "",
        "dateGroup": "start",
        "mode": "basic",
        "perPage": SEARCH_PAGE_SIZE,
        "status": "",
        "offset": {},
        "training": null,
        "iDs": []
    })
}

pub fn get_translates_body(word: &str) -> Value {
    json!({
        "apiVersion": API_VERSION,
        "text": word,
        "iDs": []
    })
}

pub fn set_words_body(word: &str, translation: &TranslationCandidate, word_set_id: i64) -> Value {
    json!({
        "apiVersion": API_VERSION,
        "op": "actionWithWords {action: add}",
        "data": [
            {
                "action": "add",
                "mode": "0",
                "wordIds": [],
                "valueList": {
                    "wordSetId": word_set_id,
                    "wordValue": word,
                    "translation": {
                        "id": translation.id,
                        "tr": translation.text,
                        "main": u8::from(translation.is_primary),
                        "selected": u8::from(translation.is_selected)
                    }
                }
            }
        ],
        "userData": { "nativeLanguage": "lang_id_src" },
        "iDs": []
    })
}

/// Translation text lives in `value`, or in `tr` on older payloads
#[derive(Debug, Default, Deserialize)]
pub struct WireTranslation {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    tr: Option<String>,
}

impl WireTranslation {
    fn text(&self) -> Option<&str> {
        [self.value.as_deref(), self.tr.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWordsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Vec<WordGroup>,
}

#[derive(Debug, Deserialize)]
pub struct WordGroup {
    #[serde(default)]
    pub words: Vec<WireWord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    word_value: Option<String>,
    #[serde(default)]
    word_lemma_value: Option<String>,
    #[serde(default)]
    combined_translation: Option<String>,
    #[serde(default)]
    translations: Vec<WireTranslation>,
}

impl From<WireWord> for WordRecord {
    fn from(word: WireWord) -> Self {
        WordRecord {
            id: word.id,
            value: word.word_value.unwrap_or_default(),
            lemma: word.word_lemma_value.unwrap_or_default(),
            combined_translation: word.combined_translation.unwrap_or_default(),
            translations: word
                .translations
                .iter()
                .filter_map(|t| t.text().map(str::to_string))
                .collect(),
        }
    }
}

impl GetWordsResponse {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    /// First word in any group whose canonical or lemma form is `word`
    pub fn find(self, word: &str) -> Option<WordRecord> {
        self.data
            .into_iter()
            .flat_map(|group| group.words)
            .map(WordRecord::from)
            .find(|record| record.matches(word))
    }
}

#[derive(Debug, Deserialize)]
pub struct WireCandidate {
    #[serde(default)]
    id: Option<i64>,
    #[serde(flatten)]
    text: WireTranslation,
    #[serde(default)]
    main: Value,
    #[serde(default)]
    selected: Value,
}

/// 0/1 flags, sometimes sent as booleans
fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

impl WireCandidate {
    fn into_candidate(self) -> Option<TranslationCandidate> {
        let id = self.id?;
        Some(TranslationCandidate {
            id,
            text: self.text.text().unwrap_or_default().to_string(),
            is_primary: flag(&self.main),
            is_selected: flag(&self.selected),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslatesResponse {
    #[serde(default)]
    translate: Option<Vec<WireCandidate>>,
    #[serde(default)]
    translations: Option<Vec<WireCandidate>>,
}

impl TranslatesResponse {
    /// Candidates in server order; entries without an id are dropped
    pub fn into_candidates(self) -> Vec<TranslationCandidate> {
        self.translate
            .filter(|list| !list.is_empty())
            .or(self.translations)
            .unwrap_or_default()
            .into_iter()
            .filter_map(WireCandidate::into_candidate)
            .collect()
    }
}
