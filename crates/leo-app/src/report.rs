use std::fmt;

use leo_core::{AddWordOutcome, LeoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordStatus {
    Added {
        translation: String,
        auto_selected: bool,
    },
    /// Already in the dictionary; not an error for the caller
    Exists(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub status: WordStatus,
}

impl WordResult {
    pub fn new(word: &str, result: Result<AddWordOutcome, LeoError>) -> Self {
        let status = match result {
            Ok(outcome) => WordStatus::Added {
                translation: outcome.translation_text().to_string(),
                auto_selected: outcome.auto_selected,
            },
            Err(e) if e.is_duplicate() => {
                tracing::info!("'{}' already in dictionary: {}", word, e);
                WordStatus::Exists(e.to_string())
            }
            Err(e) => {
                tracing::error!("Failed to add '{}': {}", word, e);
                WordStatus::Failed(e.to_string())
            }
        };

        Self {
            word: word.to_string(),
            status,
        }
    }

    pub fn failed(word: &str, reason: impl Into<String>) -> Self {
        Self {
            word: word.to_string(),
            status: WordStatus::Failed(reason.into()),
        }
    }
}

impl fmt::Display for WordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            WordStatus::Added {
                translation,
                auto_selected: true,
            } => write!(f, "✔ {} → {} (suggested)", self.word, translation),
            WordStatus::Added { translation, .. } => {
                write!(f, "✔ {} → {}", self.word, translation)
            }
            WordStatus::Exists(reason) => write!(f, "· {} skipped: {}", self.word, reason),
            WordStatus::Failed(reason) => write!(f, "! {} failed: {}", self.word, reason),
        }
    }
}

/// Per-word results of one run
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<WordResult>,
}

impl Report {
    pub fn push(&mut self, result: WordResult) {
        self.results.push(result);
    }

    pub fn added(&self) -> usize {
        self.count(|s| matches!(s, WordStatus::Added { .. }))
    }

    pub fn existing(&self) -> usize {
        self.count(|s| matches!(s, WordStatus::Exists(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, WordStatus::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&WordStatus) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.status)).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Added {}, already present {}, failed {}",
            self.added(),
            self.existing(),
            self.failed()
        )
    }
}
