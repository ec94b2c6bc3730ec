use std::io::Cursor;
use std::sync::Arc;

use leo_core::{
    CredentialSet, DictionaryGateway, DuplicateKind, LeoError, MemorySessionStore,
    TranslationCandidate, TransportError, WordAdder, WordRecord,
};
use tokio_util::sync::CancellationToken;

use crate::batch::{process_entry, run_batch};
use crate::lines::run_lines;
use crate::loader::WordEntry;
use crate::report::{WordResult, WordStatus};

/// "casa" is already known as "дом"; "error" fails with a server error;
/// everything else is absent and gets one suggestion.
struct StubGateway;

#[async_trait::async_trait]
impl DictionaryGateway for StubGateway {
    async fn authenticate(&self) -> Result<CredentialSet, LeoError> {
        Ok(self.credentials().await)
    }

    async fn search_word(
        &self,
        word: &str,
        _container_id: i64,
    ) -> Result<Option<WordRecord>, LeoError> {
        match word {
            "casa" => Ok(Some(WordRecord {
                value: "casa".to_string(),
                combined_translation: "дом".to_string(),
                ..Default::default()
            })),
            "error" => Err(TransportError::Status {
                status: 500,
                body: "Internal server error".to_string(),
            }
            .into()),
            _ => Ok(None),
        }
    }

    async fn translation_candidates(
        &self,
        word: &str,
    ) -> Result<Vec<TranslationCandidate>, LeoError> {
        Ok(vec![TranslationCandidate::new(1, format!("{word}-tr"))])
    }

    async fn write_word(
        &self,
        _word: &str,
        _translation: &TranslationCandidate,
        _container_id: i64,
    ) -> Result<serde_json::Value, LeoError> {
        Ok(serde_json::json!({ "status": "ok" }))
    }

    async fn credentials(&self) -> CredentialSet {
        [("auth_token", "abc123")].into_iter().collect()
    }
}

fn adder() -> WordAdder<StubGateway> {
    WordAdder::new(StubGateway, Arc::new(MemorySessionStore::default()))
}

#[tokio::test]
async fn test_process_entry_statuses() {
    let adder = adder();

    let added = process_entry(&adder, &WordEntry::new("perro", None), 1).await;
    assert_eq!(
        added.status,
        WordStatus::Added {
            translation: "perro-tr".to_string(),
            auto_selected: true
        }
    );

    let exists = process_entry(&adder, &WordEntry::new("casa", Some("Дом")), 1).await;
    assert!(matches!(exists.status, WordStatus::Exists(_)));

    let failed = process_entry(&adder, &WordEntry::new("error", None), 1).await;
    assert!(matches!(failed.status, WordStatus::Failed(ref m) if m.contains("500")));

    let blank = process_entry(&adder, &WordEntry::new("", Some("x")), 1).await;
    assert!(matches!(blank.status, WordStatus::Failed(_)));
}

#[tokio::test]
async fn test_batch_continues_after_failures() {
    let adder = adder();
    let entries = vec![
        WordEntry::new("error", None),
        WordEntry::new("casa", None),
        WordEntry::new("perro", Some("собака")),
        WordEntry::new("gato", None),
    ];

    let mut seen = Vec::new();
    let report = run_batch(&adder, &entries, 1, &CancellationToken::new(), |r| {
        seen.push(r.word.clone())
    })
    .await;

    assert_eq!(seen, vec!["error", "casa", "perro", "gato"]);
    assert_eq!(report.added(), 2);
    assert_eq!(report.existing(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.summary(), "Added 2, already present 1, failed 1");
}

#[tokio::test]
async fn test_cancelled_batch_stops() {
    let adder = adder();
    let entries = vec![WordEntry::new("perro", None), WordEntry::new("gato", None)];

    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = run_batch(&adder, &entries, 1, &cancel, |_| {}).await;
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn test_lines_from_reader() {
    let adder = adder();
    let input = Cursor::new("perro — собака\n\n  casa\ngato\n".as_bytes().to_vec());

    let report = run_lines(&adder, input, 1, &CancellationToken::new(), |_| {}).await;

    let words: Vec<&str> = report.results.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["perro", "casa", "gato"]);
    assert_eq!(
        report.results[0].status,
        WordStatus::Added {
            translation: "собака".to_string(),
            auto_selected: false
        }
    );
    assert_eq!(report.existing(), 1);
}

#[test]
fn test_result_lines() {
    let duplicate = LeoError::Duplicate {
        word: "casa".to_string(),
        kind: DuplicateKind::Word,
    };
    let exists = WordResult::new("casa", Err(duplicate));
    assert_eq!(exists.to_string(), "· casa skipped: casa: word already exists");

    let failed = WordResult::failed("perro", "timed out");
    assert_eq!(failed.to_string(), "! perro failed: timed out");

    let added = WordResult {
        word: "gato".to_string(),
        status: WordStatus::Added {
            translation: "кот".to_string(),
            auto_selected: true,
        },
    };
    assert_eq!(added.to_string(), "✔ gato → кот (suggested)");
}
