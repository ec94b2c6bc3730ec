use leo_core::{DictionaryGateway, WordAdder};
use tokio_util::sync::CancellationToken;

use crate::loader::WordEntry;
use crate::report::{Report, WordResult};

/// Add one entry, folding any failure into the result
pub async fn process_entry<G: DictionaryGateway>(
    adder: &WordAdder<G>,
    entry: &WordEntry,
    word_set_id: i64,
) -> WordResult {
    if entry.word.is_empty() {
        return WordResult::failed("", "missing word");
    }

    let target = entry.translation.as_deref().unwrap_or("(auto-select)");
    tracing::info!("Processing '{}' → '{}'", entry.word, target);

    let result = adder
        .add_word(&entry.word, entry.translation.as_deref(), word_set_id)
        .await;
    WordResult::new(&entry.word, result)
}

/// Add entries one at a time. Stops early once `cancel` fires; a word in
/// flight at that point is abandoned and left out of the report.
pub async fn run_batch<G: DictionaryGateway>(
    adder: &WordAdder<G>,
    entries: &[WordEntry],
    word_set_id: i64,
    cancel: &CancellationToken,
    mut on_result: impl FnMut(&WordResult),
) -> Report {
    let mut report = Report::default();

    for (idx, entry) in entries.iter().enumerate() {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Import cancelled, {} words not processed", entries.len() - idx);
                break;
            }
            result = process_entry(adder, entry, word_set_id) => result,
        };

        on_result(&result);
        report.push(result);
    }

    report
}
