use std::io::BufRead;

use leo_core::{DictionaryGateway, WordAdder};
use tokio_util::sync::CancellationToken;

use crate::batch::process_entry;
use crate::message::parse_line;
use crate::report::{Report, WordResult};

/// Stdin lines waiting to be processed
const LINE_BUFFER: usize = 64;

/// Blocking stdin reader; stops at EOF or once the receiver is gone
fn read_lines(input: impl BufRead, tx: kanal::Sender<String>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if tx.send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }
    }
    tracing::debug!("Input reader stopping");
}

/// Add one word per input line (`word — translation` or just `word`)
pub async fn run_lines<G: DictionaryGateway>(
    adder: &WordAdder<G>,
    input: impl BufRead + Send + 'static,
    word_set_id: i64,
    cancel: &CancellationToken,
    mut on_result: impl FnMut(&WordResult),
) -> Report {
    let (tx, rx) = kanal::bounded::<String>(LINE_BUFFER);
    let rx = rx.to_async();

    // Never joined: a blocked read can't be interrupted, so on cancel the
    // reader is left to exit with the process.
    tokio::task::spawn_blocking(move || read_lines(input, tx));

    let mut report = Report::default();

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Input cancelled");
                break;
            }
            line = rx.recv() => match line {
                Ok(line) => line,
                Err(_) => break,
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        let entry = parse_line(&line);
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("Cancelled while adding '{}'", entry.word);
                break;
            }
            result = process_entry(adder, &entry, word_set_id) => result,
        };

        on_result(&result);
        report.push(result);
    }

    report
}

pub fn stdin_is_terminal() -> bool {
    atty::is(atty::Stream::Stdin)
}
