use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use leo_config::Config;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod batch;
pub mod cli;
pub mod lines;
pub mod loader;
pub mod message;
pub mod report;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::report::{Report, WordResult, WordStatus};
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Environment first, then whatever was given on the command line
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::new();

    if let Some(cookie) = &cli.cookie {
        config.account.cookie = Some(cookie.clone());
    }
    if let Some(email) = &cli.email {
        config.account.email = Some(email.clone());
    }
    if let Some(password) = &cli.password {
        config.account.password = Some(password.clone());
    }
    if let Some(cookie_file) = &cli.cookie_file {
        config.session.cookie_file = cookie_file.clone();
    }
    if let Some(word_set_id) = cli.word_set_id {
        config.import.word_set_id = word_set_id;
    }

    config
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli);

    // Read the input before touching the network so a bad file fails fast
    let entries = match &cli.command {
        Command::Import { json_file } => Some(loader::load_words(json_file)?),
        _ => None,
    };

    let state = AppState::new(config)?;
    state.prepare().await?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            ctrl_c.cancel();
        }
    });

    let print = |result: &WordResult| println!("{result}");

    match cli.command {
        Command::Add { word, hint } => {
            let entry = loader::WordEntry::new(word.trim(), hint.as_deref());
            let result = batch::process_entry(&state.adder, &entry, state.word_set_id()).await;
            print(&result);

            if matches!(result.status, WordStatus::Failed(_)) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Import { .. } => {
            let entries = entries.unwrap_or_default();
            tracing::info!("Importing {} words", entries.len());

            let report =
                batch::run_batch(&state.adder, &entries, state.word_set_id(), &cancel, print)
                    .await;
            print_summary(&report);
        }
        Command::Lines => {
            if lines::stdin_is_terminal() {
                eprintln!("Enter one word per line as 'word — translation' or 'word'. Ctrl+D to finish.");
            }

            let input = BufReader::new(std::io::stdin());
            let report =
                lines::run_lines(&state.adder, input, state.word_set_id(), &cancel, print).await;
            print_summary(&report);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(report: &Report) {
    println!("{}", report.summary());
}
