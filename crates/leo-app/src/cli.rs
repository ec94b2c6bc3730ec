use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Add words to a LinguaLeo dictionary
#[derive(Debug, Parser)]
#[command(name = "leo-import", version)]
pub struct Cli {
    /// Cookie string; defaults to LINGUALEO_COOKIE
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// Where session cookies are cached; defaults to LINGUALEO_COOKIE_FILE
    #[arg(long, global = true)]
    pub cookie_file: Option<PathBuf>,

    /// Login email; defaults to LINGUALEO_EMAIL
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Login password; defaults to LINGUALEO_PASSWORD
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Target word set; defaults to LINGUALEO_WORD_SET_ID or 1
    #[arg(long, global = true)]
    pub word_set_id: Option<i64>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a single word
    Add {
        word: String,
        /// Desired translation; the first suggestion is used when omitted
        #[arg(long)]
        hint: Option<String>,
    },
    /// Import words from a JSON file of {"word", "translation"} entries
    Import { json_file: PathBuf },
    /// Read "word — translation" lines from stdin
    Lines,
}
