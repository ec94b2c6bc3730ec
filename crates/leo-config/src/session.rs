use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_var;

pub const DEFAULT_COOKIE_FILE: &str = "lingualeo_cookies.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON cache of session cookies, rewritten after every login and write
    pub cookie_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_file: PathBuf::from(DEFAULT_COOKIE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        let cookie_file = env_var("LINGUALEO_COOKIE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COOKIE_FILE));

        Self { cookie_file }
    }
}
