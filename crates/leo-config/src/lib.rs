use serde::{Deserialize, Serialize};

use self::account::AccountConfig;
use self::import::ImportConfig;
use self::network::NetworkConfig;
use self::session::SessionConfig;

pub mod account;
pub mod import;
pub mod network;
pub mod session;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub account: AccountConfig,
    pub session: SessionConfig,
    pub network: NetworkConfig,
    pub import: ImportConfig,
}

impl Config {
    /// Read everything from the environment, falling back to defaults
    pub fn new() -> Self {
        Config {
            account: AccountConfig::new(),
            session: SessionConfig::new(),
            network: NetworkConfig::new(),
            import: ImportConfig::new(),
        }
    }
}

/// Non-empty, trimmed value of `key`
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `key` parsed as `T`, ignoring values that don't parse
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_var(key).and_then(|v| v.parse().ok())
}
