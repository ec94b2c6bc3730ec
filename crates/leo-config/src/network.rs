use std::time::Duration;

use leo_client::{DEFAULT_API_URL, DEFAULT_AUTH_URL};
use serde::{Deserialize, Serialize};

use crate::{env_parse, env_var};

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base of the GetWords / getTranslates / SetWords endpoints
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_url: default_auth_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            api_url: env_var("LINGUALEO_API_URL").unwrap_or_else(default_api_url),
            auth_url: env_var("LINGUALEO_AUTH_URL").unwrap_or_else(default_auth_url),
            timeout_seconds: env_parse("LINGUALEO_TIMEOUT_SECONDS")
                .filter(|s| *s > 0)
                .unwrap_or_else(default_timeout_seconds),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use leo_client::Endpoints;

    use super::*;

    #[test]
    fn test_defaults_match_client_endpoints() {
        let config = NetworkConfig::default();
        let endpoints = Endpoints::new(&config.api_url, &config.auth_url);

        assert_eq!(endpoints, Endpoints::default());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }
}
