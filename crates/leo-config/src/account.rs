use leo_core::LeoError;
use serde::{Deserialize, Serialize};

use crate::env_var;

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Explicit `name=value; ...` cookie string, wins over the cookie cache
    #[serde(skip_serializing)]
    pub cookie: Option<String>,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("cookie", &self.cookie.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AccountConfig {
    pub fn new() -> Self {
        Self {
            email: env_var("LINGUALEO_EMAIL"),
            password: env_var("LINGUALEO_PASSWORD"),
            cookie: env_var("LINGUALEO_COOKIE"),
        }
    }

    /// Email and password, or an authentication error naming what is missing
    pub fn require_credentials(&self) -> Result<(&str, &str), LeoError> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok((email, password))
            }
            _ => Err(LeoError::Authentication(
                "LinguaLeo email and password are required. \
                 Set LINGUALEO_EMAIL and LINGUALEO_PASSWORD environment variables."
                    .to_string(),
            )),
        }
    }
}
