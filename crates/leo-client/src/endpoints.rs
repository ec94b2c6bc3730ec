pub const DEFAULT_API_URL: &str = "https://api.lingualeo.com";
pub const DEFAULT_AUTH_URL: &str = "https://lingualeo.com/api/auth";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

pub(crate) const API_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json"),
    ("accept-language", "en-US,en;q=0.9,ru-RU;q=0.8,ru;q=0.7"),
    ("origin", "https://lingualeo.com"),
    ("referer", "https://lingualeo.com/ru/dictionary/vocabulary/my"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("user-agent", USER_AGENT),
];

pub(crate) const AUTH_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json"),
    ("accept-language", "en-US,en;q=0.9,ru-RU;q=0.8,ru;q=0.7"),
    ("cache-control", "no-cache"),
    ("origin", "https://lingualeo.com"),
    ("pragma", "no-cache"),
    ("referer", "https://lingualeo.com/en"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    ("user-agent", USER_AGENT),
];

/// Where the remote operations live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub auth_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_AUTH_URL)
    }
}

impl Endpoints {
    pub fn new(api_url: impl Into<String>, auth_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            auth_url: auth_url.into(),
        }
    }

    pub fn get_words(&self) -> String {
        format!("{}/GetWords", self.api_url)
    }

    pub fn get_translates(&self) -> String {
        format!("{}/getTranslates", self.api_url)
    }

    pub fn set_words(&self) -> String {
        format!("{}/SetWords", self.api_url)
    }
}
