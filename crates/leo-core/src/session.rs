use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::types::CredentialSet;

/// Persistence for the credential set
pub trait SessionStore: Send + Sync {
    /// Never fails: a missing or unreadable backing store yields an empty set
    fn load(&self) -> CredentialSet;

    /// Replace whatever was stored before with `credentials`
    fn save(&self, credentials: &CredentialSet) -> std::io::Result<()>;
}

/// Parse a `name=value; other=value` cookie string
pub fn parse_cookie_string(raw: &str) -> CredentialSet {
    raw.split(';')
        .filter_map(|part| part.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

/// JSON file of `name -> value`, optionally overlaid with an explicit cookie
/// string that wins on every key it carries.
pub struct FileSessionStore {
    path: PathBuf,
    cookie_override: Option<CredentialSet>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cookie_override: None,
        }
    }

    pub fn with_cookie_string(mut self, raw: Option<&str>) -> Self {
        self.cookie_override = raw
            .map(parse_cookie_string)
            .filter(|cookies| !cookies.is_empty());
        self
    }

    fn read_file(&self) -> CredentialSet {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No cookie cache at {}", self.path.display());
                return CredentialSet::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read cookie cache {}: {}", self.path.display(), e);
                return CredentialSet::new();
            }
        };

        let object = match serde_json::from_str::<serde_json::Value>(&data) {
            Ok(serde_json::Value::Object(object)) => object,
            Ok(_) => {
                tracing::warn!("Cookie cache {} is not a JSON object", self.path.display());
                return CredentialSet::new();
            }
            Err(e) => {
                tracing::warn!("Malformed cookie cache {}: {}", self.path.display(), e);
                return CredentialSet::new();
            }
        };

        object
            .into_iter()
            .filter_map(|(name, value)| match value {
                serde_json::Value::String(s) => Some((name, s)),
                serde_json::Value::Number(n) => Some((name, n.to_string())),
                _ => None,
            })
            .collect()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> CredentialSet {
        let mut credentials = self.read_file();

        if let Some(cookies) = &self.cookie_override {
            credentials.overlay(cookies);
        }

        tracing::debug!("Loaded {} session cookies", credentials.len());
        credentials
    }

    fn save(&self, credentials: &CredentialSet) -> std::io::Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, credentials)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            "Saved {} session cookies to {}",
            credentials.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-process store, for callers that keep sessions elsewhere
#[derive(Default)]
pub struct MemorySessionStore {
    credentials: Mutex<CredentialSet>,
    saves: Mutex<usize>,
}

impl MemorySessionStore {
    pub fn new(credentials: CredentialSet) -> Self {
        Self {
            credentials: Mutex::new(credentials),
            saves: Mutex::new(0),
        }
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> CredentialSet {
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, credentials: &CredentialSet) -> std::io::Result<()> {
        *self.credentials.lock().unwrap_or_else(|e| e.into_inner()) = credentials.clone();
        *self.saves.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_string() {
        let cookies = parse_cookie_string("auth_token = abc123 ; session_id=xyz789");
        assert_eq!(cookies.get("auth_token"), Some("abc123"));
        assert_eq!(cookies.get("session_id"), Some("xyz789"));
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn test_parse_cookie_string_skips_junk() {
        let cookies = parse_cookie_string("invalid;; no_equals; =empty_name; valid=ok; tok=a=b;");
        assert_eq!(cookies.get("valid"), Some("ok"));
        assert_eq!(cookies.get("tok"), Some("a=b"));
        assert_eq!(cookies.len(), 2);
        assert!(parse_cookie_string("").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(FileSessionStore::new(&path).load().is_empty());

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(FileSessionStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_override_wins_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, r#"{"auth_token": "from_file", "session_id": "s1"}"#).unwrap();

        let store = FileSessionStore::new(&path)
            .with_cookie_string(Some("auth_token=from_override; extra=e1"));
        let cookies = store.load();

        assert_eq!(cookies.get("auth_token"), Some("from_override"));
        assert_eq!(cookies.get("session_id"), Some("s1"));
        assert_eq!(cookies.get("extra"), Some("e1"));
        assert_eq!(cookies.len(), 3);
    }

    #[test]
    fn test_save_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("cookies.json");
        let store = FileSessionStore::new(&path);

        let first: CredentialSet = [("a", "1"), ("b", "2")].into_iter().collect();
        store.save(&first).unwrap();
        assert_eq!(store.load(), first);

        let second: CredentialSet = [("c", "3")].into_iter().collect();
        store.save(&second).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load(), second);
    }

    #[test]
    fn test_save_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "plain file").unwrap();

        let store = FileSessionStore::new(blocker.join("cookies.json"));
        let cookies: CredentialSet = [("a", "1")].into_iter().collect();

        assert!(store.save(&cookies).is_err());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemorySessionStore::default();
        assert!(store.load().is_empty());

        let cookies: CredentialSet = [("a", "1")].into_iter().collect();
        store.save(&cookies).unwrap();

        assert_eq!(store.load(), cookies);
        assert_eq!(store.save_count(), 1);
    }
}
