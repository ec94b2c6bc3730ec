use crate::error::LeoError;
use crate::types::{CredentialSet, TranslationCandidate, WordRecord};

/// Remote vocabulary service
///
/// Implementations own the credential set and re-authenticate at most once
/// per call when the session has expired.
#[async_trait::async_trait]
pub trait DictionaryGateway: Send + Sync {
    /// Log in with the configured account, replacing the current credentials
    async fn authenticate(&self) -> Result<CredentialSet, LeoError>;

    /// Look `word` up in the user's dictionary.
    ///
    /// Matches either the canonical or the lemma form, ignoring case.
    /// A response that cannot be understood counts as `None`.
    async fn search_word(
        &self,
        word: &str,
        container_id: i64,
    ) -> Result<Option<WordRecord>, LeoError>;

    /// Translation options the remote catalog offers for `word`
    async fn translation_candidates(
        &self,
        word: &str,
    ) -> Result<Vec<TranslationCandidate>, LeoError>;

    /// Add `word` with `translation` to the container. Performs no duplicate check.
    async fn write_word(
        &self,
        word: &str,
        translation: &TranslationCandidate,
        container_id: i64,
    ) -> Result<serde_json::Value, LeoError>;

    /// Snapshot of the current credentials
    async fn credentials(&self) -> CredentialSet;
}
