//! Word-addition policy
//!
//! `add_word` runs three steps in a fixed order:
//!
//! 1. **Lookup**: search the user's dictionary. A present word is only
//!    accepted again when a hint names a translation it doesn't have yet.
//! 2. **Candidate resolution**: fetch the remote translation options and pick
//!    one. A hint is matched fuzzily and falls back to a locally minted
//!    candidate. Without a hint the first option is taken.
//! 3. **Commit**: write the word and persist the possibly rotated credentials.

use std::sync::Arc;

use crate::error::{DuplicateKind, LeoError, TransportError};
use crate::gateway::DictionaryGateway;
use crate::matcher::{self, DEFAULT_THRESHOLD};
use crate::session::SessionStore;
use crate::types::{AddWordOutcome, TranslationCandidate};

pub struct WordAdder<G> {
    gateway: G,
    store: Arc<dyn SessionStore>,
    threshold: f64,
}

impl<G: DictionaryGateway> WordAdder<G> {
    pub fn new(gateway: G, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Minimum similarity for a hint to select a remote candidate
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Add `word` to container `container_id`, optionally with a desired translation.
    ///
    /// Fails with [`LeoError::Duplicate`] when the word (or the word with the
    /// hinted translation) is already present, and with
    /// [`LeoError::NoTranslation`] when there is no hint and nothing to
    /// suggest. Transport failures propagate unchanged.
    pub async fn add_word(
        &self,
        word: &str,
        hint: Option<&str>,
        container_id: i64,
    ) -> Result<AddWordOutcome, LeoError> {
        let word = word.trim();
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());

        tracing::debug!("add_word '{}' (hint: {:?}, container: {})", word, hint, container_id);

        self.check_existing(word, hint, container_id).await?;

        let (translation, auto_selected) = self.resolve_translation(word, hint).await?;

        let response = self
            .gateway
            .write_word(word, &translation, container_id)
            .await?;

        let credentials = self.gateway.credentials().await;
        self.store.save(&credentials)?;

        tracing::info!(
            "Added '{}' -> '{}' (id={}, auto_selected={})",
            word,
            translation.text,
            translation.id,
            auto_selected
        );

        Ok(AddWordOutcome {
            response,
            translation,
            auto_selected,
        })
    }

    async fn check_existing(
        &self,
        word: &str,
        hint: Option<&str>,
        container_id: i64,
    ) -> Result<(), LeoError> {
        let record = match self.gateway.search_word(word, container_id).await {
            Ok(record) => record,
            Err(LeoError::Transport(TransportError::Decode(e))) => {
                tracing::warn!("Unreadable search response for '{}', assuming absent: {}", word, e);
                None
            }
            Err(e) => return Err(e),
        };

        let Some(record) = record else {
            tracing::debug!("'{}' not in dictionary", word);
            return Ok(());
        };

        let existing = matcher::extract_existing_translations(&record);
        tracing::debug!("'{}' already present with {:?}", word, existing);

        match hint {
            None => {
                tracing::info!("'{}' already exists, skipping", word);
                Err(LeoError::Duplicate {
                    word: word.to_string(),
                    kind: DuplicateKind::Word,
                })
            }
            Some(hint) if matcher::translation_already_present(&existing, hint) => {
                tracing::info!("'{}' already has translation '{}', skipping", word, hint);
                Err(LeoError::Duplicate {
                    word: word.to_string(),
                    kind: DuplicateKind::Translation,
                })
            }
            Some(hint) => {
                tracing::info!("'{}' exists, adding translation '{}'", word, hint);
                Ok(())
            }
        }
    }

    async fn resolve_translation(
        &self,
        word: &str,
        hint: Option<&str>,
    ) -> Result<(TranslationCandidate, bool), LeoError> {
        let candidates = self.gateway.translation_candidates(word).await?;
        tracing::debug!("{} candidates for '{}'", candidates.len(), word);

        match hint {
            Some(hint) => match matcher::select_best(&candidates, hint, self.threshold) {
                Some(candidate) => Ok((candidate.clone(), false)),
                None => {
                    let synthetic = TranslationCandidate::synthetic(hint);
                    tracing::info!(
                        "'{}' matches no candidate for '{}', using custom id {}",
                        hint,
                        word,
                        synthetic.id
                    );
                    Ok((synthetic, false))
                }
            },
            None => candidates
                .into_iter()
                .find(TranslationCandidate::is_usable)
                .map(|candidate| {
                    tracing::info!("No hint for '{}', using suggestion '{}'", word, candidate.text);
                    (candidate, true)
                })
                .ok_or_else(|| LeoError::NoTranslation(word.to_string())),
        }
    }
}
