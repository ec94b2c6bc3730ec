use std::sync::Arc;

use leo_core::{
    CredentialSet, DictionaryGateway, LeoError, SessionStore, TranslationCandidate,
    TransportError, WordRecord,
};
use tokio::sync::Mutex;

use crate::endpoints::{API_HEADERS, AUTH_HEADERS, Endpoints};
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::wire;

/// Login for the remote account
#[derive(Clone)]
pub struct Account {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// LinguaLeo-backed [`DictionaryGateway`]
///
/// Owns the credential set. Every authenticated call goes through
/// [`LinguaLeoGateway::send_authenticated`], which re-authenticates once on
/// 400/401/403 and retries the call once.
pub struct LinguaLeoGateway<T> {
    transport: T,
    endpoints: Endpoints,
    account: Account,
    credentials: Mutex<CredentialSet>,
    store: Arc<dyn SessionStore>,
}

impl<T: Transport> LinguaLeoGateway<T> {
    /// Starts from whatever the store already holds
    pub fn new(
        transport: T,
        endpoints: Endpoints,
        account: Account,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let credentials = store.load();
        tracing::debug!("Starting with session cookies {:?}", credentials.names());

        Self {
            transport,
            endpoints,
            account,
            credentials: Mutex::new(credentials),
            store,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with explicit credentials and persist the resulting session
    pub async fn login(&self, email: &str, password: &str) -> Result<CredentialSet, LeoError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(LeoError::Authentication(
                "email and password are required".to_string(),
            ));
        }

        let request = HttpRequest {
            url: self.endpoints.auth_url.clone(),
            headers: AUTH_HEADERS,
            body: wire::auth_body(email, password),
        };

        tracing::info!("Authenticating as {}", email);
        let response = self.exchange(&request).await?;
        if !response.is_success() {
            return Err(LeoError::Authentication(format!(
                "HTTP {}: {}",
                response.status, response.body
            )));
        }

        if response.set_cookies.is_empty() {
            return Err(LeoError::Authentication(
                "server returned no session cookies".to_string(),
            ));
        }

        // A fresh login starts a new session; nothing from the old one survives
        let credentials = {
            let mut current = self.credentials.lock().await;
            current.clear();
            current.overlay(&response.set_cookies);
            current.clone()
        };

        self.store.save(&credentials)?;
        tracing::debug!("Session cookies after login: {:?}", credentials.names());
        Ok(credentials)
    }

    /// Authenticate first if there is no session at all
    pub async fn ensure_authenticated(&self) -> Result<(), LeoError> {
        if self.credentials.lock().await.is_empty() {
            tracing::debug!("No session cookies, logging in");
            self.authenticate().await?;
        }
        Ok(())
    }

    /// Send `request`, re-authenticating and retrying once when the session
    /// has expired. A second failure propagates unchanged.
    pub async fn send_authenticated(&self, request: &HttpRequest) -> Result<HttpResponse, LeoError> {
        self.ensure_authenticated().await?;

        match self.attempt(request).await {
            Err(e) if e.should_reauth() => {
                tracing::warn!("{} from {}, re-authenticating", e, request.url);
                self.authenticate().await?;
                Ok(self.attempt(request).await?)
            }
            other => Ok(other?),
        }
    }

    /// One call; a non-2xx status becomes an error
    async fn attempt(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.exchange(request).await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }

    /// Send with the current cookies and absorb any the server rotates
    async fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let cookies = self.credentials.lock().await.clone();

        tracing::debug!("POST {}", request.url);
        let response = self.transport.send(request, &cookies).await?;
        tracing::debug!("{} -> HTTP {}", request.url, response.status);

        if !response.set_cookies.is_empty() {
            tracing::debug!("Server set cookies {:?}", response.set_cookies.names());
            self.credentials.lock().await.overlay(&response.set_cookies);
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl<T: Transport> DictionaryGateway for LinguaLeoGateway<T> {
    async fn authenticate(&self) -> Result<CredentialSet, LeoError> {
        self.login(&self.account.email, &self.account.password).await
    }

    async fn search_word(
        &self,
        word: &str,
        container_id: i64,
    ) -> Result<Option<WordRecord>, LeoError> {
        let request = HttpRequest {
            url: self.endpoints.get_words(),
            headers: API_HEADERS,
            body: wire::get_words_body(word, container_id),
        };
        let response = self.send_authenticated(&request).await?;

        let payload = match response.json::<wire::GetWordsResponse>() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Ignoring unreadable search response for '{}': {}", word, e);
                return Ok(None);
            }
        };

        if !payload.is_ok() {
            tracing::warn!(
                "Search for '{}' returned status {:?}, treating as not found",
                word,
                payload.status
            );
            return Ok(None);
        }

        Ok(payload.find(word))
    }

    async fn translation_candidates(
        &self,
        word: &str,
    ) -> Result<Vec<TranslationCandidate>, LeoError> {
        let request = HttpRequest {
            url: self.endpoints.get_translates(),
            headers: API_HEADERS,
            body: wire::get_translates_body(word),
        };
        let response = self.send_authenticated(&request).await?;

        Ok(response
            .json::<wire::TranslatesResponse>()?
            .into_candidates())
    }

    async fn write_word(
        &self,
        word: &str,
        translation: &TranslationCandidate,
        container_id: i64,
    ) -> Result<serde_json::Value, LeoError> {
        if !translation.is_usable() {
            return Err(LeoError::NoTranslation(word.to_string()));
        }

        let request = HttpRequest {
            url: self.endpoints.set_words(),
            headers: API_HEADERS,
            body: wire::set_words_body(word, translation, container_id),
        };
        let response = self.send_authenticated(&request).await?;

        Ok(response.json::<serde_json::Value>()?)
    }

    async fn credentials(&self) -> CredentialSet {
        self.credentials.lock().await.clone()
    }
}
