use std::sync::Arc;

use anyhow::Context;
use leo_client::{Account, Endpoints, LinguaLeoGateway, ReqwestTransport};
use leo_config::Config;
use leo_core::{FileSessionStore, SessionStore, WordAdder};

pub type LeoWordAdder = WordAdder<LinguaLeoGateway<ReqwestTransport>>;

pub struct AppState {
    pub config: Config,
    pub adder: LeoWordAdder,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (email, password) = config.account.require_credentials()?;
        let account = Account {
            email: email.to_string(),
            password: password.to_string(),
        };

        let store: Arc<dyn SessionStore> = Arc::new(
            FileSessionStore::new(&config.session.cookie_file)
                .with_cookie_string(config.account.cookie.as_deref()),
        );

        let transport = ReqwestTransport::new(config.network.timeout())?;
        let endpoints = Endpoints::new(&config.network.api_url, &config.network.auth_url);
        let gateway = LinguaLeoGateway::new(transport, endpoints, account, store.clone());

        let adder = WordAdder::new(gateway, store).with_threshold(config.import.match_threshold);

        tracing::debug!(
            "Client ready (cookie cache: {}, word set: {})",
            config.session.cookie_file.display(),
            config.import.word_set_id
        );

        Ok(Self { config, adder })
    }

    /// Log in now if there is no cached session
    pub async fn prepare(&self) -> anyhow::Result<()> {
        self.adder
            .gateway()
            .ensure_authenticated()
            .await
            .context("Failed to prepare LinguaLeo client")
    }

    pub fn word_set_id(&self) -> i64 {
        self.config.import.word_set_id
    }
}
