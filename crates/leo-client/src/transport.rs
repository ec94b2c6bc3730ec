use std::time::Duration;

use leo_core::{CredentialSet, TransportError};
use reqwest::header::{COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;

/// A JSON POST to one of the remote endpoints
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: &'static [(&'static str, &'static str)],
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Cookies the server set on this response
    pub set_cookies: CredentialSet,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            set_cookies: CredentialSet::new(),
            body: body.into(),
        }
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.set_cookies.insert(name, value);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Sends requests on behalf of the gateway.
///
/// Non-2xx statuses are returned as responses, not errors; only failures to
/// get any response at all are `Err`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &HttpRequest,
        cookies: &CredentialSet,
    ) -> Result<HttpResponse, TransportError>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: &HttpRequest,
        cookies: &CredentialSet,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.post(&request.url).json(&request.body);

        for (name, value) in request.headers {
            builder = builder.header(*name, *value);
        }
        if !cookies.is_empty() {
            builder = builder.header(COOKIE, cookies.cookie_header());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            set_cookies,
            body,
        })
    }
}

/// `name=value` from a `Set-Cookie` header, attributes dropped
fn parse_set_cookie(header: &str) -> Option<(String, String)> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();

    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
