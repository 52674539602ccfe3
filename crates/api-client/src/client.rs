//! The `reqwest`-backed [`ApiTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use workflow::{ApiCredential, ApiRequest, ApiTransport, HttpFailure, HttpMethod};

const USER_AGENT: &str = concat!("connectsafely-nodes/", env!("CARGO_PKG_VERSION"));

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout, connect included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// The HTTP client could not be constructed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
}

/// Authenticated client for the ConnectSafely API.
///
/// Built once per run; the underlying connection pool is reused for every item.
#[derive(Debug, Clone)]
pub struct ConnectSafelyClient {
    http: Client,
    credential: ApiCredential,
}

impl ConnectSafelyClient {
    /// # Errors
    ///
    /// [`ClientError::InvalidApiKey`] when the key cannot be sent as a header
    /// value, [`ClientError::Build`] when `reqwest` rejects the configuration.
    pub fn new(credential: ApiCredential, config: &ClientConfig) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&credential.authorization_header())
            .map_err(|_| ClientError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, credential })
    }

    pub fn credential(&self) -> &ApiCredential {
        &self.credential
    }

    /// Calls `GET /v1/auth/verify` to check the stored key.
    pub async fn verify(&self) -> Result<Value, HttpFailure> {
        self.send(&ApiCredential::verification_request()).await
    }
}

#[async_trait]
impl ApiTransport for ConnectSafelyClient {
    async fn send(&self, request: &ApiRequest) -> Result<Value, HttpFailure> {
        let url = request.url(self.credential.base_url());
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.http.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "request did not complete");
            HttpFailure::transport(e.to_string())
        })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if !status.is_success() => {
                warn!(url = %url, status = status.as_u16(), error = %e, "error body unreadable");
                return Err(HttpFailure::status(status.as_u16(), None));
            }
            Err(e) => {
                return Err(HttpFailure::transport(format!("failed to read response body: {e}")));
            }
        };
        debug!(url = %url, status = status.as_u16(), bytes = text.len(), "response received");

        if !status.is_success() {
            let body = (!text.trim().is_empty()).then(|| decode(&text));
            return Err(HttpFailure::status(status.as_u16(), body));
        }

        if text.trim().is_empty() {
            Ok(Value::Null)
        } else {
            Ok(decode(&text))
        }
    }
}

/// JSON when it parses, the raw text otherwise.
fn decode(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}
