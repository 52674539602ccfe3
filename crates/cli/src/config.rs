//! `connectsafely.toml` loading.
//!
//! ```toml
//! [credential]
//! api_key = "..."
//! base_url = "https://api.connectsafely.ai"
//!
//! [client]
//! timeout_secs = 30
//!
//! [telemetry]
//! format = "json"            # or "pretty"
//! otlp_endpoint = "http://localhost:4317"
//!
//! [nodes.linkedInPosts]
//! base_url = "https://posts.internal"
//! ```
//!
//! `CONNECTSAFELY_API_KEY`, `CONNECTSAFELY_BASE_URL` and
//! `OTEL_EXPORTER_OTLP_ENDPOINT` take precedence over the file.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use api_client::ClientConfig;
use serde::Deserialize;
use workflow::{ApiCredential, ApiKey};

pub const API_KEY_ENV: &str = "CONNECTSAFELY_API_KEY";
pub const BASE_URL_ENV: &str = "CONNECTSAFELY_BASE_URL";
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub credential: CredentialSection,
    pub client: ClientSection,
    pub telemetry: TelemetrySection,
    pub nodes: HashMap<String, NodeSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientSection {
    pub timeout_secs: u64,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetrySection {
    pub format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSection {
    pub base_url: String,
}

impl Config {
    /// Reads `path` (defaults when the file does not exist) and applies
    /// environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))?
        } else {
            Self::default()
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies overrides from `lookup`; blank values are ignored.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup(API_KEY_ENV) {
            self.credential.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.credential.base_url = Some(url);
        }
        if let Some(endpoint) = lookup(OTLP_ENDPOINT_ENV) {
            self.telemetry.otlp_endpoint = Some(endpoint);
        }
        self
    }

    pub fn credential(&self) -> Result<ApiCredential> {
        let key = self.credential.api_key.clone().with_context(|| {
            format!("no API key configured; set [credential] api_key or {API_KEY_ENV}")
        })?;
        let key = ApiKey::new(key)?;
        Ok(ApiCredential::new(key, self.credential.base_url.as_deref())?)
    }

    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.client.timeout_secs),
        }
    }

    /// Per-node base URL overrides keyed by registry name.
    pub fn base_url_overrides(&self) -> HashMap<String, String> {
        self.nodes
            .iter()
            .map(|(name, section)| (name.clone(), section.base_url.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.client().timeout, Duration::from_secs(30));
        assert_eq!(config.telemetry.format, LogFormat::Pretty);
    }

    #[test]
    fn parses_every_section() {
        let config = Config::parse(
            r#"
            [credential]
            api_key = "k-123"
            base_url = "https://staging.connectsafely.ai/"

            [client]
            timeout_secs = 5

            [telemetry]
            format = "json"
            otlp_endpoint = "http://collector:4317"

            [nodes.linkedInPosts]
            base_url = "https://posts.internal"
            "#,
        )
        .unwrap();

        let credential = config.credential().unwrap();
        assert_eq!(credential.base_url(), "https://staging.connectsafely.ai");
        assert_eq!(credential.authorization_header(), "Bearer k-123");
        assert_eq!(config.client().timeout, Duration::from_secs(5));
        assert_eq!(config.telemetry.format, LogFormat::Json);
        assert_eq!(config.telemetry.otlp_endpoint.as_deref(), Some("http://collector:4317"));
        assert_eq!(
            config.base_url_overrides().get("linkedInPosts").map(String::as_str),
            Some("https://posts.internal")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[credential]\napikey = \"x\"").is_err());
    }

    #[test]
    fn environment_wins_over_file() {
        let config = Config::parse("[credential]\napi_key = \"from-file\"")
            .unwrap()
            .with_env(|name| match name {
                API_KEY_ENV => Some("from-env".into()),
                OTLP_ENDPOINT_ENV => Some("http://otel:4317".into()),
                BASE_URL_ENV => Some("  ".into()),
                _ => None,
            });
        assert_eq!(config.credential.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.credential.base_url, None);
        assert_eq!(config.telemetry.otlp_endpoint.as_deref(), Some("http://otel:4317"));
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let err = Config::default().with_env(no_env).credential().unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let config = Config::parse("[credential]\napi_key = \"   \"").unwrap();
        assert!(config.credential().is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/connectsafely.toml")).unwrap();
        assert_eq!(config.nodes, HashMap::new());
        assert_eq!(config.client, ClientSection::default());
    }
}
