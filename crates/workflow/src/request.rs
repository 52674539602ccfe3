//! Outbound request model.
//!
//! An [`ApiRequest`] is a transport-neutral description of one call to the
//! ConnectSafely API: method, where the base URL comes from, path, query pairs
//! and an optional JSON object body. Nodes build one per item; the
//! `api-client` crate turns it into an actual HTTP exchange.
//!
//! [`JsonBody`] is the builder every node uses to assemble bodies. Its
//! `optional_*` methods are the single place where "absent optional field"
//! is decided, so a blank optional parameter can never leak into a body as
//! `""` or `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use url::{Host, Url};

// ---------------------------------------------------------------------------
// Method and base URL
// ---------------------------------------------------------------------------

/// HTTP methods used by the ConnectSafely API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read operation; parameters travel in the query string.
    Get,
    /// Write or search operation; parameters travel in a JSON body.
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Where the scheme and host of a request come from.
///
/// Some nodes follow the base URL stored on the credential; others pin a
/// literal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "url")]
pub enum BaseUrl {
    /// Use [`crate::ApiCredential::base_url`].
    Credential,
    /// Use this literal base URL.
    Fixed(String),
}

impl BaseUrl {
    /// Returns the concrete base URL, falling back to `credential_base` for
    /// [`BaseUrl::Credential`].
    pub fn resolve<'a>(&'a self, credential_base: &'a str) -> &'a str {
        match self {
            Self::Credential => credential_base,
            Self::Fixed(url) => url,
        }
    }

    /// Returns `true` when the base URL is a fixed loopback or unspecified
    /// address (`localhost`, `127.0.0.0/8`, `::1`, `0.0.0.0`, `::`).
    pub fn is_loopback(&self) -> bool {
        let Self::Fixed(url) = self else {
            return false;
        };
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        match parsed.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
            Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
            None => false,
        }
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credential => f.write_str("<credential base URL>"),
            Self::Fixed(url) => f.write_str(url),
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// One outbound call, fully determined by the resolved parameters of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Base URL source.
    pub base: BaseUrl,
    /// Absolute path beginning with `/`, path segments already substituted.
    pub path: String,
    /// Query pairs in insertion order. List values appear as repeated keys.
    pub query: Vec<(String, String)>,
    /// JSON object body, `None` for body-less requests.
    pub body: Option<Map<String, Value>>,
}

impl ApiRequest {
    /// A `GET` request without query parameters.
    pub fn get(base: BaseUrl, path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            base,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A `POST` request carrying `body`.
    pub fn post(base: BaseUrl, path: impl Into<String>, body: JsonBody) -> Self {
        Self {
            method: HttpMethod::Post,
            base,
            path: path.into(),
            query: Vec::new(),
            body: Some(body.into_map()),
        }
    }

    /// Appends a query pair.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Appends a query pair only when `value` is present.
    #[must_use]
    pub fn optional_query(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Appends one query pair per element of `values`, all under `key`.
    #[must_use]
    pub fn query_list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.query
            .extend(values.into_iter().map(|v| (key.to_owned(), v.to_string())));
        self
    }

    /// Full URL (without query string) against `credential_base`.
    pub fn url(&self, credential_base: &str) -> String {
        let base = self.base.resolve(credential_base).trim_end_matches('/');
        format!("{base}{}", self.path)
    }
}

// ---------------------------------------------------------------------------
// Body builder
// ---------------------------------------------------------------------------

/// Builder for a JSON object request body.
///
/// Keys come out sorted (`serde_json`'s default map); upstream does not depend
/// on key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    /// An empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sets `key`.
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Sets `key` only when `value` is `Some`.
    #[must_use]
    pub fn optional(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    /// Sets `key` only when `value` is a non-empty string.
    #[must_use]
    pub fn optional_text(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.field(key, value)
        }
    }

    /// Sets `key` only when `value` is non-zero.
    #[must_use]
    pub fn optional_nonzero(self, key: &str, value: &Number) -> Self {
        if value.as_f64() == Some(0.0) {
            self
        } else {
            self.field(key, Value::Number(value.clone()))
        }
    }

    /// Consumes the builder.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
