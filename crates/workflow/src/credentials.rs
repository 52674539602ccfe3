//! The stored ConnectSafely credential.
//!
//! A credential is an API key plus the base URL of the API it unlocks. It
//! supplies the `Authorization` header for every call and describes the
//! verification probe used to check a freshly stored key.

use crate::{ApiRequest, BaseUrl, CredentialError};

/// Base URL used when the credential does not specify one.
pub const DEFAULT_BASE_URL: &str = "https://api.connectsafely.ai";

/// Path of the verification probe.
pub const VERIFY_PATH: &str = "/v1/auth/verify";

/// A ConnectSafely API key.
///
/// The key never appears in `Debug` output so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, rejecting empty or whitespace-only values.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let v = value.into();
        if v.trim().is_empty() {
            Err(CredentialError::EmptyApiKey)
        } else {
            Ok(Self(v))
        }
    }

    /// Returns the secret. Call sites should only pass it to a header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// API key and base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredential {
    api_key: ApiKey,
    base_url: String,
}

impl ApiCredential {
    /// Creates a credential. `base_url` defaults to [`DEFAULT_BASE_URL`]; a
    /// trailing slash is stripped.
    pub fn new(api_key: ApiKey, base_url: Option<&str>) -> Result<Self, CredentialError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CredentialError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Base URL for nodes that follow the credential.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.api_key.expose())
    }

    /// The `GET /v1/auth/verify` probe, independent of any node.
    pub fn verification_request() -> ApiRequest {
        ApiRequest::get(BaseUrl::Credential, VERIFY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpMethod;

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(ApiKey::new("  "), Err(CredentialError::EmptyApiKey));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let key = ApiKey::new("sk-secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        let cred = ApiCredential::new(key, None).unwrap();
        assert!(!format!("{cred:?}").contains("sk-secret"));
    }

    #[test]
    fn base_url_defaults_and_is_normalised() {
        let key = ApiKey::new("k").unwrap();
        let cred = ApiCredential::new(key.clone(), None).unwrap();
        assert_eq!(cred.base_url(), DEFAULT_BASE_URL);

        let cred = ApiCredential::new(key.clone(), Some("https://staging.example.com/")).unwrap();
        assert_eq!(cred.base_url(), "https://staging.example.com");

        assert_eq!(
            ApiCredential::new(key, Some("ftp://nope")),
            Err(CredentialError::InvalidBaseUrl("ftp://nope".into()))
        );
    }

    #[test]
    fn bearer_header_and_probe() {
        let cred = ApiCredential::new(ApiKey::new("abc").unwrap(), None).unwrap();
        assert_eq!(cred.authorization_header(), "Bearer abc");

        let probe = ApiCredential::verification_request();
        assert_eq!(probe.method, HttpMethod::Get);
        assert_eq!(probe.url(cred.base_url()), "https://api.connectsafely.ai/v1/auth/verify");
    }
}
