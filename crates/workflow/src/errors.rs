//! Error taxonomy for node execution.
//!
//! Three kinds of failure can occur while a node processes an item:
//!
//! | Kind | Type | Raised | Subject to continue-on-failure |
//! |------|------|--------|--------------------------------|
//! | Validation | [`NodeError::Validation`], [`NodeError::MissingParameter`], [`NodeError::InvalidParameter`] | before any network call | no |
//! | Upstream HTTP | [`NodeError::Http`] wrapping [`HttpFailure`] | by the transport | yes |
//! | Unknown operation | [`NodeError::UnknownOperation`], [`NodeError::UnknownResource`] | while dispatching | no |
//!
//! [`ExecutionAborted`] is what a run returns when it stops early. It keeps the
//! results produced before the failing item so nothing already accumulated is
//! discarded.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{ExecutionRunId, ItemIndex, ResultItem};

// ---------------------------------------------------------------------------
// Upstream HTTP failures
// ---------------------------------------------------------------------------

/// A request that reached (or tried to reach) the upstream API and failed.
///
/// Produced for non-2xx responses, in which case `status` and usually `body`
/// are populated, and for transport failures (connection refused, timeout,
/// undecodable payload), in which case both are `None`.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct HttpFailure {
    /// Human-readable description, e.g. `"Request failed with status code 404"`.
    pub message: String,

    /// HTTP status code returned by the upstream API, if a response arrived.
    pub status: Option<u16>,

    /// Raw upstream error body. JSON bodies are kept structured; anything else
    /// is stored as a JSON string.
    pub body: Option<Value>,
}

impl HttpFailure {
    /// A failure that never produced an HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// A non-2xx response.
    pub fn status(status: u16, body: Option<Value>) -> Self {
        Self {
            message: format!("Request failed with status code {status}"),
            status: Some(status),
            body,
        }
    }

    /// The most specific message available: the body's `message` field, then
    /// its `error` field, then the transport message.
    pub fn api_message(&self) -> &str {
        let from_body = |key: &str| {
            self.body
                .as_ref()
                .and_then(|b| b.get(key))
                .and_then(Value::as_str)
        };
        from_body("message")
            .or_else(|| from_body("error"))
            .unwrap_or(&self.message)
    }

    /// Pretty-printed upstream body, or the message when there is no body.
    pub fn details(&self) -> String {
        match &self.body {
            Some(body) => serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()),
            None => self.message.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-item errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while planning or performing one item's request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
    /// A parameter value failed a domain check (e.g. malformed post URL).
    #[error("{message}")]
    Validation {
        /// User-facing description of the problem.
        message: String,
    },

    /// A parameter marked as required resolved to nothing.
    #[error("Missing required parameter '{name}'")]
    MissingParameter {
        /// Field name as it appears in the node schema.
        name: String,
    },

    /// A parameter resolved to a value of the wrong JSON type.
    #[error("Parameter '{name}' must be {expected}")]
    InvalidParameter {
        /// Field name as it appears in the node schema.
        name: String,
        /// Expected kind, e.g. `"a string"`.
        expected: &'static str,
    },

    /// The operation tag does not belong to the node.
    #[error("Unknown operation: {operation}")]
    UnknownOperation {
        /// The unrecognised tag.
        operation: String,
    },

    /// The resource tag does not belong to the node.
    #[error("Unknown resource: {resource}")]
    UnknownResource {
        /// The unrecognised tag.
        resource: String,
    },

    /// The upstream call failed.
    #[error(transparent)]
    Http(#[from] HttpFailure),
}

impl NodeError {
    /// Creates a [`NodeError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` for failures the continue-on-failure policy may absorb.
    ///
    /// Only upstream HTTP failures qualify. Validation and dispatch errors
    /// indicate a misconfigured node and always abort the run.
    pub fn is_continuable(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

// ---------------------------------------------------------------------------
// Credential errors
// ---------------------------------------------------------------------------

/// Problems with the stored credential, detected when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No API key was supplied.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The base URL is not an absolute http(s) URL.
    #[error("Base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

// ---------------------------------------------------------------------------
// Run-level abort
// ---------------------------------------------------------------------------

/// A run that stopped at `failed_item` without continue-on-failure (or on an
/// error the policy never absorbs).
///
/// `completed` holds every result produced before the failing item, in order.
#[derive(Debug)]
pub struct ExecutionAborted {
    /// Run that was aborted.
    pub run_id: ExecutionRunId,
    /// Display label of the node, used as the message prefix.
    pub label: String,
    /// Index of the item whose attempt failed.
    pub failed_item: ItemIndex,
    /// The failure itself.
    pub error: NodeError,
    /// Results accumulated before the failure.
    pub completed: Vec<ResultItem>,
}

impl std::fmt::Display for ExecutionAborted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            NodeError::Http(failure) => {
                let status = failure
                    .status
                    .map_or_else(|| "Unknown".to_owned(), |s| s.to_string());
                write!(
                    f,
                    "{} API Error (Status: {}): {}\n\nFull error details: {}",
                    self.label,
                    status,
                    failure.api_message(),
                    failure.details()
                )
            }
            other => write!(f, "{} (item {}): {}", self.label, self.failed_item, other),
        }
    }
}

impl std::error::Error for ExecutionAborted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn aborted(error: NodeError) -> ExecutionAborted {
        ExecutionAborted {
            run_id: ExecutionRunId::new_random(),
            label: "LinkedIn Posts".into(),
            failed_item: ItemIndex::new(2),
            error,
            completed: Vec::new(),
        }
    }

    #[test]
    fn api_message_prefers_body_message_then_error_field() {
        let with_message = HttpFailure::status(400, Some(json!({"message": "bad url", "error": "x"})));
        assert_eq!(with_message.api_message(), "bad url");

        let with_error = HttpFailure::status(401, Some(json!({"error": "unauthorized"})));
        assert_eq!(with_error.api_message(), "unauthorized");

        let plain = HttpFailure::status(500, Some(json!("oops")));
        assert_eq!(plain.api_message(), "Request failed with status code 500");
    }

    #[test]
    fn http_abort_message_carries_status_and_body() {
        let err = aborted(NodeError::Http(HttpFailure::status(
            404,
            Some(json!({"message": "Post not found"})),
        )));
        let text = err.to_string();
        assert!(text.starts_with("LinkedIn Posts API Error (Status: 404): Post not found"));
        assert!(text.contains("Full error details: {\n  \"message\": \"Post not found\"\n}"));
    }

    #[test]
    fn transport_abort_reports_unknown_status() {
        let err = aborted(NodeError::Http(HttpFailure::transport("connection refused")));
        assert_eq!(
            err.to_string(),
            "LinkedIn Posts API Error (Status: Unknown): connection refused\n\nFull error details: connection refused"
        );
    }

    #[test]
    fn validation_abort_names_the_item() {
        let err = aborted(NodeError::validation("Post URL is required"));
        assert_eq!(err.to_string(), "LinkedIn Posts (item 2): Post URL is required");
    }

    #[test]
    fn only_http_failures_are_continuable() {
        assert!(NodeError::Http(HttpFailure::transport("x")).is_continuable());
        assert!(!NodeError::validation("x").is_continuable());
        assert!(!NodeError::UnknownOperation { operation: "x".into() }.is_continuable());
    }
}
