//! Shared value types for node execution results.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the data a run produces: one [`ResultItem`] per processed input item and an
//! [`ExecutionSummary`] for the run as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{ExecutionRunId, HttpFailure, ItemIndex, NodeError};

// ---------------------------------------------------------------------------
// Per-item results
// ---------------------------------------------------------------------------

/// Failure payload recorded for an item when continue-on-failure absorbed an
/// upstream error.
///
/// Serialises as `{"error": ..., "statusCode": ..., "apiError": ...}`; the
/// status and upstream body are left out when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFailure {
    /// Human-readable error message.
    #[serde(rename = "error")]
    pub message: String,

    /// Upstream HTTP status, when a response was received.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status_code: Option<u16>,

    /// Upstream error body, when one was received.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_error: Option<Value>,
}

impl From<NodeError> for ItemFailure {
    fn from(error: NodeError) -> Self {
        match error {
            NodeError::Http(failure) => failure.into(),
            other => Self {
                message: other.to_string(),
                status_code: None,
                api_error: None,
            },
        }
    }
}

impl From<HttpFailure> for ItemFailure {
    fn from(failure: HttpFailure) -> Self {
        Self {
            message: failure.message,
            status_code: failure.status,
            api_error: failure.body,
        }
    }
}

/// What happened to one item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// The upstream response payload, passed through untouched.
    Success(Value),
    /// An absorbed upstream failure.
    Failure(ItemFailure),
}

/// One output record, tagged with the index of the input item it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    /// Index of the originating input item.
    pub source_index: ItemIndex,
    /// Payload or failure.
    pub outcome: ItemOutcome,
}

impl ResultItem {
    /// A successful result.
    pub fn success(source_index: ItemIndex, payload: Value) -> Self {
        Self {
            source_index,
            outcome: ItemOutcome::Success(payload),
        }
    }

    /// An absorbed failure.
    pub fn failure(source_index: ItemIndex, failure: impl Into<ItemFailure>) -> Self {
        Self {
            source_index,
            outcome: ItemOutcome::Failure(failure.into()),
        }
    }

    /// Returns `true` for [`ItemOutcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Failure(_))
    }

    /// The payload written to the `json` field of the host item.
    pub fn payload(&self) -> Value {
        match &self.outcome {
            ItemOutcome::Success(payload) => payload.clone(),
            ItemOutcome::Failure(failure) => {
                serde_json::to_value(failure).unwrap_or_else(|_| json!({"error": failure.message}))
            }
        }
    }
}

impl Serialize for ResultItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            json: WirePayload<'a>,
            paired_item: PairedItem,
        }

        #[derive(Serialize)]
        #[serde(untagged)]
        enum WirePayload<'a> {
            Success(&'a Value),
            Failure(&'a ItemFailure),
        }

        #[derive(Serialize)]
        struct PairedItem {
            item: ItemIndex,
        }

        let json = match &self.outcome {
            ItemOutcome::Success(payload) => WirePayload::Success(payload),
            ItemOutcome::Failure(failure) => WirePayload::Failure(failure),
        };
        Wire {
            json,
            paired_item: PairedItem {
                item: self.source_index,
            },
        }
        .serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Counters and timing for a run that processed every item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    /// Run identifier.
    pub run_id: ExecutionRunId,
    /// When the first item started.
    pub started_at: Timestamp,
    /// When the last item finished.
    pub finished_at: Timestamp,
    /// Items whose request succeeded.
    pub succeeded: usize,
    /// Items whose failure was absorbed by continue-on-failure.
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serialises_as_host_item() {
        let item = ResultItem::success(ItemIndex::new(3), json!({"ok": true}));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"json": {"ok": true}, "pairedItem": {"item": 3}})
        );
    }

    #[test]
    fn failure_omits_unknown_status_and_body() {
        let item = ResultItem::failure(ItemIndex::new(0), HttpFailure::transport("timed out"));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"json": {"error": "timed out"}, "pairedItem": {"item": 0}})
        );
    }

    #[test]
    fn node_error_failure_keeps_http_details() {
        let error = NodeError::from(HttpFailure::status(503, Some(json!("down"))));
        let failure = ItemFailure::from(error);
        assert_eq!(failure.status_code, Some(503));
        assert_eq!(failure.api_error, Some(json!("down")));
        assert_eq!(failure.message, "Request failed with status code 503");
    }

    #[test]
    fn failure_keeps_status_and_upstream_body() {
        let failure = HttpFailure::status(404, Some(json!({"message": "not found"})));
        let item = ResultItem::failure(ItemIndex::new(1), failure);
        assert!(item.is_failure());
        assert_eq!(
            item.payload(),
            json!({
                "error": "Request failed with status code 404",
                "statusCode": 404,
                "apiError": {"message": "not found"}
            })
        );
    }
}
