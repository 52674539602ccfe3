//! Port traits implemented outside this crate.
//!
//! | Trait | Implemented by | Purpose |
//! |-------|----------------|---------|
//! | [`ApiTransport`] | `api-client` (`reqwest`), test fakes | perform one [`ApiRequest`] |
//! | [`RequestPlanner`] | `nodes` | resolve parameters and build the request for one item |

use async_trait::async_trait;
use serde_json::Value;

use crate::{ApiRequest, HttpFailure, ItemIndex, NodeError};

/// Performs outbound calls against the ConnectSafely API.
///
/// Implementations add authentication and the JSON content headers, resolve
/// [`crate::BaseUrl::Credential`] against their credential, and map any
/// non-2xx status or transport error to an [`HttpFailure`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends `request` and returns the decoded response payload.
    async fn send(&self, request: &ApiRequest) -> Result<Value, HttpFailure>;
}

/// Turns one input item into the request a node wants to make for it.
///
/// Planning covers parameter resolution, validation, and operation dispatch.
/// It must not perform I/O.
pub trait RequestPlanner: Send + Sync {
    /// Builds the request for the item at `index`.
    fn plan(&self, index: ItemIndex, item: &Value) -> Result<ApiRequest, NodeError>;
}
