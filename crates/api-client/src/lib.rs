//! ConnectSafely REST transport.
//!
//! Implements the [`workflow::ApiTransport`] trait over HTTPS with `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL resolution, authentication headers, status
//! handling and payload decoding live here. The `workflow` and `nodes`
//! crates see only [`workflow::ApiTransport`].
//!
//! ## Behaviour
//!
//! - Every call carries `Authorization: Bearer <key>`,
//!   `Content-Type: application/json` and `Accept: application/json`.
//! - Query pairs are sent in order; list values appear as repeated keys.
//! - A 2xx response yields its JSON body (`null` when empty, a JSON string
//!   when the body is not JSON).
//! - Any other status becomes a [`workflow::HttpFailure`] carrying the status
//!   and the decoded body. Connection errors and timeouts become a failure
//!   with neither.
//! - No retries.

pub mod client;

pub use client::{ClientConfig, ClientError, ConnectSafelyClient};
