//! Core execution domain for the ConnectSafely nodes.
//!
//! This crate contains every domain concept, newtype identifier, shared value
//! type, and error type used by the node catalogue, plus the one piece of
//! behaviour all nodes share: the per-item executor. Infrastructure crates
//! implement the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed ([`ApiTransport`], [`RequestPlanner`]); the
//! `api-client` and `nodes` crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ItemIndex`, `ProfileId`, etc.) |
//! | [`types`] | Result items, failure payloads, run summary |
//! | [`request`] | Outbound request model and body builder |
//! | [`credentials`] | API key, base URL, verification probe |
//! | [`errors`] | Error taxonomy and run-level abort |
//! | [`ports`] | Transport and planner traits |
//! | [`executor`] | Sequential per-item executor |

pub mod credentials;
pub mod errors;
pub mod executor;
pub mod identifiers;
pub mod ports;
pub mod request;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use credentials::{ApiCredential, ApiKey, DEFAULT_BASE_URL, VERIFY_PATH};
pub use errors::{CredentialError, ExecutionAborted, HttpFailure, NodeError};
pub use executor::{execute_items, ExecutionOptions, ExecutionOutput};
pub use identifiers::{
    AccountId, CampaignId, CompanyUrn, ExecutionRunId, GroupId, ItemIndex, ProfileId, ProfileUrn,
};
pub use ports::{ApiTransport, RequestPlanner};
pub use request::{ApiRequest, BaseUrl, HttpMethod, JsonBody};
pub use types::{ExecutionSummary, ItemFailure, ItemOutcome, ResultItem, Timestamp};
