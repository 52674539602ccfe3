//! The ConnectSafely node catalogue.
//!
//! Each node pairs a declarative parameter schema with a request builder.
//! Running a node means handing it to [`run_node`] together with a
//! [`ParameterSource`] and an [`workflow::ApiTransport`]; the shared executor
//! in the `workflow` crate does the rest.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Nodes translate parameters into
//! [`workflow::ApiRequest`]s. They perform no I/O and contain no transport
//! logic.
//!
//! ## Catalogue
//!
//! | Registry name | Type | Base URL |
//! |---------------|------|----------|
//! | `connectSafely` | [`ConnectSafely`] | credential |
//! | `connectSafelyLinkedIn` | [`ConnectSafelyLinkedIn`] | `https://api.connectsafely.ai` |
//! | `linkedInPosts` | [`LinkedInPosts`] | `http://localhost:3005` |
//! | `linkedInActions` | [`LinkedInActions`] | `https://api.connectsafely.ai` |
//! | `linkedInProfiles` | [`LinkedInProfiles`] | `http://localhost:3005` |
//! | `connectSafelyAnalytics` | [`ConnectSafelyAnalytics`] | credential |
//! | `linkedInAutomation` | [`LinkedInAutomation`] | credential |

pub mod analytics;
pub mod automation;
pub mod connect_safely;
pub mod connect_safely_linkedin;
pub mod linkedin;
pub mod linkedin_actions;
pub mod linkedin_posts;
pub mod linkedin_profiles;
pub mod node;
pub mod parameters;
pub mod registry;
pub mod schema;

pub use analytics::ConnectSafelyAnalytics;
pub use automation::LinkedInAutomation;
pub use connect_safely::ConnectSafely;
pub use connect_safely_linkedin::ConnectSafelyLinkedIn;
pub use linkedin_actions::LinkedInActions;
pub use linkedin_posts::LinkedInPosts;
pub use linkedin_profiles::LinkedInProfiles;
pub use node::{run_node, Node, NodePlanner};
pub use parameters::{ParameterSource, Parameters, StaticParameters};
pub use registry::{NodeRegistry, RegistryError, NODE_NAMES};
pub use schema::{DisplayCondition, FieldKind, FieldSpec, NodeDescription, OptionSpec};
