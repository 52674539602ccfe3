//! The [`Node`] trait and the glue that runs a node through the executor.

use serde_json::Value;
use tracing::warn;
use workflow::{
    execute_items, ApiRequest, ApiTransport, ExecutionAborted, ExecutionOptions, ExecutionOutput,
    ItemIndex, NodeError, RequestPlanner,
};

use crate::parameters::{ParameterSource, Parameters};
use crate::schema::NodeDescription;

/// A configurable unit that turns one item's parameters into one API request.
///
/// Implementations are pure: all I/O goes through the [`ApiTransport`] handed
/// to [`run_node`].
pub trait Node: Send + Sync {
    /// Schema, labels and base URL.
    fn description(&self) -> &NodeDescription;

    /// Validates the parameters and builds the request for one item.
    ///
    /// # Errors
    ///
    /// Validation errors for missing or malformed parameters and
    /// [`NodeError::UnknownOperation`] / [`NodeError::UnknownResource`] for
    /// selectors the node does not offer.
    fn build_request(&self, parameters: &Parameters<'_>) -> Result<ApiRequest, NodeError>;
}

/// Adapts a [`Node`] and a [`ParameterSource`] to the executor's
/// [`RequestPlanner`] port.
pub struct NodePlanner<'a, N: ?Sized, S: ?Sized> {
    node: &'a N,
    source: &'a S,
}

impl<'a, N, S> NodePlanner<'a, N, S>
where
    N: Node + ?Sized,
    S: ParameterSource + ?Sized,
{
    pub fn new(node: &'a N, source: &'a S) -> Self {
        Self { node, source }
    }
}

impl<N, S> RequestPlanner for NodePlanner<'_, N, S>
where
    N: Node + ?Sized,
    S: ParameterSource + ?Sized,
{
    fn plan(&self, index: ItemIndex, item: &Value) -> Result<ApiRequest, NodeError> {
        let values = self.source.parameters(index, item)?;
        let parameters = Parameters::new(self.node.description(), values);
        self.node.build_request(&parameters)
    }
}

/// Runs `node` over `items`, one request per item, in order.
///
/// The node's display name labels the run and prefixes abort messages.
///
/// # Errors
///
/// See [`execute_items`].
pub async fn run_node<N, S, T>(
    node: &N,
    source: &S,
    transport: &T,
    items: &[Value],
    continue_on_fail: bool,
) -> Result<ExecutionOutput, ExecutionAborted>
where
    N: Node + ?Sized,
    S: ParameterSource + ?Sized,
    T: ApiTransport + ?Sized,
{
    let description = node.description();
    if description.base_url.is_loopback() {
        warn!(
            node = description.name,
            base_url = %description.base_url,
            "node targets a loopback address; override [nodes.{}] base_url for production use",
            description.name
        );
    }

    let planner = NodePlanner::new(node, source);
    let options = ExecutionOptions::new(description.display_name).continue_on_fail(continue_on_fail);
    execute_items(&planner, transport, items, &options).await
}
