//! The per-item executor shared by every node.
//!
//! For each input item, in order: plan the request, send it, and record either
//! the payload or the failure under the item's index. Only one request is ever
//! in flight; the next item is not planned until the previous item's result has
//! been recorded.
//!
//! Upstream failures are absorbed into the output when continue-on-failure is
//! set. Anything else (and any upstream failure when the flag is clear) stops
//! the run: the results gathered so far travel back inside
//! [`ExecutionAborted`] and no later item is attempted.

use serde_json::Value;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::{
    ApiTransport, ExecutionAborted, ExecutionRunId, ExecutionSummary, ItemIndex, NodeError,
    RequestPlanner, ResultItem, Timestamp,
};

/// Run-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Display label of the node, used in spans and abort messages.
    pub label: String,
    /// Record upstream failures as results instead of aborting.
    pub continue_on_fail: bool,
}

impl ExecutionOptions {
    /// Options for a node labelled `label`, continue-on-failure off.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            continue_on_fail: false,
        }
    }

    /// Sets the continue-on-failure flag.
    #[must_use]
    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutput {
    /// One result per input item, in input order.
    pub results: Vec<ResultItem>,
    /// Counters and timing.
    pub summary: ExecutionSummary,
}

/// Applies `planner` + `transport` to every item in `items`.
///
/// # Errors
///
/// Returns [`ExecutionAborted`] at the first item whose planning fails, or
/// whose request fails while `options.continue_on_fail` is `false`.
pub async fn execute_items<P, T>(
    planner: &P,
    transport: &T,
    items: &[Value],
    options: &ExecutionOptions,
) -> Result<ExecutionOutput, ExecutionAborted>
where
    P: RequestPlanner + ?Sized,
    T: ApiTransport + ?Sized,
{
    let run_id = ExecutionRunId::new_random();
    let span = info_span!(
        "node_run",
        run_id = %run_id,
        node = %options.label,
        items = items.len(),
        continue_on_fail = options.continue_on_fail,
    );
    run(run_id, planner, transport, items, options)
        .instrument(span)
        .await
}

async fn run<P, T>(
    run_id: ExecutionRunId,
    planner: &P,
    transport: &T,
    items: &[Value],
    options: &ExecutionOptions,
) -> Result<ExecutionOutput, ExecutionAborted>
where
    P: RequestPlanner + ?Sized,
    T: ApiTransport + ?Sized,
{
    let started_at = Timestamp::now();
    let mut results = Vec::with_capacity(items.len());
    let mut failed = 0usize;

    for (position, item) in items.iter().enumerate() {
        let index = ItemIndex::new(position);

        let abort = |error: NodeError, completed: Vec<ResultItem>| ExecutionAborted {
            run_id,
            label: options.label.clone(),
            failed_item: index,
            error,
            completed,
        };

        let attempt = match planner.plan(index, item) {
            Ok(request) => {
                debug!(
                    item = %index,
                    method = %request.method,
                    path = %request.path,
                    base = %request.base,
                    "sending request"
                );
                transport.send(&request).await.map_err(NodeError::from)
            }
            Err(error) => Err(error),
        };

        match attempt {
            Ok(payload) => results.push(ResultItem::success(index, payload)),
            Err(error) if options.continue_on_fail && error.is_continuable() => {
                warn!(item = %index, %error, "item failed; continuing");
                failed += 1;
                results.push(ResultItem::failure(index, error));
            }
            Err(error) => {
                warn!(item = %index, %error, "item failed; aborting run");
                return Err(abort(error, results));
            }
        }
    }

    let summary = ExecutionSummary {
        run_id,
        started_at,
        finished_at: Timestamp::now(),
        succeeded: results.len() - failed,
        failed,
    };
    info!(succeeded = summary.succeeded, failed = summary.failed, "run complete");

    Ok(ExecutionOutput { results, summary })
}
