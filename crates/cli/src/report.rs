//! What `run` prints and whether it fails.

use anyhow::Result;
use workflow::{ExecutionAborted, ExecutionOutput};

/// Stdout text for a run, plus the abort message when the run stopped early.
#[derive(Debug)]
pub struct RunReport {
    pub stdout: String,
    pub abort: Option<String>,
}

/// Results (partial ones for an aborted run) as a pretty JSON array.
pub fn report(outcome: &Result<ExecutionOutput, ExecutionAborted>) -> Result<RunReport> {
    let (results, abort) = match outcome {
        Ok(output) => (&output.results, None),
        Err(aborted) => (&aborted.completed, Some(aborted.to_string())),
    };
    Ok(RunReport {
        stdout: serde_json::to_string_pretty(results)?,
        abort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use workflow::{
        ExecutionRunId, ExecutionSummary, HttpFailure, ItemIndex, NodeError, ResultItem, Timestamp,
    };

    fn done(index: usize) -> ResultItem {
        ResultItem::success(ItemIndex::new(index), json!({"id": index}))
    }

    #[test]
    fn finished_run_prints_every_result() {
        let output = ExecutionOutput {
            results: vec![done(0), done(1)],
            summary: ExecutionSummary {
                run_id: ExecutionRunId::new_random(),
                started_at: Timestamp::now(),
                finished_at: Timestamp::now(),
                succeeded: 2,
                failed: 0,
            },
        };

        let report = report(&Ok(output)).unwrap();

        assert!(report.abort.is_none());
        let printed: Value = serde_json::from_str(&report.stdout).unwrap();
        assert_eq!(printed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn aborted_run_prints_partial_results_then_fails() {
        let aborted = ExecutionAborted {
            run_id: ExecutionRunId::new_random(),
            label: "LinkedIn Actions".into(),
            failed_item: ItemIndex::new(1),
            error: NodeError::Http(HttpFailure::status(429, Some(json!({"message": "Slow down"})))),
            completed: vec![done(0)],
        };

        let report = report(&Err(aborted)).unwrap();

        let printed: Value = serde_json::from_str(&report.stdout).unwrap();
        assert_eq!(printed, json!([{"json": {"id": 0}, "pairedItem": {"item": 0}}]));
        let abort = report.abort.unwrap();
        assert!(abort.starts_with("LinkedIn Actions API Error (Status: 429): Slow down"));
    }
}
