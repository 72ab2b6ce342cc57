//! Simulated report-processing pipeline.
//!
//! There is no real extraction: the flow advances through fixed
//! checkpoints with a fixed delay before each, unconditionally
//! reaches 100, then appends a completed report to the workspace.
//! `ReportStatus::Failed` exists in the type and the badge rules
//! only; no run of this flow produces it.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::app_state::StateError;
use crate::models::enums::ReportStatus;
use crate::models::Report;
use crate::workspace::WorkspaceStore;

/// Widget timing between checkpoints.
pub const STEP_DELAY: Duration = Duration::from_secs(1);

/// Title used when the caller provides no symptoms hint.
pub const DEFAULT_REPORT_TITLE: &str = "Lab Report Analysis";

/// One checkpoint of the simulated pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingStep {
    pub message: &'static str,
    pub progress: u8,
}

/// The fixed checkpoints, in order.
pub const PROCESSING_STEPS: [ProcessingStep; 5] = [
    ProcessingStep {
        message: "Uploading file...",
        progress: 20,
    },
    ProcessingStep {
        message: "Extracting text from image...",
        progress: 40,
    },
    ProcessingStep {
        message: "Parsing medical data...",
        progress: 60,
    },
    ProcessingStep {
        message: "Generating LaTeX table...",
        progress: 80,
    },
    ProcessingStep {
        message: "Analysis complete!",
        progress: 100,
    },
];

/// Timestamp-derived report id, like the ids the bank already uses.
/// Not collision-proof; id uniqueness stays the caller's problem.
pub fn next_report_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Run the simulated pipeline to completion.
///
/// Sleeps `step_delay` before each checkpoint (pass `STEP_DELAY` for
/// widget timing; tests inject something shorter), reporting each one
/// through `progress_fn`, then synthesizes a completed report titled
/// by `symptoms_hint` (or the default title when the hint is empty),
/// appends it to the workspace and returns it.
pub async fn process_report(
    workspace: &WorkspaceStore,
    symptoms_hint: &str,
    step_delay: Duration,
    progress_fn: Option<&dyn Fn(ProcessingStep)>,
) -> Result<Report, StateError> {
    for step in PROCESSING_STEPS {
        tokio::time::sleep(step_delay).await;
        tracing::info!(progress = step.progress, message = step.message, "Processing step");
        if let Some(progress) = progress_fn {
            progress(step);
        }
    }

    let title = if symptoms_hint.is_empty() {
        DEFAULT_REPORT_TITLE.to_string()
    } else {
        symptoms_hint.to_string()
    };
    let report = Report::new(
        next_report_id(),
        title,
        Utc::now().date_naive(),
        ReportStatus::Completed,
    );

    workspace.add_report(report.clone())?;
    Ok(report)
}
