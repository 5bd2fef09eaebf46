//! Request/response workflows.
//!
//! Every workflow follows the same sequence:
//!
//! 1. Reset its [`OutputRegion`] to `Idle` (clears the previous outcome)
//! 2. Validate input locally; a failure goes straight to `Error`, no request is sent
//! 3. Switch to `Loading` and await exactly one gateway call
//! 4. Settle into `Success` or `Error`, which also hides the loading indicator
//!
//! Workflows never share a region. Overlapping submissions on the same
//! workflow are not coordinated: the last one to settle wins the region.

mod output_region;
pub mod resolve_workflow;
pub mod shorten_workflow;
pub mod stats_workflow;

pub use output_region::OutputRegion;
pub use resolve_workflow::ResolveWorkflow;
pub use shorten_workflow::ShortenWorkflow;
pub use stats_workflow::StatsWorkflow;

use crate::domain::WorkflowState;
use crate::domain::entities::StatsQuery;
use crate::error::{GatewayError, WorkflowError};
use std::future::Future;
use tracing::{info, warn};

pub const EMPTY_SHORT_URL_MESSAGE: &str = "Please enter a short URL.";
pub const INVALID_SHORT_URL_MESSAGE: &str = "Invalid URL format.";

/// Records a local validation failure. The loading indicator is never shown.
fn reject<T>(region: &OutputRegion<T>, error: WorkflowError) -> Result<T, WorkflowError> {
    region.set(WorkflowState::Error(error.clone()));
    Err(error)
}

/// Shows the loading indicator, awaits `call`, then settles the region.
///
/// The region leaves `Loading` on every path, including transport and
/// decoding failures.
async fn run<T, F>(
    workflow: &'static str,
    region: &OutputRegion<T>,
    fallback: &str,
    call: F,
) -> Result<T, WorkflowError>
where
    T: Clone,
    F: Future<Output = Result<T, GatewayError>>,
{
    region.set(WorkflowState::Loading);

    let outcome = call
        .await
        .map_err(|e| WorkflowError::from_gateway(e, fallback));

    match &outcome {
        Ok(_) => info!(workflow, "Workflow succeeded"),
        Err(e) => warn!(workflow, code = e.code(), error = %e, "Workflow failed"),
    }

    region.set(outcome.clone().into());
    outcome
}

/// Parses user input naming a short link into a [`StatsQuery`].
///
/// # Errors
///
/// Returns [`WorkflowError::Validation`] for empty input or input that is
/// not an absolute URL.
pub fn parse_short_url(input: &str) -> Result<StatsQuery, WorkflowError> {
    if input.is_empty() {
        return Err(WorkflowError::validation(EMPTY_SHORT_URL_MESSAGE));
    }

    StatsQuery::from_short_url(input)
        .map_err(|_| WorkflowError::validation(INVALID_SHORT_URL_MESSAGE))
}
