//! Short URL → usage statistics workflow.

use std::sync::Arc;

use super::{OutputRegion, parse_short_url, reject, run};
use crate::domain::ShortenerGateway;
use crate::domain::entities::StatsResult;
use crate::error::WorkflowError;
use tracing::debug;

pub const STATS_FALLBACK_MESSAGE: &str = "Error fetching stats.";

/// Looks up click statistics via `GET /stats/{code}`.
pub struct StatsWorkflow<G: ShortenerGateway + ?Sized> {
    gateway: Arc<G>,
    region: OutputRegion<StatsResult>,
}

impl<G: ShortenerGateway + ?Sized> StatsWorkflow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            region: OutputRegion::new(),
        }
    }

    pub fn region(&self) -> &OutputRegion<StatsResult> {
        &self.region
    }

    /// Fetches statistics for the short link named by `short_url`.
    ///
    /// `short_url` must be an absolute URL; its path (minus one leading `/`)
    /// is the code. An empty code is still sent.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::Validation`] for empty or unparsable input (no request sent)
    /// - [`WorkflowError::Service`] with the service `detail`, or
    ///   [`STATS_FALLBACK_MESSAGE`] when there is none
    /// - [`WorkflowError::Transport`] on network or decoding failure
    pub async fn submit(&self, short_url: &str) -> Result<StatsResult, WorkflowError> {
        self.region.set(Default::default());

        let query = match parse_short_url(short_url) {
            Ok(query) => query,
            Err(e) => {
                debug!(short_url, error = %e, "Rejected short URL");
                return reject(&self.region, e);
            }
        };

        debug!(code = %query.code, "Requesting stats");
        run(
            "stats",
            &self.region,
            STATS_FALLBACK_MESSAGE,
            self.gateway.stats(&query),
        )
        .await
    }
}
