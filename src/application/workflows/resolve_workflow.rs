//! Short URL → redirect target workflow.

use std::sync::Arc;

use super::{OutputRegion, parse_short_url, reject, run};
use crate::domain::ShortenerGateway;
use crate::domain::entities::ResolveResult;
use crate::error::WorkflowError;
use tracing::debug;

pub const RESOLVE_FALLBACK_MESSAGE: &str = "Error resolving short URL.";

/// Asks the service where a short link redirects via `GET /{code}`.
///
/// The service counts this request as a click.
pub struct ResolveWorkflow<G: ShortenerGateway + ?Sized> {
    gateway: Arc<G>,
    region: OutputRegion<ResolveResult>,
}

impl<G: ShortenerGateway + ?Sized> ResolveWorkflow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            region: OutputRegion::new(),
        }
    }

    pub fn region(&self) -> &OutputRegion<ResolveResult> {
        &self.region
    }

    /// Resolves the short link named by `short_url`.
    ///
    /// # Errors
    ///
    /// Same input rules as [`super::StatsWorkflow::submit`]. Expired links
    /// surface as [`WorkflowError::Service`] with the service's message.
    pub async fn submit(&self, short_url: &str) -> Result<ResolveResult, WorkflowError> {
        self.region.set(Default::default());

        let query = match parse_short_url(short_url) {
            Ok(query) => query,
            Err(e) => {
                debug!(short_url, error = %e, "Rejected short URL");
                return reject(&self.region, e);
            }
        };

        debug!(code = %query.code, "Resolving short link");
        run(
            "resolve",
            &self.region,
            RESOLVE_FALLBACK_MESSAGE,
            self.gateway.resolve(&query),
        )
        .await
    }
}
