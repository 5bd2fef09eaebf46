//! Long URL → short URL workflow.

use std::sync::Arc;

use super::{OutputRegion, reject, run};
use crate::domain::ShortenerGateway;
use crate::domain::entities::{ShortenRequest, ShortenResult};
use crate::error::WorkflowError;
use tracing::debug;
use validator::Validate;

pub const EMPTY_LONG_URL_MESSAGE: &str = "Please enter a valid URL.";
pub const SHORTEN_FALLBACK_MESSAGE: &str = "Error shortening URL.";

/// Submits long URLs to `POST /shorten` and tracks the outcome.
pub struct ShortenWorkflow<G: ShortenerGateway + ?Sized> {
    gateway: Arc<G>,
    region: OutputRegion<ShortenResult>,
}

impl<G: ShortenerGateway + ?Sized> ShortenWorkflow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            region: OutputRegion::new(),
        }
    }

    pub fn region(&self) -> &OutputRegion<ShortenResult> {
        &self.region
    }

    /// Shortens `long_url`.
    ///
    /// The input is sent as typed; only empty or whitespace-only input is
    /// rejected locally.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::Validation`] for blank input (no request sent)
    /// - [`WorkflowError::Service`] with the service `detail`, or
    ///   [`SHORTEN_FALLBACK_MESSAGE`] when there is none
    /// - [`WorkflowError::Transport`] on network or decoding failure
    pub async fn submit(&self, long_url: &str) -> Result<ShortenResult, WorkflowError> {
        self.region.set(Default::default());

        let request = ShortenRequest::new(long_url);
        if request.validate().is_err() {
            debug!("Rejected blank long URL");
            return reject(&self.region, WorkflowError::validation(EMPTY_LONG_URL_MESSAGE));
        }

        debug!(long_url, "Submitting shorten request");
        run(
            "shorten",
            &self.region,
            SHORTEN_FALLBACK_MESSAGE,
            self.gateway.shorten(&request),
        )
        .await
    }
}
