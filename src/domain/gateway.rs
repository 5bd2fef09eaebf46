//! Gateway trait for the remote shortening service.

use crate::domain::entities::{ResolveResult, ShortenRequest, ShortenResult, StatsQuery, StatsResult};
use crate::error::GatewayError;
use async_trait::async_trait;

/// Remote shortening service, one method per endpoint.
///
/// Each call issues exactly one HTTP request. Implementations report raw
/// outcomes; choosing the user-facing fallback message is left to the workflow.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerGateway`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// `POST /shorten`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Status`] on a non-2xx answer and
    /// [`GatewayError::Transport`] when no readable answer was received.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, GatewayError>;

    /// `GET /stats/{code}`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::shorten`].
    async fn stats(&self, query: &StatsQuery) -> Result<StatsResult, GatewayError>;

    /// `GET /{code}`, without following the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Status`] on a 4xx/5xx answer and
    /// [`GatewayError::Transport`] when the answer is not a redirect.
    async fn resolve(&self, query: &StatsQuery) -> Result<ResolveResult, GatewayError>;
}
