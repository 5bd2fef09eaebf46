//! reqwest-backed gateway to the shortening service.

use crate::domain::ShortenerGateway;
use crate::domain::entities::{ResolveResult, ShortenRequest, ShortenResult, StatsQuery, StatsResult};
use crate::error::GatewayError;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header, redirect};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// HTTP implementation of [`ShortenerGateway`].
///
/// `shorten` and `stats` follow redirects, so a service that canonicalises
/// paths (e.g. `/stats/` → `/stats`) still gets to answer. `resolve` uses a
/// second client that never follows them, so `GET /{code}` can report its
/// target. No timeout or retry is configured: a call either settles or reports
/// the transport failure.
#[derive(Debug, Clone)]
pub struct HttpShortenerGateway {
    client: Client,
    resolve_client: Client,
    base_url: String,
}

impl HttpShortenerGateway {
    /// Creates a gateway rooted at `base_url` (e.g. `http://127.0.0.1:8000`).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client cannot be built
    /// (TLS backend initialisation failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = Client::builder().build().map_err(GatewayError::transport)?;
        let resolve_client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(GatewayError::transport)?;

        Ok(Self::with_clients(client, resolve_client, base_url))
    }

    /// Creates a gateway around existing clients.
    ///
    /// `resolve_client` must not follow redirects; `client` serves every
    /// other endpoint.
    pub fn with_clients(
        client: Client,
        resolve_client: Client,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            resolve_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL. `path` is inserted as-is.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ShortenerGateway for HttpShortenerGateway {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, GatewayError> {
        let url = self.endpoint("shorten");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        debug!(method = "POST", %url, status = %response.status(), "Service responded");

        let (status, body) = read_json(response).await?;
        decode(status, body)
    }

    async fn stats(&self, query: &StatsQuery) -> Result<StatsResult, GatewayError> {
        let url = self.endpoint(&format!("stats/{}", query.code));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        debug!(method = "GET", %url, status = %response.status(), "Service responded");

        let (status, body) = read_json(response).await?;
        decode(status, body)
    }

    async fn resolve(&self, query: &StatsQuery) -> Result<ResolveResult, GatewayError> {
        let url = self.endpoint(&query.code);

        let response = self
            .resolve_client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        let status = response.status();
        debug!(method = "GET", %url, %status, "Service responded");

        if status.is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    GatewayError::transport(format!("Redirect {status} without a Location header"))
                })?;

            return Ok(ResolveResult {
                status: status.as_u16(),
                location: location.to_string(),
            });
        }

        if status.is_success() {
            return Err(GatewayError::transport(format!(
                "Expected a redirect, got {status}"
            )));
        }

        let (status, body) = read_json(response).await?;
        Err(GatewayError::status(status.as_u16(), extract_detail(&body)))
    }
}

/// Reads the whole body as JSON, whatever the status.
///
/// An unparsable body is a transport failure even on error statuses.
async fn read_json(response: Response) -> Result<(StatusCode, Value), GatewayError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(GatewayError::transport)?;
    let body = serde_json::from_slice(&bytes).map_err(GatewayError::transport)?;
    Ok((status, body))
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: Value) -> Result<T, GatewayError> {
    if !status.is_success() {
        return Err(GatewayError::status(status.as_u16(), extract_detail(&body)));
    }

    serde_json::from_value(body).map_err(GatewayError::transport)
}

/// Extracts the `detail` field of an error body.
///
/// Falsy values (`null`, `false`, `0`, `""`) count as absent. Non-string
/// values, such as the list of validation errors some frameworks return, are
/// rendered as compact JSON.
fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
