//! Stats query and result.

use serde::Deserialize;
use url::Url;

/// Identifies a short link by the code taken from its URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub code: String,
}

impl StatsQuery {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Builds a query from a full short URL such as `http://127.0.0.1:8000/06995e`.
    ///
    /// The code is the URL path with one leading `/` removed. A URL without a
    /// path yields an empty code; rejecting it is left to the service.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `short_url` is not an absolute URL.
    pub fn from_short_url(short_url: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(short_url)?;
        let path = parsed.path();
        let code = path.strip_prefix('/').unwrap_or(path);

        Ok(Self::new(code))
    }
}

/// Successful answer of `GET /stats/{code}`.
///
/// `expiry_date` is kept as the service formatted it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsResult {
    pub long_url: String,
    pub click_count: i64,
    pub expiry_date: String,
}
