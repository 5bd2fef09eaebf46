//! Redirect target of a short link.

/// Redirect answered by `GET /{code}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveResult {
    /// HTTP status of the redirect (e.g. 307).
    pub status: u16,
    /// Value of the `Location` header.
    pub location: String,
}
