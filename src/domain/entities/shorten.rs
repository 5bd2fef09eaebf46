//! Shorten request and result.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /shorten`.
///
/// Only non-emptiness is checked locally; URL format is the service's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ShortenRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// Successful answer of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResult {
    pub short_url: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
