//! # URL Shortener Client
//!
//! Command-line client for a URL shortening service: shorten long URLs,
//! inspect click statistics of short links, and resolve where they redirect.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as the service it talks to:
//!
//! - **Domain Layer** ([`domain`]) - Request/result values, [`domain::WorkflowState`]
//!   and the [`domain::ShortenerGateway`] trait
//! - **Application Layer** ([`application`]) - Workflows and the pure `render` function
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest implementation of the gateway
//! - **Presentation Layer** ([`presentation`]) - Terminal output
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_BASE_URL="http://127.0.0.1:8000"
//!
//! cargo run -- shorten https://example.com/some/long/path
//! cargo run -- stats http://127.0.0.1:8000/06995e
//! cargo run -- interactive
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use error::{GatewayError, WorkflowError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::view::{Render, View, ViewLine, render};
    pub use crate::application::workflows::{
        OutputRegion, ResolveWorkflow, ShortenWorkflow, StatsWorkflow,
    };
    pub use crate::domain::entities::{
        ResolveResult, ShortenRequest, ShortenResult, StatsQuery, StatsResult,
    };
    pub use crate::domain::{ShortenerGateway, WorkflowState};
    pub use crate::error::{GatewayError, WorkflowError};
    pub use crate::infrastructure::http::HttpShortenerGateway;
}
