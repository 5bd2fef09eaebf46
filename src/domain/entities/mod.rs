//! Data exchanged with the shortening service.
//!
//! All values are transient and live for one workflow invocation.
//!
//! - [`ShortenRequest`] / [`ShortenResult`] - `POST /shorten`
//! - [`StatsQuery`] / [`StatsResult`] - `GET /stats/{code}`
//! - [`ResolveResult`] - `GET /{code}`

pub mod resolve;
pub mod shorten;
pub mod stats;

pub use resolve::ResolveResult;
pub use shorten::{ShortenRequest, ShortenResult};
pub use stats::{StatsQuery, StatsResult};
