//! Application layer: workflows and their render function.
//!
//! - [`workflows`] - Shorten, Stats and Resolve workflows driving the
//!   [`crate::domain::ShortenerGateway`]
//! - [`view`] - pure `render(state) -> View` used by the presentation layer

pub mod view;
pub mod workflows;
