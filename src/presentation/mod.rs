//! Boundary layer applying rendered [`crate::application::view::View`]s to a display.
//!
//! - [`terminal`] - colored stdout output for the `shortener` binary

pub mod terminal;
