//! Domain layer: data model, workflow state and the service contract.
//!
//! - [`entities`] - request and result values
//! - [`state`] - [`state::WorkflowState`], the per-workflow state machine
//! - [`gateway`] - [`gateway::ShortenerGateway`], implemented by `crate::infrastructure`
//!
//! Nothing here depends on HTTP or terminal concerns.

pub mod entities;
pub mod gateway;
pub mod state;

pub use gateway::ShortenerGateway;
pub use state::WorkflowState;

#[cfg(test)]
pub use gateway::MockShortenerGateway;
