//! Per-workflow UI state.

use crate::error::WorkflowError;

/// Lifecycle of one workflow's output region.
///
/// `Loading` is the only non-terminal state; it always exits to `Success` or
/// `Error`. A new submission resets the region to `Idle` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState<T> {
    Idle,
    Loading,
    Success(T),
    Error(WorkflowError),
}

impl<T> WorkflowState<T> {
    /// Whether the loading indicator should be visible.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WorkflowError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> Default for WorkflowState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> From<Result<T, WorkflowError>> for WorkflowState<T> {
    fn from(outcome: Result<T, WorkflowError>) -> Self {
        match outcome {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}
