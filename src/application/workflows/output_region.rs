//! Observable output region owned by one workflow.

use crate::domain::WorkflowState;
use tokio::sync::watch;

/// Holds the current [`WorkflowState`] of a workflow and publishes every change.
///
/// The boundary layer subscribes and re-renders on change. Writes always
/// replace the previous state, so with overlapping submissions the last one
/// to settle is what remains displayed.
#[derive(Debug)]
pub struct OutputRegion<T> {
    state: watch::Sender<WorkflowState<T>>,
}

impl<T> OutputRegion<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(WorkflowState::Idle);
        Self { state }
    }

    /// Returns a receiver that observes every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState<T>> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub(crate) fn set(&self, state: WorkflowState<T>) {
        self.state.send_replace(state);
    }
}

impl<T: Clone> OutputRegion<T> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> WorkflowState<T> {
        self.state.borrow().clone()
    }
}

impl<T> Default for OutputRegion<T> {
    fn default() -> Self {
        Self::new()
    }
}
