//! Framework-independent description of what a workflow region displays.
//!
//! [`render`] is pure: the same state always yields the same [`View`]. The
//! boundary layer (terminal, GUI, ...) applies the view to concrete widgets.

use crate::domain::WorkflowState;
use crate::domain::entities::{ResolveResult, ShortenResult, StatsResult};

/// Everything a region shows for one state.
///
/// `output` and `error` are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub loading: bool,
    pub output: Vec<ViewLine>,
    pub error: Option<String>,
}

impl View {
    pub fn is_empty(&self) -> bool {
        !self.loading && self.output.is_empty() && self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLine {
    /// A labelled hyperlink; `href` is shown and linked verbatim.
    Link { label: &'static str, href: String },
    /// A labelled plain value.
    Field { label: &'static str, value: String },
}

/// Result types that know which lines they display on success.
pub trait Render {
    fn lines(&self) -> Vec<ViewLine>;
}

impl Render for ShortenResult {
    fn lines(&self) -> Vec<ViewLine> {
        vec![ViewLine::Link {
            label: "Short URL",
            href: self.short_url.clone(),
        }]
    }
}

impl Render for StatsResult {
    fn lines(&self) -> Vec<ViewLine> {
        vec![
            ViewLine::Link {
                label: "Long URL",
                href: self.long_url.clone(),
            },
            ViewLine::Field {
                label: "Click Count",
                value: self.click_count.to_string(),
            },
            ViewLine::Field {
                label: "Expiry Date",
                value: self.expiry_date.clone(),
            },
        ]
    }
}

impl Render for ResolveResult {
    fn lines(&self) -> Vec<ViewLine> {
        vec![
            ViewLine::Link {
                label: "Redirects to",
                href: self.location.clone(),
            },
            ViewLine::Field {
                label: "Status",
                value: self.status.to_string(),
            },
        ]
    }
}

pub fn render<T: Render>(state: &WorkflowState<T>) -> View {
    match state {
        WorkflowState::Idle => View::default(),
        WorkflowState::Loading => View {
            loading: true,
            ..View::default()
        },
        WorkflowState::Success(result) => View {
            output: result.lines(),
            ..View::default()
        },
        WorkflowState::Error(error) => View {
            error: Some(error.message().to_string()),
            ..View::default()
        },
    }
}
