//! Terminal rendering of workflow regions.

use std::future::Future;

use crate::application::view::{Render, View, ViewLine, render};
use crate::application::workflows::OutputRegion;
use colored::*;

/// Formats a view as terminal lines.
///
/// # Output Format
///
/// ```text
/// ✅ Short URL: http://127.0.0.1:8000/06995e
/// ```
///
/// ```text
/// ✅ Long URL: https://example.com
///    Click Count: 5
///    Expiry Date: 2030-01-01 00:00:00
/// ```
///
/// ```text
/// ❌ Short URL not found
/// ```
pub fn format_view(view: &View) -> Vec<String> {
    let mut lines = Vec::new();

    if view.loading {
        lines.push(format!("{}", "⏳ Loading...".dimmed()));
    }

    for (index, line) in view.output.iter().enumerate() {
        let prefix = if index == 0 { "✅" } else { "  " };
        let text = match line {
            ViewLine::Link { label, href } => {
                format!("{}: {}", label.bold(), href.cyan().underline())
            }
            ViewLine::Field { label, value } => format!("{}: {}", label.bold(), value),
        };
        lines.push(format!("{} {}", prefix.green(), text));
    }

    if let Some(error) = &view.error {
        lines.push(format!("{}", format!("❌ {error}").red()));
    }

    lines
}

pub fn print_view(view: &View) {
    for line in format_view(view) {
        println!("{line}");
    }
}

/// Drives `submission` to completion while mirroring `region` on stdout.
///
/// The loading indicator is printed as soon as the region enters `Loading`;
/// the settled state is printed once the submission returns.
pub async fn present<T, F>(region: &OutputRegion<T>, submission: F) -> F::Output
where
    T: Render + Clone,
    F: Future,
{
    let mut changes = region.subscribe();
    tokio::pin!(submission);

    let output = loop {
        tokio::select! {
            biased;
            output = &mut submission => break output,
            Ok(()) = changes.changed() => {
                let view = render(&*changes.borrow_and_update());
                if view.loading {
                    print_view(&view);
                }
            }
        }
    };

    print_view(&render(&region.snapshot()));
    output
}
