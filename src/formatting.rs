//! Formatting of ranked tasks into the focus-panel text
//!
//! Presentation layers get [`crate::task::ScoredTask`] records and may render
//! them however they like; this module provides the plain-text rendition the
//! bundled CLI prints.

use chrono::NaiveDate;

use crate::dates::format_relative;
use crate::task::ScoredTask;

/// Format ranked tasks into a display string
///
/// Tasks are printed in the order given (callers pass ranked or filtered
/// output). Dates are shown relative to `today`, which must be the same
/// snapshot the scoring pass used.
pub fn format_panel(ranked: &[ScoredTask], today: NaiveDate) -> String {
    if ranked.is_empty() {
        return "No open tasks found".to_string();
    }

    let mut result = format!("Found {} open task(s):\n\n", ranked.len());
    for scored in ranked {
        result.push_str(&format!(
            "- [{}] {} (priority: {}, urgency: {})\n",
            scored.id(),
            scored.text(),
            scored.priority,
            scored.urgency
        ));

        if let Some(deadline) = scored.task.deadline {
            result.push_str(&format!(
                "  Deadline: {}\n",
                format_relative(today, Some(deadline))
            ));
        }
        if let Some(scheduled) = scored.task.scheduled {
            result.push_str(&format!(
                "  Scheduled: {}\n",
                format_relative(today, Some(scheduled))
            ));
        }
    }

    result
}

/// Format the single "what should I do now" answer
pub fn format_next(top: Option<&ScoredTask>, today: NaiveDate) -> String {
    match top {
        None => "Nothing to do - no open tasks found".to_string(),
        Some(scored) => {
            let mut result = format!(
                "Next up: {} (priority: {}, urgency: {})",
                scored.text(),
                scored.priority,
                scored.urgency
            );
            if let Some(deadline) = scored.task.deadline {
                result.push_str(&format!(
                    " - deadline {}",
                    format_relative(today, Some(deadline))
                ));
            }
            result
        }
    }
}
