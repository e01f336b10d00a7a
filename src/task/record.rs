use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::Urgency;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// An open task found on a note page
///
/// Records are immutable once produced by a source: scoring never mutates
/// them, it produces a [`ScoredTask`] copy with the derived fields filled in.
/// Absent dates are plain `None`: "no date was supplied" and "the date token
/// failed to parse" intentionally collapse to the same value, matching the
/// ranking behavior callers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier unique within one scan (e.g., "L12" for a line-based source)
    pub id: String,
    /// Human-readable description, non-empty
    pub text: String,
    /// Optional date the task is intended to be worked on
    pub scheduled: Option<NaiveDate>,
    /// Optional date the task must be completed by
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Create a task with neither a scheduled nor a deadline date
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            scheduled: None,
            deadline: None,
        }
    }

    /// Builder-style setter for the scheduled date
    pub fn scheduled(mut self, date: NaiveDate) -> Self {
        self.scheduled = Some(date);
        self
    }

    /// Builder-style setter for the deadline date
    pub fn deadline(mut self, date: NaiveDate) -> Self {
        self.deadline = Some(date);
        self
    }

    /// Check whether the task carries no date information at all
    pub fn is_undated(&self) -> bool {
        self.scheduled.is_none() && self.deadline.is_none()
    }
}

/// A task annotated with its derived priority and urgency
///
/// This is the output shape handed to presentation layers: the original
/// record plus `priority` (0..=100, higher is more urgent) and `urgency`.
/// Derived fields are never stored back onto the source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Blended priority score, 0..=100
    pub priority: u32,
    /// Display classification from the authoritative date
    pub urgency: Urgency,
}

impl ScoredTask {
    /// Identifier of the underlying task
    pub fn id(&self) -> &str {
        &self.task.id
    }

    /// Description of the underlying task
    pub fn text(&self) -> &str {
        &self.task.text
    }
}
