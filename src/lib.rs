//! FocusFlow Library
//!
//! This library ranks open tasks from note pages by urgency. Tasks carry
//! optional `Scheduled::` and `Deadline::` dates; a pure scorer blends the
//! two into a 0-100 priority and classifies each task into an urgency
//! bucket, so a presentation layer can answer "what should I do now?".
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Source Layer**: `extract` module - `TaskSource` implementations that
//!   produce ordered task records (the bundled one scans page text)
//! - **Domain Layer**: `task`, `dates`, `scoring` modules - records, date
//!   math, and the pure priority scorer
//! - **Presentation Layer**: `formatting` module - plain-text panel output
//!
//! # Example
//!
//! ```
//! use focusflow::{Prioritizer, extract_tasks, format_panel};
//!
//! let page = "{{[[TODO]]}} file taxes Deadline:: [[2026-04-15]]";
//! let tasks = extract_tasks(page);
//! let pass = Prioritizer::new();
//! let ranked = pass.rank(&tasks);
//! println!("{}", format_panel(&ranked, pass.today()));
//! ```

pub mod dates;
mod extract;
mod formatting;
mod scoring;
mod task;

// Re-export commonly used types
pub use extract::{TaskSource, TextExtractor, extract_tasks};
pub use formatting::{format_next, format_panel};
pub use scoring::{
    Prioritizer, deadline_score, filter_by_urgency, rank_tasks, scheduled_score, score_priority,
    task_urgency, top_task,
};
pub use task::{ScoredTask, Task, Urgency, local_date_today};
