//! Task domain models
//!
//! This module contains the core task data structures:
//! - `record`: immutable task records and their scored counterparts
//! - `urgency`: the coarse urgency classification used for display and filtering

mod record;
mod urgency;

// Re-export all public types
pub use record::{ScoredTask, Task, local_date_today};
pub use urgency::Urgency;
