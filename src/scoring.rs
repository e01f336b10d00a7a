//! Task prioritization based on deadline and scheduled-date urgency
//!
//! The scorer is a pure computation: given a task's optional dates and a
//! single `today` reference, it produces a 0-100 priority score and an
//! urgency bucket. All operations here are total over well-formed records:
//! absent dates are a documented branch, never an error, and nothing
//! validates `id`/`text` (that is the task source's job).
//!
//! Every operation takes `today` explicitly so that one ranking pass judges
//! all tasks against the same temporal reference point. [`Prioritizer`]
//! wraps that snapshot for callers that want it sampled once.

use chrono::NaiveDate;

use crate::dates::days_until;
use crate::task::{ScoredTask, Task, Urgency, local_date_today};

/// Weight of the deadline component in the blended score
const DEADLINE_WEIGHT: f64 = 0.7;
/// Weight of the scheduled-date component in the blended score
const SCHEDULED_WEIGHT: f64 = 0.3;
/// Score for a task carrying no date at all: low, but visible
const UNDATED_BASELINE: u32 = 25;

/// Deadline urgency score for a day-offset
///
/// Overdue and imminent deadlines dominate: anything already past scores
/// the maximum, and the score decays in steps out to a month.
pub fn deadline_score(days: i64) -> u32 {
    if days < 0 {
        100 // Overdue - maximum priority
    } else if days == 0 {
        95 // Due today
    } else if days == 1 {
        85 // Due tomorrow
    } else if days <= 3 {
        70
    } else if days <= 7 {
        50
    } else if days <= 14 {
        30
    } else if days <= 30 {
        15
    } else {
        5 // Far-future deadline
    }
}

/// Scheduled-date relevance score for a day-offset
///
/// A task scheduled for exactly today scores highest: that is the day the
/// user chose to work on it. A lapsed scheduled date scores low: it is
/// informative but less actionable than a lapsed deadline.
pub fn scheduled_score(days: i64) -> u32 {
    if days < 0 {
        20 // Past scheduled date
    } else if days == 0 {
        100 // Scheduled today - do it now
    } else if days == 1 {
        80
    } else if days <= 3 {
        50
    } else if days <= 7 {
        30
    } else {
        10 // Scheduled later
    }
}

/// Blended priority score for a task, 0..=100
///
/// The deadline component carries 70% of the score and the scheduled-date
/// component 30%; they are additive when both dates are present, so a task
/// with both a near deadline and a near scheduled date outranks one with
/// only the deadline. A task with neither date gets a flat baseline of 25.
///
/// Rounding is `f64::round` (half away from zero), applied once to the
/// final sum.
pub fn score_priority(task: &Task, today: NaiveDate) -> u32 {
    if task.is_undated() {
        return UNDATED_BASELINE;
    }

    let mut score = 0.0;

    if let Some(deadline) = task.deadline {
        score += f64::from(deadline_score(days_until(today, deadline))) * DEADLINE_WEIGHT;
    }

    if let Some(scheduled) = task.scheduled {
        score += f64::from(scheduled_score(days_until(today, scheduled))) * SCHEDULED_WEIGHT;
    }

    score.round() as u32
}

/// Urgency bucket for a task
///
/// The deadline is authoritative when both dates exist; the scheduled date
/// is the fallback; a task with neither is [`Urgency::Unscheduled`]. Unlike
/// [`score_priority`] this never blends the two dates, so bucket and score
/// can disagree (a far deadline pins the bucket to `future` even when the
/// task is scheduled for today).
pub fn task_urgency(task: &Task, today: NaiveDate) -> Urgency {
    if let Some(deadline) = task.deadline {
        return Urgency::from_offset(days_until(today, deadline));
    }

    if let Some(scheduled) = task.scheduled {
        return Urgency::from_offset(days_until(today, scheduled));
    }

    Urgency::Unscheduled
}

/// Annotate a single task with its derived priority and urgency
pub fn annotate(task: &Task, today: NaiveDate) -> ScoredTask {
    ScoredTask {
        task: task.clone(),
        priority: score_priority(task, today),
        urgency: task_urgency(task, today),
    }
}

/// Rank tasks by descending priority
///
/// Annotates every record, then stable-sorts by score. Ties keep their input
/// order: sources emit tasks in page order, which is the natural tie-break.
pub fn rank_tasks(tasks: &[Task], today: NaiveDate) -> Vec<ScoredTask> {
    let mut ranked: Vec<ScoredTask> = tasks.iter().map(|t| annotate(t, today)).collect();
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    ranked
}

/// The next task to work on: head of the ranking, or `None` when empty
pub fn top_task(tasks: &[Task], today: NaiveDate) -> Option<ScoredTask> {
    rank_tasks(tasks, today).into_iter().next()
}

/// Tasks whose urgency bucket matches, in input order
///
/// Annotates and filters without re-sorting, so the caller sees matches in
/// the same relative order the source produced them.
pub fn filter_by_urgency(tasks: &[Task], bucket: Urgency, today: NaiveDate) -> Vec<ScoredTask> {
    tasks
        .iter()
        .map(|t| annotate(t, today))
        .filter(|s| s.urgency == bucket)
        .collect()
}

/// Scoring pass with a fixed "today" snapshot
///
/// Samples the current date once at construction so that every task in one
/// scan→score→render cycle is judged against the same reference point.
/// Construct a fresh one per cycle; there is no caching across scans.
#[derive(Debug, Clone, Copy)]
pub struct Prioritizer {
    today: NaiveDate,
}

impl Prioritizer {
    /// Snapshot the current local date
    pub fn new() -> Self {
        Self::at(local_date_today())
    }

    /// Use an explicit reference date (tests, replays)
    pub fn at(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The snapshot this pass judges against
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// See [`score_priority`]
    pub fn score(&self, task: &Task) -> u32 {
        score_priority(task, self.today)
    }

    /// See [`task_urgency`]
    pub fn urgency(&self, task: &Task) -> Urgency {
        task_urgency(task, self.today)
    }

    /// See [`rank_tasks`]
    pub fn rank(&self, tasks: &[Task]) -> Vec<ScoredTask> {
        rank_tasks(tasks, self.today)
    }

    /// See [`top_task`]
    pub fn top(&self, tasks: &[Task]) -> Option<ScoredTask> {
        top_task(tasks, self.today)
    }

    /// See [`filter_by_urgency`]
    pub fn filter_by_urgency(&self, tasks: &[Task], bucket: Urgency) -> Vec<ScoredTask> {
        filter_by_urgency(tasks, bucket, self.today)
    }
}

impl Default for Prioritizer {
    fn default() -> Self {
        Self::new()
    }
}
