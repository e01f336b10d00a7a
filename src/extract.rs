//! Task extraction from note-page text
//!
//! The scorer only needs "an ordered sequence of task records"; where they
//! come from is a pluggable concern behind [`TaskSource`], so the core can
//! be exercised with synthetic records and no host environment.
//!
//! [`TextExtractor`] is the bundled source: it scans plain-text/markdown
//! page content for open task markers and `Scheduled::`/`Deadline::` date
//! annotations, on the task line itself or on its indented child lines.

use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates::parse_date_token;
use crate::task::Task;

static TODO_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(?:\[\[)?TODO(?:\]\])?\}\}").expect("valid TODO regex"));
static DONE_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(?:\[\[)?DONE(?:\]\])?\}\}").expect("valid DONE regex"));
static OPEN_CHECKBOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*]\s+\[ \]\s*").expect("valid checkbox regex"));
static CLOSED_CHECKBOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*]\s+\[[xX]\]\s*").expect("valid closed checkbox regex"));
// The token is the bracketed wiki link when one follows the marker (trailing
// text on the line is not part of the date); a bare token runs to end of line.
// Alternation order matters: the regex crate prefers the earlier branch.
static SCHEDULED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bScheduled::[ \t]*(\[\[[^\]]+\]\]|\S.*)").expect("valid scheduled regex")
});
static DEADLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bDeadline::[ \t]*(\[\[[^\]]+\]\]|\S.*)").expect("valid deadline regex")
});
static ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:Scheduled|Deadline)::").expect("valid annotation regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Anything that can produce an ordered sequence of task records
///
/// Order matters: it is the tie-break for equal priority scores, so sources
/// should emit tasks in their natural (page) order. Implementations produce
/// fresh records on every call; there is no caching across scans.
pub trait TaskSource {
    fn collect(&self) -> Result<Vec<Task>>;
}

/// Task source over plain-text page content
///
/// Recognizes two open-task spellings: a `{{[[TODO]]}}` marker anywhere on
/// the line, or a `- [ ]` checkbox prefix. Lines marked `{{[[DONE]]}}` or
/// `- [x]` are completed and skipped.
pub struct TextExtractor {
    content: String,
}

impl TextExtractor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl TaskSource for TextExtractor {
    fn collect(&self) -> Result<Vec<Task>> {
        Ok(extract_tasks(&self.content))
    }
}

/// Scan page content for open tasks, in top-to-bottom order
///
/// Each task gets an id stable within the scan (`L{line}`, 1-based). Date
/// annotations are looked up on the task line first, then on the run of
/// more-indented follower lines (child blocks); the first occurrence of
/// each annotation wins. A token that fails to parse is logged and treated
/// exactly like an absent date.
pub fn extract_tasks(content: &str) -> Vec<Task> {
    let lines: Vec<&str> = content.lines().collect();
    let mut tasks = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !is_open_task(line) {
            continue;
        }

        let text = task_text(line);
        if text.is_empty() {
            continue;
        }

        let id = format!("L{}", idx + 1);
        let mut scheduled = find_annotation(&SCHEDULED_RE, line, &id);
        let mut deadline = find_annotation(&DEADLINE_RE, line, &id);

        // Child blocks: the run of more-indented lines below the task.
        // Blank lines inside the run are visual gaps, not the end of it.
        let parent_indent = indent_width(line);
        for child in &lines[idx + 1..] {
            if child.trim().is_empty() {
                continue;
            }
            if indent_width(child) <= parent_indent || is_open_task(child) {
                break;
            }
            if scheduled.is_none() {
                scheduled = find_annotation(&SCHEDULED_RE, child, &id);
            }
            if deadline.is_none() {
                deadline = find_annotation(&DEADLINE_RE, child, &id);
            }
        }

        tasks.push(Task {
            id,
            text,
            scheduled,
            deadline,
        });
    }

    tasks
}

fn is_open_task(line: &str) -> bool {
    if DONE_MARKER_RE.is_match(line) || CLOSED_CHECKBOX_RE.is_match(line) {
        return false;
    }
    TODO_MARKER_RE.is_match(line) || OPEN_CHECKBOX_RE.is_match(line)
}

/// Display text: the line minus its task marker and inline date annotations
fn task_text(line: &str) -> String {
    let stripped = OPEN_CHECKBOX_RE.replace(line, "");
    let stripped = TODO_MARKER_RE.replace(&stripped, "");
    let stripped = SCHEDULED_RE.replace(&stripped, "");
    let stripped = DEADLINE_RE.replace(&stripped, "");
    // Removing an inline annotation can leave a doubled space behind
    WHITESPACE_RE.replace_all(stripped.trim(), " ").to_string()
}

fn find_annotation(re: &Regex, line: &str, task_id: &str) -> Option<chrono::NaiveDate> {
    let raw = re.captures(line)?.get(1)?.as_str();
    // A second annotation on the same line ends this one's token
    let token = match ANNOTATION_RE.find(raw) {
        Some(m) => raw[..m.start()].trim(),
        None => raw.trim(),
    };
    if token.is_empty() {
        return None;
    }
    let parsed = parse_date_token(token);
    if parsed.is_none() {
        // Unparseable tokens rank exactly like absent dates
        warn!("task {}: unparseable date token {:?}", task_id, token);
    }
    parsed
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
