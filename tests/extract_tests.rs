//! Tests for the text task extractor: marker recognition, date
//! annotations, child-block scanning, and skip rules.

use chrono::NaiveDate;
use focusflow::{TaskSource, TextExtractor, extract_tasks};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_extracts_todo_marker_tasks() {
    let page = "{{[[TODO]]}} file taxes\nsome prose\n{{TODO}} buy milk";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "file taxes");
    assert_eq!(tasks[1].text, "buy milk");
}

#[test]
fn test_extracts_checkbox_tasks() {
    let page = "- [ ] water plants\n* [ ] call dentist\n- [x] already done\n- [X] this too";
    let tasks = extract_tasks(page);
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["water plants", "call dentist"]);
}

#[test]
fn test_done_marker_is_not_a_task() {
    let page = "{{[[DONE]]}} shipped it\n{{DONE}} also shipped";
    assert!(extract_tasks(page).is_empty());
}

#[test]
fn test_ids_are_line_numbers() {
    let page = "intro\n- [ ] first\n\n- [ ] second";
    let tasks = extract_tasks(page);
    assert_eq!(tasks[0].id, "L2");
    assert_eq!(tasks[1].id, "L4");
}

#[test]
fn test_inline_date_annotations() {
    let page = "{{[[TODO]]}} file taxes Deadline:: [[April 15th, 2025]] Scheduled:: [[April 1st, 2025]]";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].deadline, Some(date(2025, 4, 15)));
    assert_eq!(tasks[0].scheduled, Some(date(2025, 4, 1)));
    // Annotations are stripped from the display text
    assert_eq!(tasks[0].text, "file taxes");
}

#[test]
fn test_trailing_text_after_bracketed_date() {
    // Text after the wiki link is not part of the date token
    let page = "- [ ] buy milk Scheduled:: [[June 16th, 2025]] #errands";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].scheduled, Some(date(2025, 6, 16)));
    assert_eq!(tasks[0].text, "buy milk #errands");
}

#[test]
fn test_description_after_annotation() {
    // Only the marker and its bracketed token are stripped from the text,
    // so a description written after the date survives
    let page = "{{[[TODO]]}} Deadline:: [[June 20th, 2025]] file taxes";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].deadline, Some(date(2025, 6, 20)));
    assert_eq!(tasks[0].text, "file taxes");
}

#[test]
fn test_child_block_annotations() {
    let page = "\
- [ ] review report
    Scheduled:: [[2025-06-20]]
    Deadline:: [[2025-06-25]]
- [ ] unrelated";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].scheduled, Some(date(2025, 6, 20)));
    assert_eq!(tasks[0].deadline, Some(date(2025, 6, 25)));
    assert!(tasks[1].is_undated());
}

#[test]
fn test_first_annotation_wins() {
    let page = "\
- [ ] double-booked Deadline:: [[2025-06-01]]
    Deadline:: [[2025-07-01]]";
    let tasks = extract_tasks(page);
    assert_eq!(tasks[0].deadline, Some(date(2025, 6, 1)));
}

#[test]
fn test_child_scan_stops_at_sibling_task() {
    // The second task's dates must not leak onto the first
    let page = "\
- [ ] outer
    - [ ] inner Deadline:: [[2025-06-01]]";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].deadline.is_none());
    assert_eq!(tasks[1].deadline, Some(date(2025, 6, 1)));
}

#[test]
fn test_child_scan_skips_blank_lines() {
    let page = "\
- [ ] review report

    Deadline:: [[2025-06-25]]";
    let tasks = extract_tasks(page);
    assert_eq!(tasks[0].deadline, Some(date(2025, 6, 25)));
}

#[test]
fn test_child_scan_stops_at_dedent() {
    let page = "\
- [ ] the task
stray prose Deadline:: [[2025-06-01]]";
    let tasks = extract_tasks(page);
    assert!(tasks[0].deadline.is_none());
}

#[test]
fn test_unparseable_token_means_no_date() {
    let page = "- [ ] vague plans Scheduled:: [[sometime soon]]";
    let tasks = extract_tasks(page);
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].scheduled.is_none());
}

#[test]
fn test_empty_text_task_is_skipped() {
    let page = "- [ ] \n{{[[TODO]]}}";
    assert!(extract_tasks(page).is_empty());
}

#[test]
fn test_extractor_source_produces_fresh_records() {
    let source = TextExtractor::new("- [ ] repeatable");
    let first = source.collect().unwrap();
    let second = source.collect().unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].id, "L1");
}

#[test]
fn test_extraction_preserves_page_order() {
    let page = "\
- [ ] top
- [ ] middle Deadline:: [[2025-01-01]]
- [ ] bottom";
    let texts: Vec<String> = extract_tasks(page).into_iter().map(|t| t.text).collect();
    assert_eq!(texts, ["top", "middle", "bottom"]);
}
