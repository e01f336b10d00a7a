//! Date utilities for parsing and displaying note-page date references
//!
//! Note pages write dates as wiki-linked tokens like `[[January 1st, 2024]]`.
//! Everything here works on date-only values (`NaiveDate`): comparing dates
//! instead of timestamps keeps day-offset math immune to DST transitions.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})(st|nd|rd|th)\b").expect("valid ordinal regex"));

/// Date formats accepted for a page date token, tried in order.
/// All are locale-independent; `%d` tolerates unpadded day numbers.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%m/%d/%Y"];

/// Parse a page date token like "January 1st, 2024" or "[[January 1st, 2024]]"
///
/// Strips any `[[ ]]` wiki-link decoration and English ordinal suffixes, then
/// tries each supported format. Decorated and undecorated input parse
/// identically.
///
/// # Returns
/// The parsed date, or `None` if the token matches no supported format.
/// Unparseable input is never an error: downstream ranking treats it the
/// same as an absent date.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let cleaned = token.replace(['[', ']'], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = ORDINAL_SUFFIX_RE.replace_all(cleaned, "$1");

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

/// Signed number of calendar days from `today` to `date`
///
/// Negative values denote a date in the past. Both arguments are date-only,
/// so the subtraction is exact whole days.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Format a date for display relative to `today`
///
/// Returns `""` for `None`; `Today`/`Tomorrow`/`Yesterday` for offsets
/// 0/1/-1; `"{n} days ago"` for anything further in the past; `"In {n} days"`
/// out to a week; otherwise a month/day string, with the year appended only
/// when it differs from the current year.
pub fn format_relative(today: NaiveDate, date: Option<NaiveDate>) -> String {
    let Some(date) = date else {
        return String::new();
    };

    let days = days_until(today, date);
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d if d <= 7 => format!("In {} days", d),
        _ => {
            if date.year() == today.year() {
                date.format("%b %-d").to_string()
            } else {
                date.format("%b %-d, %Y").to_string()
            }
        }
    }
}
