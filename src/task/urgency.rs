use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse urgency classification for a task
///
/// Derived from the day-offset of whichever date is authoritative for the
/// task (deadline when present, otherwise scheduled). This is a display
/// classification; the numeric priority score blends both dates and may
/// disagree with it.
///
/// Serializes as kebab-case (`overdue`, `this-week`, ...) to match the
/// labels used by panel styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    /// Authoritative date is in the past
    Overdue,
    /// Due or scheduled today
    Today,
    /// Due or scheduled tomorrow
    Tomorrow,
    /// 2-3 days out
    ThisWeek,
    /// 4-7 days out
    NextWeek,
    /// More than a week out
    Future,
    /// No date at all
    Unscheduled,
}

impl Urgency {
    /// Classify a signed day-offset into an urgency bucket
    ///
    /// Offsets come from [`crate::dates::days_until`]: negative means past.
    /// Never returns [`Urgency::Unscheduled`]; that bucket exists only for
    /// tasks with no authoritative date to take an offset from.
    pub fn from_offset(days: i64) -> Self {
        if days < 0 {
            Urgency::Overdue
        } else if days == 0 {
            Urgency::Today
        } else if days == 1 {
            Urgency::Tomorrow
        } else if days <= 3 {
            Urgency::ThisWeek
        } else if days <= 7 {
            Urgency::NextWeek
        } else {
            Urgency::Future
        }
    }

    /// Kebab-case label, stable across serde and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Overdue => "overdue",
            Urgency::Today => "today",
            Urgency::Tomorrow => "tomorrow",
            Urgency::ThisWeek => "this-week",
            Urgency::NextWeek => "next-week",
            Urgency::Future => "future",
            Urgency::Unscheduled => "unscheduled",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overdue" => Ok(Urgency::Overdue),
            "today" => Ok(Urgency::Today),
            "tomorrow" => Ok(Urgency::Tomorrow),
            "this-week" => Ok(Urgency::ThisWeek),
            "next-week" => Ok(Urgency::NextWeek),
            "future" => Ok(Urgency::Future),
            "unscheduled" => Ok(Urgency::Unscheduled),
            _ => Err(format!(
                "Invalid urgency '{}'. Valid options are: overdue, today, tomorrow, this-week, next-week, future, unscheduled",
                s
            )),
        }
    }
}
