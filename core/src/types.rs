//! Shared primitive types used across the scheduler.

use crate::error::{ScheduleError, ScheduleResult};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, unique identifier for an employee.
pub type EmployeeId = String;

/// Day of week, Sunday-first. The assignment loop iterates `ALL` in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Position within the week, Sunday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable short code used in storage and wire payloads.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Sun => "sun",
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }

    pub fn from_code(code: &str) -> Option<Weekday> {
        Weekday::ALL.iter().copied().find(|d| d.code() == code)
    }
}

/// The Sunday anchoring a schedule week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// Anchor a week on an explicit Sunday. Any other weekday is a
    /// malformed input, not something to silently correct.
    pub fn new(date: NaiveDate) -> ScheduleResult<Self> {
        if date.weekday() == chrono::Weekday::Sun {
            Ok(WeekStart(date))
        } else {
            Err(ScheduleError::WeekStartNotSunday { date })
        }
    }

    /// Snap any date back to the Sunday of its week.
    pub fn containing(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_sunday() as i64;
        WeekStart(date - Duration::days(back))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The concrete date a weekday falls on within this week.
    pub fn date_for(self, day: Weekday) -> NaiveDate {
        self.0 + Duration::days(day.index() as i64)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
