//! Structured scheduling configuration: shift templates and baseline
//! demand targets, with named, validated fields.

use crate::error::{ScheduleError, ScheduleResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Shifts at or above this length count as evening (closing) work for
/// the rest-between-shifts rule.
pub const EVENING_MIN_HOURS: f64 = 7.4;

/// Default labor-hours-per-sales ratio for productivity mode.
pub const DEFAULT_PRODUCTIVITY_RATE: f64 = 0.005;

/// Key holders open the evening shift at this time, independent of the
/// evening template's start (they coincide today; the rule stands on
/// its own in case the templates diverge).
pub fn key_holder_evening_start() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap()
}

/// A named time window with a fixed duration in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub hours: f64,
}

impl ShiftTemplate {
    fn fixed(name: &str, start: (u32, u32), end: (u32, u32), hours: f64) -> Self {
        ShiftTemplate {
            name: name.to_string(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            hours,
        }
    }
}

/// The four fixed shift windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    pub morning: ShiftTemplate,
    pub middle: ShiftTemplate,
    pub evening: ShiftTemplate,
    /// Evening window for global workers only.
    pub global_evening: ShiftTemplate,
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        ShiftCatalog {
            morning: ShiftTemplate::fixed("morning", (8, 0), (16, 0), 8.0),
            middle: ShiftTemplate::fixed("middle", (10, 0), (18, 0), 8.0),
            evening: ShiftTemplate::fixed("evening", (15, 0), (22, 30), 7.5),
            global_evening: ShiftTemplate::fixed("global_evening", (14, 0), (23, 0), 9.0),
        }
    }
}

/// How many employees are needed per day in each shift category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandTargets {
    pub morning: u32,
    pub middle: u32,
    pub evening: u32,
}

impl DemandTargets {
    pub const BASELINE: DemandTargets = DemandTargets {
        morning: 4,
        middle: 2,
        evening: 7,
    };

    /// The floor applied when scaling rounds every category to zero:
    /// minimal coverage beats an empty schedule.
    pub const MINIMUM: DemandTargets = DemandTargets {
        morning: 1,
        middle: 1,
        evening: 1,
    };

    pub fn total(&self) -> u32 {
        self.morning + self.middle + self.evening
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub catalog: ShiftCatalog,
    pub baseline: DemandTargets,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            catalog: ShiftCatalog::default(),
            baseline: DemandTargets::BASELINE,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> ScheduleResult<()> {
        let templates = [
            &self.catalog.morning,
            &self.catalog.middle,
            &self.catalog.evening,
            &self.catalog.global_evening,
        ];
        for tpl in templates {
            if tpl.name.is_empty() {
                return Err(ScheduleError::InvalidConfig {
                    reason: "shift template with empty name".to_string(),
                });
            }
            if !tpl.hours.is_finite() || tpl.hours <= 0.0 {
                return Err(ScheduleError::InvalidConfig {
                    reason: format!("template '{}' has non-positive hours {}", tpl.name, tpl.hours),
                });
            }
            if tpl.end <= tpl.start {
                return Err(ScheduleError::InvalidConfig {
                    reason: format!("template '{}' ends at or before it starts", tpl.name),
                });
            }
        }
        Ok(())
    }

    /// Weekly labor hours implied by the baseline targets before any
    /// scaling: `sum(count x template_hours) x 7 days`.
    pub fn baseline_weekly_hours(&self) -> f64 {
        let daily = self.baseline.morning as f64 * self.catalog.morning.hours
            + self.baseline.middle as f64 * self.catalog.middle.hours
            + self.baseline.evening as f64 * self.catalog.evening.hours;
        daily * 7.0
    }
}
