//! Demand-target resolution: turn a sizing mode into per-day counts.

use crate::config::{DemandTargets, ScheduleConfig};
use crate::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};

/// How the week's total desired labor hours are determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DemandMode {
    /// Use the baseline targets unchanged.
    None,
    /// Scale the baseline to hit a flat weekly-hours figure.
    FixedHours { desired_hours: f64 },
    /// Derive desired hours from a sales forecast and a
    /// labor-hours-per-sales ratio.
    Productivity { sales: f64, rate: f64 },
}

impl Default for DemandMode {
    fn default() -> Self {
        DemandMode::None
    }
}

/// Resolve the per-day category counts for one generation run.
///
/// Scaling multiplies each baseline count by `desired / baseline_hours`
/// and rounds to nearest. An all-zero result is forced up to
/// [`DemandTargets::MINIMUM`].
pub fn resolve_targets(config: &ScheduleConfig, mode: &DemandMode) -> ScheduleResult<DemandTargets> {
    let desired = match mode {
        DemandMode::None => return Ok(config.baseline),
        DemandMode::FixedHours { desired_hours } => {
            check_figure("desired_hours", *desired_hours)?;
            *desired_hours
        }
        DemandMode::Productivity { sales, rate } => {
            check_figure("sales", *sales)?;
            check_figure("productivity rate", *rate)?;
            sales * rate
        }
    };

    if desired == 0.0 {
        return Ok(config.baseline);
    }

    let baseline_hours = config.baseline_weekly_hours();
    if baseline_hours <= 0.0 {
        // Degenerate baseline: scale factor is undefined, fall back to
        // minimal coverage.
        log::warn!("baseline weekly hours is zero; using minimum targets");
        return Ok(DemandTargets::MINIMUM);
    }

    let factor = desired / baseline_hours;
    let scale = |n: u32| (n as f64 * factor).round().max(0.0) as u32;
    let scaled = DemandTargets {
        morning: scale(config.baseline.morning),
        middle: scale(config.baseline.middle),
        evening: scale(config.baseline.evening),
    };

    if scaled.total() == 0 {
        return Ok(DemandTargets::MINIMUM);
    }
    Ok(scaled)
}

fn check_figure(name: &str, value: f64) -> ScheduleResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScheduleError::InvalidDemand {
            reason: format!("{name} must be a non-negative finite number, got {value}"),
        });
    }
    Ok(())
}
