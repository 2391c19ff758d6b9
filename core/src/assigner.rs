//! The shift assigner — the heart of Rosterly.
//!
//! PICKING ORDER (fixed, documented, never reordered), per day:
//!   1. Evening  — global workers first (round-robin), then staff.
//!   2. Morning  — staff, minus anyone who closed the night before.
//!   3. Middle   — staff.
//!
//! RULES:
//!   - Days run Sunday..Saturday, always all seven.
//!   - Ties in assignment count break by roster order (stable sort).
//!   - An employee picked earlier in the day is excluded from later
//!     categories that day.
//!   - The computation is pure: no I/O, no shared mutable state. The
//!     global rotation cursor is threaded through explicitly.

use crate::{
    availability::AvailabilityMap,
    config::{key_holder_evening_start, DemandTargets, ScheduleConfig, EVENING_MIN_HOURS},
    demand::{resolve_targets, DemandMode},
    employee::Employee,
    error::{ScheduleError, ScheduleResult},
    types::{EmployeeId, WeekStart, Weekday},
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One scheduled shift. The full set for a week replaces any prior set;
/// assignments are never merged incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub day: Weekday,
    pub employee_id: EmployeeId,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub hours: f64,
}

/// The generation run's output: the ordered assignment list plus the
/// resolved targets, returned for auditing by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub assignments: Vec<Assignment>,
    pub targets: DemandTargets,
}

pub struct ShiftAssigner {
    config: ScheduleConfig,
}

impl ShiftAssigner {
    pub fn new(config: ScheduleConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(ShiftAssigner { config })
    }

    pub fn with_defaults() -> Self {
        ShiftAssigner {
            config: ScheduleConfig::default(),
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Generate one week of assignments.
    ///
    /// Under-coverage (a day/category with fewer eligible employees
    /// than its target) is reflected in the output shape, never an
    /// error. The only failures are malformed demand figures and a
    /// roster that is empty after the active filter.
    pub fn generate(
        &self,
        week: WeekStart,
        employees: &[Employee],
        availability: &AvailabilityMap,
        mode: &DemandMode,
    ) -> ScheduleResult<GenerationOutcome> {
        let active: Vec<&Employee> = employees.iter().filter(|e| e.active).collect();
        if active.is_empty() {
            return Err(ScheduleError::NoActiveEmployees);
        }

        let targets = resolve_targets(&self.config, mode)?;

        let globals: Vec<&Employee> = active.iter().copied().filter(|e| e.global_worker).collect();
        let staff: Vec<&Employee> = active.iter().copied().filter(|e| !e.global_worker).collect();

        let mut counts: HashMap<EmployeeId, u32> = HashMap::new();
        let mut assignments: Vec<Assignment> = Vec::new();
        let mut cursor = 0usize;

        for (di, day) in Weekday::ALL.iter().copied().enumerate() {
            // Who closed yesterday. Day 0 has no prior day in the week.
            let closed_yesterday: HashSet<EmployeeId> = if di == 0 {
                HashSet::new()
            } else {
                evening_workers(&assignments, Weekday::ALL[di - 1])
            };
            let mut taken_today: HashSet<EmployeeId> = HashSet::new();

            // Evening: exhaust available globals first, round-robin.
            let needed = targets.evening as usize;
            let mut evening_slate: Vec<&Employee> = Vec::new();
            if needed > 0 && !globals.is_empty() {
                let (picked, next) = pick_globals(&globals, availability, day, needed, cursor);
                cursor = next;
                for g in picked {
                    let tpl = &self.config.catalog.global_evening;
                    assignments.push(Assignment {
                        day,
                        employee_id: g.id.clone(),
                        start: tpl.start,
                        end: tpl.end,
                        hours: tpl.hours,
                    });
                    *counts.entry(g.id.clone()).or_insert(0) += 1;
                    taken_today.insert(g.id.clone());
                    evening_slate.push(g);
                }
            }

            let remaining = needed.saturating_sub(evening_slate.len());
            if remaining > 0 {
                let need_key_holder = !evening_slate.iter().any(|e| e.is_key_holder());
                let picked = pick_staff(
                    &staff,
                    availability,
                    day,
                    remaining,
                    &counts,
                    &taken_today,
                    &closed_yesterday,
                    PickOpts {
                        skip_closers: false,
                        require_key_holder: need_key_holder,
                    },
                );
                for e in picked {
                    let tpl = &self.config.catalog.evening;
                    let start = if e.is_key_holder() {
                        key_holder_evening_start()
                    } else {
                        tpl.start
                    };
                    assignments.push(Assignment {
                        day,
                        employee_id: e.id.clone(),
                        start,
                        end: tpl.end,
                        hours: tpl.hours,
                    });
                    *counts.entry(e.id.clone()).or_insert(0) += 1;
                    taken_today.insert(e.id.clone());
                }
            }

            // Morning: rest rule applies — no closer opens the next day.
            if targets.morning > 0 {
                let picked = pick_staff(
                    &staff,
                    availability,
                    day,
                    targets.morning as usize,
                    &counts,
                    &taken_today,
                    &closed_yesterday,
                    PickOpts {
                        skip_closers: true,
                        require_key_holder: false,
                    },
                );
                for e in picked {
                    let tpl = &self.config.catalog.morning;
                    assignments.push(Assignment {
                        day,
                        employee_id: e.id.clone(),
                        start: tpl.start,
                        end: tpl.end,
                        hours: tpl.hours,
                    });
                    *counts.entry(e.id.clone()).or_insert(0) += 1;
                    taken_today.insert(e.id.clone());
                }
            }

            // Middle: no rest exclusion.
            if targets.middle > 0 {
                let picked = pick_staff(
                    &staff,
                    availability,
                    day,
                    targets.middle as usize,
                    &counts,
                    &taken_today,
                    &closed_yesterday,
                    PickOpts {
                        skip_closers: false,
                        require_key_holder: false,
                    },
                );
                for e in picked {
                    let tpl = &self.config.catalog.middle;
                    assignments.push(Assignment {
                        day,
                        employee_id: e.id.clone(),
                        start: tpl.start,
                        end: tpl.end,
                        hours: tpl.hours,
                    });
                    *counts.entry(e.id.clone()).or_insert(0) += 1;
                    taken_today.insert(e.id.clone());
                }
            }
        }

        log::info!(
            "week={week} generated {} assignments (targets m={} mid={} e={})",
            assignments.len(),
            targets.morning,
            targets.middle,
            targets.evening
        );

        Ok(GenerationOutcome {
            assignments,
            targets,
        })
    }
}

struct PickOpts {
    /// Exclude employees who worked an evening shift the previous day.
    skip_closers: bool,
    /// Guarantee a key holder in the slate when one is available.
    require_key_holder: bool,
}

/// Round-robin over the global pool starting at `cursor`, skipping
/// workers unavailable that day. Returns the chosen workers and the
/// cursor advanced by the number consumed (minimum 1, modulo pool
/// size) so the rotation keeps moving even on fully-blocked days.
fn pick_globals<'a>(
    globals: &[&'a Employee],
    availability: &AvailabilityMap,
    day: Weekday,
    n: usize,
    cursor: usize,
) -> (Vec<&'a Employee>, usize) {
    let mut chosen: Vec<&Employee> = Vec::new();
    for offset in 0..globals.len() {
        if chosen.len() >= n {
            break;
        }
        let g = globals[(cursor + offset) % globals.len()];
        if availability.is_available(&g.id, day) {
            chosen.push(g);
        }
    }
    let next = (cursor + chosen.len().max(1)) % globals.len();
    (chosen, next)
}

/// Pick up to `n` staff for one category: filter to the eligible pool,
/// sort ascending by assignment count (stable, so ties keep roster
/// order), and take from the front.
#[allow(clippy::too_many_arguments)]
fn pick_staff<'a>(
    staff: &[&'a Employee],
    availability: &AvailabilityMap,
    day: Weekday,
    n: usize,
    counts: &HashMap<EmployeeId, u32>,
    taken_today: &HashSet<EmployeeId>,
    closed_yesterday: &HashSet<EmployeeId>,
    opts: PickOpts,
) -> Vec<&'a Employee> {
    let mut pool: Vec<&Employee> = staff
        .iter()
        .copied()
        .filter(|e| availability.is_available(&e.id, day))
        .filter(|e| !taken_today.contains(&e.id))
        .filter(|e| !(opts.skip_closers && closed_yesterday.contains(&e.id)))
        .collect();
    pool.sort_by_key(|e| counts.get(&e.id).copied().unwrap_or(0));

    let mut chosen: Vec<&Employee> = Vec::new();
    if opts.require_key_holder {
        match pool.iter().copied().find(|e| e.is_key_holder()) {
            Some(key) => chosen.push(key),
            // Best effort: the requirement is relaxed, not an error.
            None => log::debug!("no key holder available for {} evening", day.code()),
        }
    }
    for e in pool {
        if chosen.len() >= n {
            break;
        }
        if chosen.iter().any(|c| c.id == e.id) {
            continue;
        }
        chosen.push(e);
    }
    chosen.truncate(n);
    chosen
}

/// Employees whose shift on `prev` was long enough to count as an
/// evening (closing) shift.
fn evening_workers(assignments: &[Assignment], prev: Weekday) -> HashSet<EmployeeId> {
    assignments
        .iter()
        .filter(|a| a.day == prev && a.hours >= EVENING_MIN_HOURS)
        .map(|a| a.employee_id.clone())
        .collect()
}
