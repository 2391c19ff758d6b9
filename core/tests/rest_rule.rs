//! Rest between shifts: nobody who worked a long (>= 7.4h) shift on
//! day N opens on day N+1. Middle shifts carry no such exclusion.

use chrono::NaiveDate;
use rosterly_core::{
    assigner::ShiftAssigner,
    availability::AvailabilityMap,
    config::{DemandTargets, ScheduleConfig, EVENING_MIN_HOURS},
    demand::DemandMode,
    employee::{Employee, RoleTag},
    types::{WeekStart, Weekday},
};
use std::collections::HashSet;

fn week() -> WeekStart {
    WeekStart::new(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()).unwrap()
}

fn staff(n: usize) -> Vec<Employee> {
    (0..n)
        .map(|i| Employee {
            id: format!("s-{i:02}"),
            name: format!("Staff {i}"),
            role: RoleTag::Staff,
            global_worker: false,
            active: true,
        })
        .collect()
}

fn with_targets(targets: DemandTargets) -> ShiftAssigner {
    ShiftAssigner::new(ScheduleConfig {
        baseline: targets,
        ..ScheduleConfig::default()
    })
    .expect("valid config")
}

#[test]
fn long_shift_workers_never_open_the_next_day() {
    let employees = staff(40);
    let assigner = ShiftAssigner::with_defaults();
    let outcome = assigner
        .generate(week(), &employees, &AvailabilityMap::new(), &DemandMode::None)
        .expect("generate");

    for pair in Weekday::ALL.windows(2) {
        let (yesterday, today) = (pair[0], pair[1]);
        let closers: HashSet<&str> = outcome
            .assignments
            .iter()
            .filter(|a| a.day == yesterday && a.hours >= EVENING_MIN_HOURS)
            .map(|a| a.employee_id.as_str())
            .collect();
        let openers: Vec<&str> = outcome
            .assignments
            .iter()
            .filter(|a| a.day == today && a.start.format("%H:%M").to_string() == "08:00")
            .map(|a| a.employee_id.as_str())
            .collect();
        for opener in openers {
            assert!(
                !closers.contains(opener),
                "{opener} worked a long shift on {} and still opened on {}",
                yesterday.code(),
                today.code()
            );
        }
    }
}

#[test]
fn rest_rule_forces_under_coverage_on_a_two_person_roster() {
    // Hand-traced: with 3 staff and targets {morning: 1, evening: 1},
    // the rest rule empties the morning pool every other day, ending
    // the week at counts 4/4/3.
    let employees = staff(3);
    let assigner = with_targets(DemandTargets {
        morning: 1,
        middle: 0,
        evening: 1,
    });
    let outcome = assigner
        .generate(week(), &employees, &AvailabilityMap::new(), &DemandMode::None)
        .expect("generate");

    let count_for = |id: &str| {
        outcome
            .assignments
            .iter()
            .filter(|a| a.employee_id == id)
            .count()
    };
    assert_eq!(outcome.assignments.len(), 11);
    assert_eq!(count_for("s-00"), 4);
    assert_eq!(count_for("s-01"), 4);
    assert_eq!(count_for("s-02"), 3);
}

#[test]
fn middle_shifts_have_no_rest_exclusion() {
    // Two staff, one evening and one middle slot per day: the same
    // pair repeats all week because middle looks only at today.
    let employees = staff(2);
    let assigner = with_targets(DemandTargets {
        morning: 0,
        middle: 1,
        evening: 1,
    });
    let outcome = assigner
        .generate(week(), &employees, &AvailabilityMap::new(), &DemandMode::None)
        .expect("generate");

    for day in Weekday::ALL {
        let middles: Vec<&str> = outcome
            .assignments
            .iter()
            .filter(|a| a.day == day && a.start.format("%H:%M").to_string() == "10:00")
            .map(|a| a.employee_id.as_str())
            .collect();
        assert_eq!(
            middles,
            vec!["s-01"],
            "middle slot on {} should go to s-01 despite yesterday's shift",
            day.code()
        );
    }
}
