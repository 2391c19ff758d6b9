//! Greedy fairness: least-assigned employees are always preferred, so
//! weekly shift counts stay balanced when availability allows it.

use chrono::NaiveDate;
use rosterly_core::{
    assigner::ShiftAssigner,
    availability::AvailabilityMap,
    config::{DemandTargets, ScheduleConfig},
    demand::DemandMode,
    employee::{Employee, RoleTag},
    types::WeekStart,
};

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

fn weekly_counts(employees: &[Employee], assigner: &ShiftAssigner) -> Vec<usize> {
    let outcome = assigner
        .generate(week(), employees, &AvailabilityMap::new(), &DemandMode::None)
        .expect("generate");
    employees
        .iter()
        .map(|e| {
            outcome
                .assignments
                .iter()
                .filter(|a| a.employee_id == e.id)
                .count()
        })
        .collect()
}

#[test]
fn evenly_divisible_load_balances_exactly() {
    // 5 slots/day x 7 days = 35 slots over 7 staff: 5 each.
    let employees = staff(7);
    let assigner = with_targets(DemandTargets {
        morning: 0,
        middle: 2,
        evening: 3,
    });
    let counts = weekly_counts(&employees, &assigner);
    assert_eq!(
        counts,
        vec![5; 7],
        "35 slots over 7 unconstrained staff must balance to 5 each"
    );
}

#[test]
fn spread_stays_within_one_without_constraints() {
    // 3 slots/day x 7 days = 21 slots over 6 staff: 3 or 4 each.
    let employees = staff(6);
    let assigner = with_targets(DemandTargets {
        morning: 0,
        middle: 1,
        evening: 2,
    });
    let counts = weekly_counts(&employees, &assigner);
    let max = *counts.iter().max().unwrap();
    let min = *counts.iter().min().unwrap();
    assert!(
        max - min <= 1,
        "unconstrained greedy fairness should keep the spread within 1, got {counts:?}"
    );
    assert_eq!(counts.iter().sum::<usize>(), 21);
}

#[test]
fn ties_break_by_roster_order() {
    // First pick of the run: everyone is at zero, so the slate is the
    // head of the roster in order.
    let employees = staff(5);
    let assigner = with_targets(DemandTargets {
        morning: 0,
        middle: 0,
        evening: 2,
    });
    let outcome = assigner
        .generate(week(), &employees, &AvailabilityMap::new(), &DemandMode::None)
        .expect("generate");
    let sunday: Vec<&str> = outcome
        .assignments
        .iter()
        .take(2)
        .map(|a| a.employee_id.as_str())
        .collect();
    assert_eq!(sunday, vec!["s-00", "s-01"]);
}
