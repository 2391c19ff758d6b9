//! Per-employee, per-day availability for one week.
//!
//! Absence of an entry defaults to **available**: an employee who never
//! submitted availability is schedulable on every day of the week.

use crate::types::{EmployeeId, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityMap {
    days: HashMap<EmployeeId, HashMap<Weekday, bool>>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, employee: &str, day: Weekday, available: bool) {
        self.days
            .entry(employee.to_string())
            .or_default()
            .insert(day, available);
    }

    pub fn mark_unavailable(&mut self, employee: &str, day: Weekday) {
        self.set(employee, day, false);
    }

    pub fn is_available(&self, employee: &str, day: Weekday) -> bool {
        self.days
            .get(employee)
            .and_then(|d| d.get(&day))
            .copied()
            .unwrap_or(true)
    }

    /// Number of employees with at least one explicit entry.
    pub fn submitted_count(&self) -> usize {
        self.days.len()
    }
}
