//! Schedule compiler.
//!
//! Folds the engine's elementary allocation steps into per-(employee,
//! demand) assignment aggregates and assembles the final immutable
//! [`Schedule`]. Assignments are ordered by (employee ID, demand ID);
//! shortfalls keep allocation order; configuration errors keep builder
//! order. The ordering is part of the determinism contract.

use std::collections::BTreeMap;

use crate::models::{Assignment, ConfigurationError, Schedule, ShortfallRecord};

use super::engine::AllocationStep;

/// Compiles engine output into a schedule.
pub fn compile(
    steps: Vec<AllocationStep>,
    shortfalls: Vec<ShortfallRecord>,
    config_errors: Vec<ConfigurationError>,
) -> Schedule {
    let mut totals: BTreeMap<(String, String), f64> = BTreeMap::new();
    for step in steps {
        *totals
            .entry((step.employee_id, step.demand_id))
            .or_insert(0.0) += step.hours;
    }

    let assignments = totals
        .into_iter()
        .map(|((employee_id, demand_id), hours)| Assignment {
            employee_id,
            demand_id,
            hours,
        })
        .collect();

    Schedule {
        assignments,
        shortfalls,
        config_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(employee: &str, demand: &str, hours: f64) -> AllocationStep {
        AllocationStep {
            employee_id: employee.into(),
            demand_id: demand.into(),
            hours,
        }
    }

    #[test]
    fn test_aggregates_same_pair() {
        let schedule = compile(
            vec![step("E1", "J1", 4.0), step("E1", "J1", 6.0)],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(schedule.assignment_count(), 1);
        assert!((schedule.assignments[0].hours - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_assignments_sorted_by_employee_then_demand() {
        let schedule = compile(
            vec![
                step("E2", "J1", 1.0),
                step("E1", "J2", 2.0),
                step("E1", "J1", 3.0),
            ],
            Vec::new(),
            Vec::new(),
        );
        let keys: Vec<(&str, &str)> = schedule
            .assignments
            .iter()
            .map(|a| (a.employee_id.as_str(), a.demand_id.as_str()))
            .collect();
        assert_eq!(keys, vec![("E1", "J1"), ("E1", "J2"), ("E2", "J1")]);
    }

    #[test]
    fn test_carries_shortfalls_and_errors() {
        let schedule = compile(
            Vec::new(),
            vec![ShortfallRecord::new("J1", 5.0)],
            vec![ConfigurationError::unresolved_hours("J4", "X")],
        );
        assert_eq!(schedule.shortfalls.len(), 1);
        assert_eq!(schedule.config_errors.len(), 1);
        assert!(!schedule.is_fully_met());
    }

    #[test]
    fn test_empty() {
        let schedule = compile(Vec::new(), Vec::new(), Vec::new());
        assert_eq!(schedule, Schedule::new());
    }
}
