//! Allocation run facade.
//!
//! Wires the pipeline together: validate → build constraints → resolve
//! order → greedy allocation → compile schedule. A run is a pure function
//! of its [`Snapshot`]; identical snapshots produce byte-identical
//! schedules.
//!
//! # Example
//!
//! ```
//! use crew_schedule::allocator::Allocator;
//! use crew_schedule::models::{Employee, Interval, Job, Snapshot};
//!
//! let snapshot = Snapshot::new(Interval::new(0.0, 40.0))
//!     .with_employee(Employee::new("E1").with_capacity(40.0))
//!     .with_job(Job::new("J1", "Restore").with_hours(30.0));
//!
//! let schedule = Allocator::new().run(&snapshot).unwrap();
//! assert_eq!(schedule.assignment_count(), 1);
//! ```

mod compiler;
mod engine;
mod summary;

pub use engine::{AllocationStep, TieBreak, HOURS_EPSILON};
pub use summary::{render_report, EmployeeLoad, ScheduleSummary};

use thiserror::Error;

use crate::constraints::build_constraints;
use crate::models::{Schedule, Snapshot};
use crate::ordering::order_demands;
use crate::validation::{validate_snapshot, InputError};

/// Structurally malformed input. The run was aborted atomically; no
/// partial schedule exists.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("snapshot failed validation with {} error(s)", .0.len())]
pub struct InvalidInput(pub Vec<InputError>);

/// Runs the allocation pipeline for one scheduling period.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    tie_break: TieBreak,
}

impl Allocator {
    /// Creates an allocator with load-balanced tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the employee tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Computes the schedule for a snapshot.
    ///
    /// Per-demand configuration problems (dictionary misses) do not fail
    /// the run; they ride along in
    /// [`Schedule::config_errors`](crate::models::Schedule). Structural
    /// malformation aborts with every detected [`InputError`] at once.
    pub fn run(&self, snapshot: &Snapshot) -> Result<Schedule, InvalidInput> {
        validate_snapshot(snapshot).map_err(InvalidInput)?;

        let constraints = build_constraints(snapshot);
        let order = order_demands(&constraints.demands, &snapshot.priorities);
        let (steps, shortfalls) = engine::allocate(
            &constraints.employees,
            &constraints.demands,
            &order,
            &snapshot.priorities,
            self.tie_break,
        );
        Ok(compiler::compile(steps, shortfalls, constraints.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Employee, HourDictionary, Interval, Job, PriorityEntry, SpecialProject, TimeOff,
    };

    fn week() -> Interval {
        Interval::new(0.0, 40.0)
    }

    #[test]
    fn test_two_jobs_one_employee() {
        // Employee A, 40 h, no time off; J1 needs 30 h at priority 1,
        // J2 needs 20 h at priority 2. J1 fully assigned, J2 gets 10 h
        // and a 10 h shortfall.
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(40.0))
            .with_job(Job::new("J1", "Restore").with_hours(30.0))
            .with_job(Job::new("J2", "Restore").with_hours(20.0))
            .with_priority(PriorityEntry::rank("J1", 1))
            .with_priority(PriorityEntry::rank("J2", 2));

        let schedule = Allocator::new().run(&snapshot).unwrap();

        assert!((schedule.demand_hours("J1") - 30.0).abs() < 1e-10);
        assert!((schedule.demand_hours("J2") - 10.0).abs() < 1e-10);
        assert_eq!(schedule.shortfalls.len(), 1);
        assert_eq!(schedule.shortfalls[0].demand_id, "J2");
        assert!((schedule.shortfalls[0].unmet_hours - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_time_off_halves_capacity() {
        // Employee B, 20 h capacity, time off covering half the period;
        // J3 needs 15 h → 10 h assigned, 5 h shortfall.
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("B").with_capacity(20.0))
            .with_time_off(TimeOff::new("B", 0.0, 10.0))
            .with_job(Job::new("J3", "Restore").with_hours(15.0));

        let schedule = Allocator::new().run(&snapshot).unwrap();

        assert!((schedule.employee_hours("B") - 10.0).abs() < 1e-10);
        assert_eq!(schedule.shortfall_for("J3").unwrap().unmet_hours, 5.0);
    }

    #[test]
    fn test_dictionary_miss_excludes_only_that_demand() {
        // Job J4 is of type "X" with no dictionary entry and no override:
        // ConfigurationError referencing J4, other jobs proceed normally.
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(40.0))
            .with_job(Job::new("J4", "X"))
            .with_job(Job::new("J1", "Restore"))
            .with_dictionary(HourDictionary::new().with_entry("Restore", "Sand", 6.0));

        let schedule = Allocator::new().run(&snapshot).unwrap();

        assert_eq!(schedule.config_errors.len(), 1);
        assert_eq!(schedule.config_errors[0].demand_id, "J4");
        assert!(schedule.assignments_for_demand("J4").is_empty());
        assert!((schedule.demand_hours("J1") - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_urgent_project_served_first() {
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(10.0))
            .with_job(Job::new("J1", "Restore").with_hours(10.0).with_weight(99.0))
            .with_special_project(
                SpecialProject::new("SP1", "Maintenance")
                    .with_hours(6.0)
                    .mark_urgent(),
            );

        let schedule = Allocator::new().run(&snapshot).unwrap();

        assert!((schedule.demand_hours("SP1") - 6.0).abs() < 1e-10);
        assert!((schedule.demand_hours("J1") - 4.0).abs() < 1e-10);
        assert_eq!(schedule.shortfall_for("J1").unwrap().unmet_hours, 6.0);
    }

    #[test]
    fn test_malformed_input_aborts_atomically() {
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(-1.0))
            .with_job(Job::new("J1", "Restore").with_hours(10.0));

        let err = Allocator::new().run(&snapshot).unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert!(err.to_string().contains("1 error(s)"));
    }

    #[test]
    fn test_inverted_period_aborts_run() {
        // With an inverted period every time-off clip comes back empty,
        // which would silently restore the full 20 h and assign all 15 h.
        // The run must abort instead.
        let snapshot = Snapshot::new(Interval::new(40.0, 0.0))
            .with_employee(Employee::new("B").with_capacity(20.0))
            .with_time_off(TimeOff::new("B", 0.0, 10.0))
            .with_job(Job::new("J3", "Restore").with_hours(15.0));

        let err = Allocator::new().run(&snapshot).unwrap_err();
        assert!(err
            .0
            .iter()
            .any(|e| matches!(e, crate::validation::InputError::InvertedPeriod { .. })));
    }

    #[test]
    fn test_capacity_invariant() {
        let snapshot = Snapshot::new(week())
            .with_employee(
                Employee::new("A")
                    .with_capacity(25.0)
                    .with_skill("prep"),
            )
            .with_employee(
                Employee::new("B")
                    .with_capacity(18.0)
                    .with_skill("prep")
                    .with_skill("finishing"),
            )
            .with_time_off(TimeOff::new("A", 2.0, 7.0))
            .with_job(Job::new("J1", "Restore").with_hours(21.0).with_required_skill("prep"))
            .with_job(
                Job::new("J2", "Restore")
                    .with_hours(30.0)
                    .with_required_skill("finishing"),
            );

        let schedule = Allocator::new().run(&snapshot).unwrap();

        // Sum of assignments per employee never exceeds effective capacity
        assert!(schedule.employee_hours("A") <= 20.0 + 1e-9);
        assert!(schedule.employee_hours("B") <= 18.0 + 1e-9);

        // Conservation: assigned + shortfall = required, exactly
        for (id, required) in [("J1", 21.0), ("J2", 30.0)] {
            let unmet = schedule
                .shortfall_for(id)
                .map(|s| s.unmet_hours)
                .unwrap_or(0.0);
            assert!((schedule.demand_hours(id) + unmet - required).abs() < 1e-9);
        }
    }

    #[test]
    fn test_determinism_byte_identical() {
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(40.0).with_skill("prep"))
            .with_employee(Employee::new("B").with_capacity(40.0).with_skill("prep"))
            .with_job(Job::new("J1", "Restore").with_hours(25.0))
            .with_job(Job::new("J2", "Restore").with_hours(25.0))
            .with_special_project(SpecialProject::new("SP1", "Restore").with_hours(10.0))
            .with_priority(PriorityEntry::rank("J2", 0))
            .with_priority(PriorityEntry::preference("B", "J1"));

        let a = Allocator::new().run(&snapshot).unwrap();
        let b = Allocator::new().run(&snapshot).unwrap();

        let json_a = serde_json::to_string(&a).unwrap();
        let json_b = serde_json::to_string(&b).unwrap();
        assert_eq!(json_a, json_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_priority_dominance() {
        // The higher-ranked demand's shortfall matches what it would get
        // with exclusive access to all capacity at its point in sequence.
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(12.0))
            .with_job(Job::new("HIGH", "Restore").with_hours(20.0).with_weight(2.0))
            .with_job(Job::new("LOW", "Restore").with_hours(20.0).with_weight(1.0));

        let schedule = Allocator::new().run(&snapshot).unwrap();

        let alone = Snapshot::new(week())
            .with_employee(Employee::new("A").with_capacity(12.0))
            .with_job(Job::new("HIGH", "Restore").with_hours(20.0).with_weight(2.0));
        let exclusive = Allocator::new().run(&alone).unwrap();

        let unmet_shared = schedule.shortfall_for("HIGH").unwrap().unmet_hours;
        let unmet_alone = exclusive.shortfall_for("HIGH").unwrap().unmet_hours;
        assert!(unmet_shared <= unmet_alone + 1e-9);
    }

    #[test]
    fn test_tie_break_modes_differ() {
        let snapshot = Snapshot::new(week())
            .with_employee(Employee::new("Z").with_capacity(30.0))
            .with_employee(Employee::new("A").with_capacity(10.0))
            .with_job(Job::new("J1", "Restore").with_hours(5.0));

        let balanced = Allocator::new().run(&snapshot).unwrap();
        assert!((balanced.employee_hours("Z") - 5.0).abs() < 1e-10);

        let strict = Allocator::new()
            .with_tie_break(TieBreak::StrictById)
            .run(&snapshot)
            .unwrap();
        assert!((strict.employee_hours("A") - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_snapshot() {
        let schedule = Allocator::new().run(&Snapshot::new(week())).unwrap();
        assert!(schedule.is_fully_met());
        assert_eq!(schedule.assignment_count(), 0);
    }
}
