//! Schedule (output) model.
//!
//! A schedule is the complete result of one allocation run: aggregated
//! hour assignments, one shortfall record per demand that could not be
//! fully satisfied, and the configuration errors that excluded demands
//! from the run. Constructed fresh each run, immutable once compiled,
//! superseded — never mutated — by the next run.

use serde::{Deserialize, Serialize};

/// Hours granted to one employee for one demand within the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Receiving employee.
    pub employee_id: String,
    /// Demand (job or special project) the hours are spent on.
    pub demand_id: String,
    /// Granted hours. Always positive.
    pub hours: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        employee_id: impl Into<String>,
        demand_id: impl Into<String>,
        hours: f64,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            demand_id: demand_id.into(),
            hours,
        }
    }
}

/// The unmet remainder of a demand after allocation.
///
/// Exactly one record exists per demand whose assigned hours fell short of
/// its requirement. Unmet demand is data, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortfallRecord {
    /// Affected demand.
    pub demand_id: String,
    /// Hours that could not be staffed.
    pub unmet_hours: f64,
}

impl ShortfallRecord {
    /// Creates a new shortfall record.
    pub fn new(demand_id: impl Into<String>, unmet_hours: f64) -> Self {
        Self {
            demand_id: demand_id.into(),
            unmet_hours,
        }
    }
}

/// A per-demand configuration problem detected while building constraints.
///
/// The affected demand is excluded from allocation; the rest of the run
/// proceeds. Carried in the schedule so callers can surface every excluded
/// demand by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationError {
    /// Demand that was excluded.
    pub demand_id: String,
    /// Job type that failed to resolve.
    pub job_type: String,
    /// Human-readable description.
    pub message: String,
}

impl ConfigurationError {
    /// Creates a configuration error for a dictionary miss.
    pub fn unresolved_hours(demand_id: impl Into<String>, job_type: impl Into<String>) -> Self {
        let demand_id = demand_id.into();
        let job_type = job_type.into();
        let message = format!(
            "demand '{demand_id}' has no explicit hours and job type '{job_type}' has no dictionary entry"
        );
        Self {
            demand_id,
            job_type,
            message,
        }
    }
}

/// The complete output of one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Aggregated assignments, ordered by (employee, demand).
    pub assignments: Vec<Assignment>,
    /// One record per demand with unmet hours, in allocation order.
    pub shortfalls: Vec<ShortfallRecord>,
    /// Demands excluded for configuration problems.
    pub config_errors: Vec<ConfigurationError>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// All assignments for a given employee.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .collect()
    }

    /// All assignments for a given demand.
    pub fn assignments_for_demand(&self, demand_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.demand_id == demand_id)
            .collect()
    }

    /// Total hours assigned to an employee.
    pub fn employee_hours(&self, employee_id: &str) -> f64 {
        self.assignments_for_employee(employee_id)
            .iter()
            .map(|a| a.hours)
            .sum()
    }

    /// Total hours assigned to a demand.
    pub fn demand_hours(&self, demand_id: &str) -> f64 {
        self.assignments_for_demand(demand_id)
            .iter()
            .map(|a| a.hours)
            .sum()
    }

    /// Total hours assigned across the whole schedule.
    pub fn total_assigned_hours(&self) -> f64 {
        self.assignments.iter().map(|a| a.hours).sum()
    }

    /// Total unmet hours across all shortfalls.
    pub fn total_unmet_hours(&self) -> f64 {
        self.shortfalls.iter().map(|s| s.unmet_hours).sum()
    }

    /// The shortfall for a demand, if any.
    pub fn shortfall_for(&self, demand_id: &str) -> Option<&ShortfallRecord> {
        self.shortfalls.iter().find(|s| s.demand_id == demand_id)
    }

    /// Whether every allocated demand was fully satisfied and nothing was
    /// excluded.
    pub fn is_fully_met(&self) -> bool {
        self.shortfalls.is_empty() && self.config_errors.is_empty()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
