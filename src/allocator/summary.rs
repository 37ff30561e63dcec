//! Schedule summary.
//!
//! Computes the headline figures a display layer shows after a run: total
//! scheduled and unmet hours, per-employee load and utilization, and the
//! full shortfall and configuration-error lists. The `Display` rendering
//! is deterministic line-for-line so two identical runs print identically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints::employee_constraints;
use crate::models::{Schedule, Snapshot};

/// One employee's share of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoad {
    /// Employee identifier.
    pub employee_id: String,
    /// Hours assigned this period.
    pub assigned_hours: f64,
    /// Capacity after time-off deduction.
    pub effective_capacity: f64,
    /// `assigned / effective_capacity`, or 0.0 when capacity is zero.
    pub utilization: f64,
}

/// Aggregated figures for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Total hours assigned across all employees.
    pub total_assigned_hours: f64,
    /// Total hours no one could cover.
    pub total_unmet_hours: f64,
    /// Number of demands with a shortfall.
    pub shortfall_count: usize,
    /// Number of demands excluded for configuration problems.
    pub config_error_count: usize,
    /// Per-employee load, sorted by employee ID.
    pub employees: Vec<EmployeeLoad>,
}

impl ScheduleSummary {
    /// Computes summary figures from a schedule and the snapshot it was
    /// built from.
    ///
    /// Effective capacities are recomputed from the snapshot, so the
    /// utilization figures match what the allocator actually worked with.
    /// Only the employee side is rebuilt; demand resolution (and its
    /// exclusion warnings) runs once per allocation, not per report.
    pub fn calculate(schedule: &Schedule, snapshot: &Snapshot) -> Self {
        let mut employees: Vec<EmployeeLoad> = employee_constraints(snapshot)
            .iter()
            .map(|e| {
                let assigned = schedule.employee_hours(&e.employee_id);
                let utilization = if e.effective_capacity > 0.0 {
                    assigned / e.effective_capacity
                } else {
                    0.0
                };
                EmployeeLoad {
                    employee_id: e.employee_id.clone(),
                    assigned_hours: assigned,
                    effective_capacity: e.effective_capacity,
                    utilization,
                }
            })
            .collect();
        employees.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));

        Self {
            total_assigned_hours: schedule.total_assigned_hours(),
            total_unmet_hours: schedule.total_unmet_hours(),
            shortfall_count: schedule.shortfalls.len(),
            config_error_count: schedule.config_errors.len(),
            employees,
        }
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scheduled {:.2} h, unmet {:.2} h ({} shortfall(s), {} config error(s))",
            self.total_assigned_hours,
            self.total_unmet_hours,
            self.shortfall_count,
            self.config_error_count,
        )?;
        for e in &self.employees {
            writeln!(
                f,
                "  {}: {:.2} / {:.2} h ({:.0}%)",
                e.employee_id,
                e.assigned_hours,
                e.effective_capacity,
                e.utilization * 100.0,
            )?;
        }
        Ok(())
    }
}

/// Renders the full run report: summary plus every shortfall and
/// configuration error by identifier.
pub fn render_report(schedule: &Schedule, snapshot: &Snapshot) -> String {
    let summary = ScheduleSummary::calculate(schedule, snapshot);
    let mut out = summary.to_string();
    for s in &schedule.shortfalls {
        out.push_str(&format!("  shortfall {}: {:.2} h unmet\n", s.demand_id, s.unmet_hours));
    }
    for e in &schedule.config_errors {
        out.push_str(&format!("  excluded {}: {}\n", e.demand_id, e.message));
    }
    out
}
