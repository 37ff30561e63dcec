//! Constraint builder.
//!
//! Normalizes the raw records of a snapshot into the two lists the
//! allocator works on:
//!
//! - per employee: effective capacity (declared capacity minus time off
//!   overlapping the period, clamped at zero) and skills;
//! - per demand: resolved hour requirement (explicit override, else the
//!   dictionary total for the job type), required skills, weight, urgency.
//!
//! A demand whose job type has no dictionary entry and no explicit hours is
//! excluded and reported as a [`ConfigurationError`] — never silently
//! dropped. Demands are emitted jobs-first, then special projects, each in
//! input order; the priority resolver's stable sort preserves this as the
//! final tie order.

use tracing::{debug, warn};

use crate::models::{ConfigurationError, Interval, Snapshot};

/// An employee's normalized availability for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeConstraint {
    /// Employee identifier.
    pub employee_id: String,
    /// Capacity remaining after time-off deduction (≥ 0).
    pub effective_capacity: f64,
    /// Skills carried over from the employee record.
    pub skills: Vec<String>,
}

impl EmployeeConstraint {
    /// Whether this employee satisfies every skill a demand requires.
    pub fn covers_skills(&self, required: &[String]) -> bool {
        required.iter().all(|s| self.skills.contains(s))
    }
}

/// A demand's normalized requirement for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandConstraint {
    /// Demand identifier.
    pub demand_id: String,
    /// Hours this demand needs within the period.
    pub required_hours: f64,
    /// Skills an employee must hold to receive hours.
    pub required_skills: Vec<String>,
    /// Declared priority weight (higher = more important).
    pub weight: f64,
    /// Whether this demand outranks all non-urgent demands.
    pub urgent: bool,
}

/// Output of the constraint builder.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    /// Normalized employees, in snapshot order.
    pub employees: Vec<EmployeeConstraint>,
    /// Normalized demands: jobs first, then special projects, input order.
    pub demands: Vec<DemandConstraint>,
    /// Demands excluded for unresolvable hour requirements.
    pub errors: Vec<ConfigurationError>,
}

impl ConstraintSet {
    /// Looks up an employee constraint by ID.
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeConstraint> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Looks up a demand constraint by ID.
    pub fn demand(&self, demand_id: &str) -> Option<&DemandConstraint> {
        self.demands.iter().find(|d| d.demand_id == demand_id)
    }
}

/// Builds the normalized constraint set for one run.
///
/// Assumes the snapshot already passed
/// [`validate_snapshot`](crate::validation::validate_snapshot); intervals
/// are well-formed and quantities non-negative.
pub fn build_constraints(snapshot: &Snapshot) -> ConstraintSet {
    let mut set = ConstraintSet {
        employees: employee_constraints(snapshot),
        ..ConstraintSet::default()
    };

    for (employee, constraint) in snapshot.employees.iter().zip(&set.employees) {
        debug!(
            employee = %constraint.employee_id,
            capacity = employee.capacity_h,
            effective = constraint.effective_capacity,
            "computed effective capacity"
        );
    }

    let raw_demands = snapshot
        .jobs
        .iter()
        .map(|j| (&j.id, &j.job_type, j.hours_override, &j.required_skills, j.weight, false))
        .chain(snapshot.special_projects.iter().map(|p| {
            (&p.id, &p.job_type, p.hours_override, &p.required_skills, p.weight, p.urgent)
        }));

    for (id, job_type, hours_override, skills, weight, urgent) in raw_demands {
        let required_hours = match hours_override.or_else(|| snapshot.dictionary.total_for(job_type))
        {
            Some(hours) => hours,
            None => {
                warn!(demand = %id, job_type = %job_type, "excluding demand: unresolvable hours");
                set.errors
                    .push(ConfigurationError::unresolved_hours(id, job_type));
                continue;
            }
        };
        set.demands.push(DemandConstraint {
            demand_id: id.clone(),
            required_hours,
            required_skills: skills.clone(),
            weight,
            urgent,
        });
    }

    set
}

/// Computes just the normalized employee availabilities, without logging
/// and without touching the demand side.
///
/// The summary recomputes capacities through this path so rendering a
/// report does not replay the builder's per-demand exclusion warnings.
pub fn employee_constraints(snapshot: &Snapshot) -> Vec<EmployeeConstraint> {
    snapshot
        .employees
        .iter()
        .map(|employee| {
            let deduction = time_off_hours(snapshot, &employee.id);
            EmployeeConstraint {
                employee_id: employee.id.clone(),
                effective_capacity: (employee.capacity_h - deduction).max(0.0),
                skills: employee.skills.clone(),
            }
        })
        .collect()
}

/// Total time-off hours for one employee within the period.
///
/// Intervals are clipped to the period boundary and coalesced before
/// summing, so overlapping records do not double-count the same span.
fn time_off_hours(snapshot: &Snapshot, employee_id: &str) -> f64 {
    let mut spans: Vec<Interval> = snapshot
        .time_off
        .iter()
        .filter(|t| t.employee_id == employee_id)
        .filter_map(|t| t.interval.clip_to(&snapshot.period))
        .collect();
    spans.sort_by(|a, b| a.start_h.total_cmp(&b.start_h));

    let mut total = 0.0;
    let mut current: Option<Interval> = None;
    for span in spans {
        match current {
            Some(ref mut cur) if span.start_h <= cur.end_h => {
                cur.end_h = cur.end_h.max(span.end_h);
            }
            _ => {
                if let Some(cur) = current.take() {
                    total += cur.duration_h();
                }
                current = Some(span);
            }
        }
    }
    if let Some(cur) = current {
        total += cur.duration_h();
    }
    total
}
