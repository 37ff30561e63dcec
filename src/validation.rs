//! Structural input validation.
//!
//! Checks a snapshot for the malformations that make a run meaningless:
//! - Duplicate employee or demand IDs (jobs and special projects share one
//!   ID namespace)
//! - Negative capacities, hour overrides, or dictionary figures
//! - Inverted time-off intervals (start > end)
//! - Dangling references (time off or priority entries naming unknown IDs)
//! - Demands requiring a skill no employee in the snapshot has
//!
//! Any of these aborts the run atomically; the caller gets every detected
//! problem at once, fixes the data, and retries. Per-demand dictionary
//! misses are deliberately not checked here — they are isolated
//! [`ConfigurationError`](crate::models::ConfigurationError)s that exclude
//! one demand and let the run continue.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Snapshot;

/// Validation result: either clean, or every detected error.
pub type ValidationResult = Result<(), Vec<InputError>>;

/// A structural input error. Fatal for the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Two employees share an ID.
    #[error("duplicate employee ID '{0}'")]
    DuplicateEmployeeId(String),
    /// Two demands (jobs or special projects) share an ID.
    #[error("duplicate demand ID '{0}'")]
    DuplicateDemandId(String),
    /// An employee declares negative capacity.
    #[error("employee '{id}' has negative capacity ({hours} h)")]
    NegativeCapacity {
        /// Offending employee.
        id: String,
        /// Declared capacity.
        hours: f64,
    },
    /// A demand declares a negative explicit hour requirement.
    #[error("demand '{id}' has negative required hours ({hours} h)")]
    NegativeHours {
        /// Offending demand.
        id: String,
        /// Declared override.
        hours: f64,
    },
    /// A dictionary entry carries a negative hour figure.
    #[error("dictionary entry ({job_type}, {task}) has negative hours ({hours} h)")]
    NegativeDictionaryHours {
        /// Entry job type.
        job_type: String,
        /// Entry task.
        task: String,
        /// Entry hours.
        hours: f64,
    },
    /// The scheduling period ends before it starts.
    #[error("scheduling period is inverted ({start_h} > {end_h})")]
    InvertedPeriod {
        /// Period start.
        start_h: f64,
        /// Period end.
        end_h: f64,
    },
    /// A time-off interval ends before it starts.
    #[error("time off for '{employee_id}' has inverted interval ({start_h} > {end_h})")]
    InvertedInterval {
        /// Affected employee.
        employee_id: String,
        /// Interval start.
        start_h: f64,
        /// Interval end.
        end_h: f64,
    },
    /// A record references an employee that does not exist.
    #[error("unknown employee '{0}' referenced")]
    UnknownEmployee(String),
    /// A priority entry references a demand that does not exist.
    #[error("unknown demand '{0}' referenced")]
    UnknownDemand(String),
    /// A demand requires a skill that no employee in the snapshot has.
    #[error("demand '{demand_id}' requires skill '{skill}' held by no employee")]
    UnstaffableDemand {
        /// Affected demand.
        demand_id: String,
        /// Skill nobody holds.
        skill: String,
    },
}

/// Validates a snapshot before allocation.
///
/// Collects every problem rather than stopping at the first, so one
/// round-trip to the caller surfaces the full repair list.
///
/// # Returns
/// `Ok(())` if the snapshot is structurally sound, `Err(errors)` otherwise.
pub fn validate_snapshot(snapshot: &Snapshot) -> ValidationResult {
    let mut errors = Vec::new();

    // Period boundaries. An inverted period would make every time-off
    // clip come back empty, so the run must not proceed.
    if !snapshot.period.is_well_formed() {
        errors.push(InputError::InvertedPeriod {
            start_h: snapshot.period.start_h,
            end_h: snapshot.period.end_h,
        });
    }

    // Employee IDs and capacities
    let mut employee_ids = HashSet::new();
    for e in &snapshot.employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(InputError::DuplicateEmployeeId(e.id.clone()));
        }
        if e.capacity_h < 0.0 {
            errors.push(InputError::NegativeCapacity {
                id: e.id.clone(),
                hours: e.capacity_h,
            });
        }
    }

    // Demand IDs and hour overrides. Jobs and special projects share one
    // namespace so a priority entry can reference either unambiguously.
    let mut demand_ids = HashSet::new();
    let overrides = snapshot
        .jobs
        .iter()
        .map(|j| (&j.id, j.hours_override))
        .chain(
            snapshot
                .special_projects
                .iter()
                .map(|p| (&p.id, p.hours_override)),
        );
    for (id, hours_override) in overrides {
        if !demand_ids.insert(id.as_str()) {
            errors.push(InputError::DuplicateDemandId(id.clone()));
        }
        if let Some(hours) = hours_override {
            if hours < 0.0 {
                errors.push(InputError::NegativeHours {
                    id: id.clone(),
                    hours,
                });
            }
        }
    }

    // Dictionary figures
    for entry in snapshot.dictionary.iter() {
        if entry.hours < 0.0 {
            errors.push(InputError::NegativeDictionaryHours {
                job_type: entry.job_type,
                task: entry.task,
                hours: entry.hours,
            });
        }
    }

    // Time-off intervals and references
    for t in &snapshot.time_off {
        if !t.interval.is_well_formed() {
            errors.push(InputError::InvertedInterval {
                employee_id: t.employee_id.clone(),
                start_h: t.interval.start_h,
                end_h: t.interval.end_h,
            });
        }
        if !employee_ids.contains(t.employee_id.as_str()) {
            errors.push(InputError::UnknownEmployee(t.employee_id.clone()));
        }
    }

    // Priority entry references
    for entry in &snapshot.priorities {
        match entry {
            crate::models::PriorityEntry::DemandRank { demand_id, .. } => {
                if !demand_ids.contains(demand_id.as_str()) {
                    errors.push(InputError::UnknownDemand(demand_id.clone()));
                }
            }
            crate::models::PriorityEntry::Preference {
                employee_id,
                demand_id,
            } => {
                if !employee_ids.contains(employee_id.as_str()) {
                    errors.push(InputError::UnknownEmployee(employee_id.clone()));
                }
                if !demand_ids.contains(demand_id.as_str()) {
                    errors.push(InputError::UnknownDemand(demand_id.clone()));
                }
            }
        }
    }

    // Skills nobody holds: such a demand could never be staffed by any
    // employee in the snapshot, which is a data error rather than a
    // shortfall.
    let all_skills: HashSet<&str> = snapshot
        .employees
        .iter()
        .flat_map(|e| e.skills.iter().map(String::as_str))
        .collect();
    let skill_requirements = snapshot
        .jobs
        .iter()
        .map(|j| (&j.id, &j.required_skills))
        .chain(
            snapshot
                .special_projects
                .iter()
                .map(|p| (&p.id, &p.required_skills)),
        );
    for (id, skills) in skill_requirements {
        for skill in skills {
            if !all_skills.contains(skill.as_str()) {
                errors.push(InputError::UnstaffableDemand {
                    demand_id: id.clone(),
                    skill: skill.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
