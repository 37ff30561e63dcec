//! Greedy allocation engine.
//!
//! A single deterministic pass over the resolved demand order, no
//! backtracking. A demand served earlier can starve a later one of
//! capacity; that is the intended "priority wins" semantics.
//!
//! # Algorithm
//!
//! For each demand in resolver order:
//! 1. Collect eligible employees: required skills covered, remaining
//!    capacity above the float-dust threshold.
//! 2. Order them: explicitly preferred employees first, then per
//!    [`TieBreak`], then by employee ID.
//! 3. Grant `min(unmet, remaining)` per employee, decrementing both, until
//!    the demand is met or everyone eligible is drained.
//! 4. Emit exactly one [`ShortfallRecord`] for any residual.
//!
//! # Complexity
//! O(d · e log e) for d demands and e employees.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::constraints::{DemandConstraint, EmployeeConstraint};
use crate::models::{PriorityEntry, ShortfallRecord};

/// Threshold below which remaining hours count as zero.
///
/// Guards against float dust keeping a drained employee "eligible" or a
/// met demand producing a phantom shortfall.
pub const HOURS_EPSILON: f64 = 1e-9;

/// How ties among equally eligible employees are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Prefer the employee with the most remaining capacity, then ID.
    /// Balances load and reduces fragmentation.
    #[default]
    LoadBalanced,
    /// Prefer the lowest employee ID outright.
    StrictById,
}

/// One elementary allocation decision.
///
/// Multiple steps for the same (employee, demand) pair are aggregated by
/// the schedule compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationStep {
    /// Receiving employee.
    pub employee_id: String,
    /// Demand the hours go to.
    pub demand_id: String,
    /// Granted hours (> 0).
    pub hours: f64,
}

/// Runs the greedy pass.
///
/// `order` holds indices into `demands` as produced by
/// [`order_demands`](crate::ordering::order_demands).
pub fn allocate(
    employees: &[EmployeeConstraint],
    demands: &[DemandConstraint],
    order: &[usize],
    priorities: &[PriorityEntry],
    tie_break: TieBreak,
) -> (Vec<AllocationStep>, Vec<ShortfallRecord>) {
    let preferred: HashSet<(&str, &str)> = priorities
        .iter()
        .filter_map(|p| match p {
            PriorityEntry::Preference {
                employee_id,
                demand_id,
            } => Some((employee_id.as_str(), demand_id.as_str())),
            PriorityEntry::DemandRank { .. } => None,
        })
        .collect();

    let mut remaining: Vec<f64> = employees.iter().map(|e| e.effective_capacity).collect();
    let mut steps = Vec::new();
    let mut shortfalls = Vec::new();

    for &demand_idx in order {
        let demand = &demands[demand_idx];
        let mut unmet = demand.required_hours;

        let mut eligible: Vec<usize> = employees
            .iter()
            .enumerate()
            .filter(|(i, e)| remaining[*i] > HOURS_EPSILON && e.covers_skills(&demand.required_skills))
            .map(|(i, _)| i)
            .collect();

        eligible.sort_by(|&x, &y| {
            let px = preferred.contains(&(employees[x].employee_id.as_str(), demand.demand_id.as_str()));
            let py = preferred.contains(&(employees[y].employee_id.as_str(), demand.demand_id.as_str()));
            py.cmp(&px)
                .then_with(|| match tie_break {
                    TieBreak::LoadBalanced => remaining[y].total_cmp(&remaining[x]),
                    TieBreak::StrictById => Ordering::Equal,
                })
                .then_with(|| employees[x].employee_id.cmp(&employees[y].employee_id))
        });

        for i in eligible {
            if unmet <= HOURS_EPSILON {
                break;
            }
            let grant = unmet.min(remaining[i]);
            if grant <= HOURS_EPSILON {
                continue;
            }
            debug!(
                demand = %demand.demand_id,
                employee = %employees[i].employee_id,
                grant,
                "allocated hours"
            );
            steps.push(AllocationStep {
                employee_id: employees[i].employee_id.clone(),
                demand_id: demand.demand_id.clone(),
                hours: grant,
            });
            remaining[i] -= grant;
            unmet -= grant;
        }

        if unmet > HOURS_EPSILON {
            debug!(demand = %demand.demand_id, unmet, "demand not fully staffed");
            shortfalls.push(ShortfallRecord::new(demand.demand_id.clone(), unmet));
        }
    }

    (steps, shortfalls)
}
