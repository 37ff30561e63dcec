//! Explicit priority rankings.
//!
//! Priority entries break the ties that dictionary figures and declared
//! weights leave ambiguous. Two kinds exist:
//!
//! - a **demand rank** pins a demand to an explicit position in the
//!   allocation order (lower rank = served earlier);
//! - a **preference** steers a demand's hours toward a specific employee
//!   before any other eligible employee is considered.

use serde::{Deserialize, Serialize};

/// An explicit ranking assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityEntry {
    /// Pins a demand to an explicit rank. Lower rank = higher priority.
    DemandRank {
        /// Ranked demand.
        demand_id: String,
        /// Explicit rank; 0 is the highest.
        rank: u32,
    },
    /// Prefers an employee for a demand ahead of all other eligible
    /// employees.
    Preference {
        /// Preferred employee.
        employee_id: String,
        /// Demand the preference applies to.
        demand_id: String,
    },
}

impl PriorityEntry {
    /// Creates a demand rank entry.
    pub fn rank(demand_id: impl Into<String>, rank: u32) -> Self {
        Self::DemandRank {
            demand_id: demand_id.into(),
            rank,
        }
    }

    /// Creates an employee preference entry.
    pub fn preference(employee_id: impl Into<String>, demand_id: impl Into<String>) -> Self {
        Self::Preference {
            employee_id: employee_id.into(),
            demand_id: demand_id.into(),
        }
    }
}
