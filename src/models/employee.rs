//! Employee model.
//!
//! An employee contributes a fixed number of assignable hours per scheduling
//! period and carries the set of skills (job types) they are eligible to
//! work on. Records are created and edited externally; the engine reads a
//! frozen copy per run.

use serde::{Deserialize, Serialize};

/// An employee whose hours can be allocated to demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Maximum assignable hours per scheduling period, before time off.
    pub capacity_h: f64,
    /// Skills this employee can work on. A demand is eligible for this
    /// employee only if all its required skills appear here.
    pub skills: Vec<String>,
}

impl Employee {
    /// Creates a new employee with zero capacity and no skills.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity_h: 0.0,
            skills: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-period capacity in hours.
    pub fn with_capacity(mut self, capacity_h: f64) -> Self {
        self.capacity_h = capacity_h;
        self
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Whether this employee has a given skill (case-sensitive).
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
