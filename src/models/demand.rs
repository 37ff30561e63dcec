//! Demand models: jobs and special projects.
//!
//! A [`Job`] is an ongoing piece of work whose hour requirement is normally
//! resolved through the [`HourDictionary`](super::HourDictionary) by job
//! type; an explicit override short-cuts the lookup. A [`SpecialProject`] is
//! structurally a job with an urgency flag: urgent projects outrank every
//! ordinary job, non-urgent ones participate in the same ordering.

use serde::{Deserialize, Serialize};

/// An ongoing job competing for workforce hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique demand identifier.
    pub id: String,
    /// Job type; keys into the hour dictionary (case-sensitive).
    pub job_type: String,
    /// Explicit hour requirement. When set, the dictionary is not consulted.
    pub hours_override: Option<f64>,
    /// Skills an employee must have to receive hours from this job.
    pub required_skills: Vec<String>,
    /// Declared priority weight. Higher = more important.
    pub weight: f64,
}

impl Job {
    /// Creates a new job of the given type.
    pub fn new(id: impl Into<String>, job_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_type: job_type.into(),
            hours_override: None,
            required_skills: Vec::new(),
            weight: 0.0,
        }
    }

    /// Sets an explicit hour requirement, bypassing the dictionary.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours_override = Some(hours);
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Sets the priority weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// A one-off special project.
///
/// Shares the job fields; `urgent` promotes it above all ordinary jobs in
/// the demand ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialProject {
    /// Unique demand identifier (shares the namespace with job IDs).
    pub id: String,
    /// Job type; keys into the hour dictionary (case-sensitive).
    pub job_type: String,
    /// Explicit hour requirement. When set, the dictionary is not consulted.
    pub hours_override: Option<f64>,
    /// Skills an employee must have to receive hours from this project.
    pub required_skills: Vec<String>,
    /// Declared priority weight. Higher = more important.
    pub weight: f64,
    /// Whether this project outranks all non-urgent demands.
    pub urgent: bool,
}

impl SpecialProject {
    /// Creates a new, non-urgent special project.
    pub fn new(id: impl Into<String>, job_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_type: job_type.into(),
            hours_override: None,
            required_skills: Vec::new(),
            weight: 0.0,
            urgent: false,
        }
    }

    /// Sets an explicit hour requirement, bypassing the dictionary.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours_override = Some(hours);
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Sets the priority weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Marks this project as urgent.
    pub fn mark_urgent(mut self) -> Self {
        self.urgent = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let j = Job::new("J1", "Restore")
            .with_hours(30.0)
            .with_required_skill("finishing")
            .with_weight(2.0);

        assert_eq!(j.id, "J1");
        assert_eq!(j.job_type, "Restore");
        assert_eq!(j.hours_override, Some(30.0));
        assert_eq!(j.required_skills, vec!["finishing".to_string()]);
        assert!((j.weight - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_job_defaults_to_dictionary_lookup() {
        let j = Job::new("J1", "Resurface");
        assert!(j.hours_override.is_none());
        assert!(j.required_skills.is_empty());
    }

    #[test]
    fn test_special_project_urgency() {
        let p = SpecialProject::new("SP1", "Maintenance").with_hours(4.0);
        assert!(!p.urgent);

        let p = p.mark_urgent();
        assert!(p.urgent);
        assert_eq!(p.hours_override, Some(4.0));
    }
}
