//! Frozen per-run input container.
//!
//! A snapshot carries everything one allocation run consumes: the
//! scheduling period, all domain records, and the hour dictionary. The
//! engine never reaches back into the surrounding application's mutable
//! store — a snapshot is taken once, then the run is a pure function of it.

use serde::{Deserialize, Serialize};

use super::{Employee, HourDictionary, Interval, Job, PriorityEntry, SpecialProject, TimeOff};

/// Immutable input set for one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Scheduling period boundaries, in epoch-relative hours.
    pub period: Interval,
    /// Workforce records.
    pub employees: Vec<Employee>,
    /// Ongoing jobs.
    pub jobs: Vec<Job>,
    /// One-off special projects.
    pub special_projects: Vec<SpecialProject>,
    /// Time-off records.
    pub time_off: Vec<TimeOff>,
    /// Explicit priority rankings.
    pub priorities: Vec<PriorityEntry>,
    /// Expected production hours per (job type, task).
    pub dictionary: HourDictionary,
}

impl Snapshot {
    /// Creates an empty snapshot for the given period.
    pub fn new(period: Interval) -> Self {
        Self {
            period,
            employees: Vec::new(),
            jobs: Vec::new(),
            special_projects: Vec::new(),
            time_off: Vec::new(),
            priorities: Vec::new(),
            dictionary: HourDictionary::new(),
        }
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Adds a special project.
    pub fn with_special_project(mut self, project: SpecialProject) -> Self {
        self.special_projects.push(project);
        self
    }

    /// Adds a time-off record.
    pub fn with_time_off(mut self, time_off: TimeOff) -> Self {
        self.time_off.push(time_off);
        self
    }

    /// Adds a priority entry.
    pub fn with_priority(mut self, entry: PriorityEntry) -> Self {
        self.priorities.push(entry);
        self
    }

    /// Sets the hour dictionary.
    pub fn with_dictionary(mut self, dictionary: HourDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Total number of demands (jobs + special projects).
    pub fn demand_count(&self) -> usize {
        self.jobs.len() + self.special_projects.len()
    }
}
