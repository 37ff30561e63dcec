//! Production hour dictionary.
//!
//! Maps a `(job type, task)` key to an expected production-hour figure —
//! the conversion factor between "this job requires task X" and "task X
//! costs N hours". Supplied by an external data source and read-only for
//! the duration of a run. Keys are case-sensitive exact matches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dictionary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Job type the task belongs to.
    pub job_type: String,
    /// Task name within the job type.
    pub task: String,
    /// Expected production hours for one unit of this task.
    pub hours: f64,
}

/// Reference table of expected production hours per `(job type, task)`.
///
/// Stored as nested ordered maps so iteration order — and therefore any
/// derived output — is deterministic. A later entry for the same key
/// replaces the earlier one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourDictionary {
    entries: BTreeMap<String, BTreeMap<String, f64>>,
}

impl HourDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry for `(job_type, task)`.
    pub fn with_entry(
        mut self,
        job_type: impl Into<String>,
        task: impl Into<String>,
        hours: f64,
    ) -> Self {
        self.entries
            .entry(job_type.into())
            .or_default()
            .insert(task.into(), hours);
        self
    }

    /// Expected hours for a single `(job_type, task)` key.
    pub fn hours_for(&self, job_type: &str, task: &str) -> Option<f64> {
        self.entries.get(job_type)?.get(task).copied()
    }

    /// Total expected hours across all tasks of a job type.
    ///
    /// Returns `None` when the job type has no entries at all — the caller
    /// must treat that as a configuration problem, not as zero hours.
    pub fn total_for(&self, job_type: &str) -> Option<f64> {
        self.entries
            .get(job_type)
            .map(|tasks| tasks.values().sum())
    }

    /// Whether any entry exists for a job type.
    pub fn has_type(&self, job_type: &str) -> bool {
        self.entries.contains_key(job_type)
    }

    /// Iterates all entries in deterministic (job type, task) order.
    pub fn iter(&self) -> impl Iterator<Item = DictionaryEntry> + '_ {
        self.entries.iter().flat_map(|(job_type, tasks)| {
            tasks.iter().map(move |(task, &hours)| DictionaryEntry {
                job_type: job_type.clone(),
                task: task.clone(),
                hours,
            })
        })
    }

    /// Number of `(job type, task)` entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(|tasks| tasks.len()).sum()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
