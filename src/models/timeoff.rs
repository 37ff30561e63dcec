//! Time-off model.
//!
//! A time-off record removes an employee's availability for an interval.
//! The constraint builder converts the overlap between the record and the
//! scheduling period into a capacity deduction; intervals reaching outside
//! the period are clipped at the period boundary.

use serde::{Deserialize, Serialize};

use super::Interval;

/// A span during which an employee cannot receive hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOff {
    /// Affected employee.
    pub employee_id: String,
    /// The unavailable span, in period-relative hours.
    pub interval: Interval,
}

impl TimeOff {
    /// Creates a time-off record for `[start_h, end_h)`.
    pub fn new(employee_id: impl Into<String>, start_h: f64, end_h: f64) -> Self {
        Self {
            employee_id: employee_id.into(),
            interval: Interval::new(start_h, end_h),
        }
    }
}
