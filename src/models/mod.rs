//! Domain models for workforce hour allocation.
//!
//! Provides the input records the engine consumes and the schedule types it
//! produces. All types are plain data with builder-style constructors and
//! serde support; none perform I/O.
//!
//! # Domain Mapping
//!
//! | crew-schedule | Shop floor | Services |
//! |---------------|-----------|----------|
//! | Employee | Worker | Consultant |
//! | Job | Customer order | Engagement |
//! | SpecialProject | Booth maintenance | Internal initiative |
//! | HourDictionary | Routing standards | Rate card |
//! | Schedule | Weekly plan | Staffing plan |

mod demand;
mod dictionary;
mod employee;
mod period;
mod priority;
mod schedule;
mod snapshot;
mod timeoff;

pub use demand::{Job, SpecialProject};
pub use dictionary::{DictionaryEntry, HourDictionary};
pub use employee::Employee;
pub use period::Interval;
pub use priority::PriorityEntry;
pub use schedule::{Assignment, ConfigurationError, Schedule, ShortfallRecord};
pub use snapshot::Snapshot;
pub use timeoff::TimeOff;
