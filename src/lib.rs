//! Workforce hour allocation engine.
//!
//! Converts a frozen snapshot of employees, jobs, special projects, time-off
//! records, and priority rankings into a concrete assignment of working hours
//! per employee for one scheduling period. Expected production hours come
//! from an immutable-at-runtime [`models::HourDictionary`].
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Job`, `SpecialProject`,
//!   `TimeOff`, `PriorityEntry`, `HourDictionary`, `Schedule`, `Snapshot`
//! - **`validation`**: Structural input checks (duplicate IDs, negative
//!   quantities, inverted intervals, dangling references)
//! - **`constraints`**: Normalizes raw records into per-employee effective
//!   capacities and per-demand hour requirements
//! - **`ordering`**: Orders competing demands into a total, deterministic
//!   sequence
//! - **`allocator`**: The greedy allocation pass, schedule compilation, and
//!   summary reporting
//!
//! # Contract
//!
//! The engine is a pure, synchronous computation: no I/O, no global state,
//! no locking. Given the same snapshot it produces a byte-identical
//! [`models::Schedule`]. Unmet demand is data (a `ShortfallRecord`), never an
//! error; only structurally malformed input aborts a run.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

pub mod allocator;
pub mod constraints;
pub mod models;
pub mod ordering;
pub mod validation;
