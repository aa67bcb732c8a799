//! Timecard submission pipeline.
//!
//! A submission is flattened into effort records, each record's working hours are checked,
//! the referenced project/sub-project identifiers are verified against the project
//! directory in one batch, and only then are the records handed to the effort store.

pub mod config;
pub mod error;
pub mod submission;
pub mod telemetry;
