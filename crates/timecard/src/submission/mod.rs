//! Timecard submission intake.
//!
//! `flatten` walks the nested payload into effort records (checking working hours as it
//! goes), `aggregate` collapses the referenced identifiers into one verification group per
//! project, `verify` gates the batch on the project directory, and `service` commits the
//! accepted records in a single store write.

pub mod aggregate;
pub mod catalog;
pub mod domain;
pub mod flatten;
pub mod hours;
pub mod rejection;
pub mod repository;
pub mod router;
pub mod service;
pub mod verify;

#[cfg(test)]
mod tests;

pub use aggregate::verification_groups;
pub use catalog::{CatalogError, ProjectCatalog};
pub use domain::{
    Effort, EffortId, EffortInput, EffortStatus, Entry, StoredEffort, SubEntry, Submission,
    VerificationRequest, VerificationResult,
};
pub use flatten::flatten;
pub use hours::{check_working_hours, MAX_WORKING_HOURS, MIN_WORKING_HOURS};
pub use rejection::{BusinessError, ErrorKey};
pub use repository::{DirectoryError, EffortStore, ProjectDirectory, StoreError};
pub use router::timecard_router;
pub use service::{SubmissionError, TimecardService};
pub use verify::ensure_projects_exist;
