use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::aggregate::verification_groups;
use super::domain::{EffortStatus, StoredEffort, Submission};
use super::flatten::flatten;
use super::rejection::{BusinessError, ErrorKey};
use super::repository::{DirectoryError, EffortStore, ProjectDirectory, StoreError};
use super::verify::ensure_projects_exist;

/// Service composing the flattening, validation, verification, and persistence stages.
pub struct TimecardService<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> TimecardService<S, D>
where
    S: EffortStore + 'static,
    D: ProjectDirectory + 'static,
{
    pub fn new(store: Arc<S>, directory: Arc<D>) -> Self {
        Self { store, directory }
    }

    /// Accept or reject a submission as a whole.
    ///
    /// The store is written once, and only after the directory has confirmed every
    /// referenced project and sub-project.
    pub fn submit(&self, submission: &Submission) -> Result<Vec<StoredEffort>, SubmissionError> {
        let result = self.process(submission);
        match &result {
            Ok(stored) => info!(
                employee_id = %submission.employee_id,
                efforts = stored.len(),
                status = EffortStatus::Submitted.label(),
                "timecard accepted"
            ),
            Err(SubmissionError::Rejected(rejection)) => warn!(
                employee_id = %submission.employee_id,
                error = %rejection.key,
                "timecard rejected"
            ),
            Err(SubmissionError::InvalidDate { value, .. }) => warn!(
                employee_id = %submission.employee_id,
                date = %value,
                "timecard carries a malformed date"
            ),
            Err(other) => error!(
                employee_id = %submission.employee_id,
                error = %other,
                "timecard submission failed"
            ),
        }
        result
    }

    fn process(&self, submission: &Submission) -> Result<Vec<StoredEffort>, SubmissionError> {
        let efforts = flatten(submission)?;
        let groups = verification_groups(&efforts);
        debug!(
            efforts = efforts.len(),
            groups = groups.len(),
            "submission flattened"
        );

        ensure_projects_exist(self.directory.as_ref(), &groups)?;

        let stored = self.store.save_all(efforts)?;
        Ok(stored)
    }

    /// All stored efforts, optionally narrowed to one employee.
    pub fn efforts(
        &self,
        employee_id: Option<&str>,
    ) -> Result<Vec<StoredEffort>, SubmissionError> {
        let mut efforts = self.store.find_all()?;
        if let Some(employee_id) = employee_id {
            efforts.retain(|stored| stored.effort.employee_id == employee_id);
        }
        Ok(efforts)
    }
}

/// Error raised while processing a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Rejected(#[from] BusinessError),
    #[error("invalid effort date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// The business rejection kind, if this is one.
    pub fn error_key(&self) -> Option<ErrorKey> {
        match self {
            SubmissionError::Rejected(rejection) => Some(rejection.key),
            _ => None,
        }
    }
}
