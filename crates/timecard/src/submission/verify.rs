use tracing::debug;

use super::domain::VerificationRequest;
use super::rejection::{BusinessError, ErrorKey};
use super::repository::ProjectDirectory;
use super::service::SubmissionError;

/// Ask the directory about every group in a single call and reject on any missing group.
pub fn ensure_projects_exist<D>(
    directory: &D,
    requests: &[VerificationRequest],
) -> Result<(), SubmissionError>
where
    D: ProjectDirectory + ?Sized,
{
    let missing = directory.verify(requests)?;
    if missing.is_empty() {
        return Ok(());
    }

    let missing_projects: Vec<&str> = missing
        .iter()
        .map(|group| group.project_id.as_str())
        .collect();
    debug!(?missing_projects, "submission references unknown projects");

    Err(BusinessError::new(ErrorKey::ProjectsOrSubprojectsNotExist).into())
}
