use super::domain::{Effort, StoredEffort, VerificationRequest, VerificationResult};

/// Append-only storage for accepted efforts.
pub trait EffortStore: Send + Sync {
    /// Append every effort in one write. Records are never deduplicated.
    fn save_all(&self, efforts: Vec<Effort>) -> Result<Vec<StoredEffort>, StoreError>;
    fn find_all(&self) -> Result<Vec<StoredEffort>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("effort store unavailable: {0}")]
    Unavailable(String),
}

/// External directory that knows which projects and sub-projects exist.
///
/// An empty result means every requested group exists. Result order is unspecified.
pub trait ProjectDirectory: Send + Sync {
    fn verify(
        &self,
        requests: &[VerificationRequest],
    ) -> Result<Vec<VerificationResult>, DirectoryError>;
}

/// Failure to obtain an answer from the project directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("project directory unavailable: {0}")]
    Unavailable(String),
    #[error("project directory timed out after {millis}ms")]
    Timeout { millis: u64 },
}
