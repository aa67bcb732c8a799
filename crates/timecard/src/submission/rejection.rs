use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable reason a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKey {
    WrongWorkingHours,
    ProjectsOrSubprojectsNotExist,
}

impl ErrorKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKey::WrongWorkingHours => "WRONG_WORKING_HOURS",
            ErrorKey::ProjectsOrSubprojectsNotExist => "PROJECTS_OR_SUBPROJECTS_NOT_EXIST",
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business-rule rejection. Callers fix the submission and resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{key}")]
pub struct BusinessError {
    pub key: ErrorKey,
}

impl BusinessError {
    pub const fn new(key: ErrorKey) -> Self {
        Self { key }
    }
}

impl From<ErrorKey> for BusinessError {
    fn from(key: ErrorKey) -> Self {
        Self::new(key)
    }
}
