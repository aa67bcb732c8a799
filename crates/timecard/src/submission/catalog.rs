use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use super::domain::{VerificationRequest, VerificationResult};
use super::repository::{DirectoryError, ProjectDirectory};

/// Project directory backed by a static catalog of projects and their sub-projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: BTreeMap<String, BTreeSet<String>>,
}

impl ProjectCatalog {
    pub fn new(projects: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { projects }
    }

    /// Load a catalog shaped as `{"<project>": ["<sub-project>", ...]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let projects = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(projects))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn missing_from(&self, request: &VerificationRequest) -> Option<VerificationResult> {
        let missing: BTreeSet<String> = match self.projects.get(&request.project_id) {
            None => request.sub_project_ids.clone(),
            Some(known) => request
                .sub_project_ids
                .difference(known)
                .cloned()
                .collect(),
        };

        let project_known = self.projects.contains_key(&request.project_id);
        if project_known && missing.is_empty() {
            return None;
        }

        Some(VerificationRequest {
            project_id: request.project_id.clone(),
            sub_project_ids: missing,
        })
    }
}

impl ProjectDirectory for ProjectCatalog {
    fn verify(
        &self,
        requests: &[VerificationRequest],
    ) -> Result<Vec<VerificationResult>, DirectoryError> {
        Ok(requests
            .iter()
            .filter_map(|request| self.missing_from(request))
            .collect())
    }
}

/// Failure reading a project catalog from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read project catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("project catalog {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
