use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use timecard::submission::{
    CatalogError, Effort, EffortId, EffortStore, ProjectCatalog, StoreError, StoredEffort,
};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Append-only effort store held in process memory.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEffortStore {
    records: Arc<Mutex<Vec<StoredEffort>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryEffortStore {
    fn next_id(&self) -> EffortId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        EffortId(format!("eff-{id:06}"))
    }
}

impl EffortStore for InMemoryEffortStore {
    fn save_all(&self, efforts: Vec<Effort>) -> Result<Vec<StoredEffort>, StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("effort store lock poisoned".to_string()))?;
        let stored: Vec<StoredEffort> = efforts
            .into_iter()
            .map(|effort| StoredEffort {
                id: self.next_id(),
                effort,
            })
            .collect();
        guard.extend(stored.iter().cloned());
        Ok(stored)
    }

    fn find_all(&self) -> Result<Vec<StoredEffort>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("effort store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

/// Build the project directory, starting empty when no catalog is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ProjectCatalog, CatalogError> {
    match path {
        Some(path) => ProjectCatalog::from_json_file(path),
        None => {
            warn!("no project catalog configured; every timecard will fail verification");
            Ok(ProjectCatalog::default())
        }
    }
}
