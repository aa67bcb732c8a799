use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::submission::domain::{
    Effort, EffortId, EffortInput, Entry, StoredEffort, SubEntry, Submission,
    VerificationRequest, VerificationResult,
};
use crate::submission::repository::{DirectoryError, EffortStore, ProjectDirectory, StoreError};
use crate::submission::{timecard_router, TimecardService};

pub(super) fn effort_input(date: &str, working_hours: f64) -> EffortInput {
    EffortInput {
        date: date.to_string(),
        working_hours,
        note: "note".to_string(),
    }
}

pub(super) fn sub_entry(sub_project_id: &str, efforts: Vec<EffortInput>) -> SubEntry {
    SubEntry {
        sub_project_id: sub_project_id.to_string(),
        location_code: "CN".to_string(),
        billable: true,
        efforts,
    }
}

pub(super) fn entry(project_id: &str, sub_entries: Vec<SubEntry>) -> Entry {
    Entry {
        project_id: project_id.to_string(),
        sub_entries,
    }
}

/// One entry, one sub-entry, one eight-hour effort on 2022-01-01.
pub(super) fn submission() -> Submission {
    Submission {
        employee_id: "employeeId".to_string(),
        entries: vec![entry(
            "projectId",
            vec![sub_entry(
                "subprojectID",
                vec![effort_input("2022-01-01", 8.0)],
            )],
        )],
    }
}

pub(super) fn submission_with_hours(working_hours: f64) -> Submission {
    let mut submission = submission();
    submission.entries[0].sub_entries[0].efforts[0].working_hours = working_hours;
    submission
}

/// Two entries for `alpha` and one for `beta`, five efforts in total.
pub(super) fn multi_project_submission() -> Submission {
    Submission {
        employee_id: "emp-7".to_string(),
        entries: vec![
            entry(
                "alpha",
                vec![
                    sub_entry(
                        "alpha-design",
                        vec![
                            effort_input("2022-03-01", 4.0),
                            effort_input("2022-03-02", 6.5),
                        ],
                    ),
                    sub_entry("alpha-build", vec![effort_input("2022-03-03", 8.0)]),
                ],
            ),
            entry(
                "beta",
                vec![sub_entry("beta-ops", vec![effort_input("2022-03-04", 5.0)])],
            ),
            entry(
                "alpha",
                vec![sub_entry("alpha-qa", vec![effort_input("2022-03-05", 7.0)])],
            ),
        ],
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<Vec<StoredEffort>>>,
    batches: Arc<Mutex<Vec<usize>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<StoredEffort> {
        self.records.lock().expect("store mutex poisoned").clone()
    }

    /// Size of every `save_all` batch, in call order.
    pub(super) fn batches(&self) -> Vec<usize> {
        self.batches.lock().expect("store mutex poisoned").clone()
    }
}

impl EffortStore for MemoryStore {
    fn save_all(&self, efforts: Vec<Effort>) -> Result<Vec<StoredEffort>, StoreError> {
        self.batches
            .lock()
            .expect("store mutex poisoned")
            .push(efforts.len());
        let stored: Vec<StoredEffort> = efforts
            .into_iter()
            .map(|effort| {
                let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
                StoredEffort {
                    id: EffortId(format!("eff-{id:06}")),
                    effort,
                }
            })
            .collect();
        self.records
            .lock()
            .expect("store mutex poisoned")
            .extend(stored.iter().cloned());
        Ok(stored)
    }

    fn find_all(&self) -> Result<Vec<StoredEffort>, StoreError> {
        Ok(self.records())
    }
}

pub(super) struct UnavailableStore;

impl EffortStore for UnavailableStore {
    fn save_all(&self, _efforts: Vec<Effort>) -> Result<Vec<StoredEffort>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_all(&self) -> Result<Vec<StoredEffort>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Directory double returning a canned answer and recording every request batch.
#[derive(Clone)]
pub(super) struct ScriptedDirectory {
    answer: Arc<Mutex<Result<Vec<VerificationResult>, DirectoryError>>>,
    calls: Arc<Mutex<Vec<Vec<VerificationRequest>>>>,
}

impl ScriptedDirectory {
    pub(super) fn all_exist() -> Self {
        Self::answering(Ok(Vec::new()))
    }

    pub(super) fn missing(groups: Vec<VerificationResult>) -> Self {
        Self::answering(Ok(groups))
    }

    pub(super) fn failing(error: DirectoryError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(answer: Result<Vec<VerificationResult>, DirectoryError>) -> Self {
        Self {
            answer: Arc::new(Mutex::new(answer)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn calls(&self) -> Vec<Vec<VerificationRequest>> {
        self.calls.lock().expect("directory mutex poisoned").clone()
    }
}

impl ProjectDirectory for ScriptedDirectory {
    fn verify(
        &self,
        requests: &[VerificationRequest],
    ) -> Result<Vec<VerificationResult>, DirectoryError> {
        self.calls
            .lock()
            .expect("directory mutex poisoned")
            .push(requests.to_vec());
        match &*self.answer.lock().expect("directory mutex poisoned") {
            Ok(groups) => Ok(groups.clone()),
            Err(DirectoryError::Unavailable(reason)) => {
                Err(DirectoryError::Unavailable(reason.clone()))
            }
            Err(DirectoryError::Timeout { millis }) => {
                Err(DirectoryError::Timeout { millis: *millis })
            }
        }
    }
}

pub(super) fn build_service(
    directory: ScriptedDirectory,
) -> (
    TimecardService<MemoryStore, ScriptedDirectory>,
    Arc<MemoryStore>,
    Arc<ScriptedDirectory>,
) {
    let store = Arc::new(MemoryStore::default());
    let directory = Arc::new(directory);
    let service = TimecardService::new(store.clone(), directory.clone());
    (service, store, directory)
}

pub(super) fn router_with_service(
    service: TimecardService<MemoryStore, ScriptedDirectory>,
) -> axum::Router {
    timecard_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Layer that keeps the level of every event emitted while it is installed.
#[derive(Default, Clone)]
pub(super) struct LevelRecorder {
    levels: Arc<Mutex<Vec<tracing::Level>>>,
}

impl LevelRecorder {
    pub(super) fn count(&self, level: tracing::Level) -> usize {
        self.levels
            .lock()
            .expect("recorder mutex poisoned")
            .iter()
            .filter(|recorded| **recorded == level)
            .count()
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelRecorder {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.levels
            .lock()
            .expect("recorder mutex poisoned")
            .push(*event.metadata().level());
    }
}

/// Run `f` with a recorder installed as the thread's default subscriber.
pub(super) fn with_recorded_levels<T>(f: impl FnOnce() -> T) -> (T, LevelRecorder) {
    use tracing_subscriber::layer::SubscriberExt;

    let recorder = LevelRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, recorder)
}
