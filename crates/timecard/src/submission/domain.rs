use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inbound timecard payload for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub employee_id: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Work booked against a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub project_id: String,
    #[serde(default)]
    pub sub_entries: Vec<SubEntry>,
}

/// Work booked against one sub-project, sharing location and billing terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubEntry {
    pub sub_project_id: String,
    pub location_code: String,
    pub billable: bool,
    #[serde(default)]
    pub efforts: Vec<EffortInput>,
}

/// A single day's effort as submitted. The date stays raw until flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffortInput {
    pub date: String,
    pub working_hours: f64,
    #[serde(default)]
    pub note: String,
}

/// Lifecycle marker carried by persisted efforts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffortStatus {
    Submitted,
}

impl EffortStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EffortStatus::Submitted => "SUBMITTED",
        }
    }
}

/// Flattened, validated effort record ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effort {
    pub employee_id: String,
    pub date: NaiveDate,
    pub working_hours: f64,
    pub location_code: String,
    pub billable: bool,
    pub note: String,
    pub sub_project_id: String,
    pub project_id: String,
    pub status: EffortStatus,
}

/// A project and the distinct sub-projects referenced under it.
///
/// The same shape comes back from the project directory for every group it could not
/// fully resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub project_id: String,
    pub sub_project_ids: BTreeSet<String>,
}

impl VerificationRequest {
    pub fn new(
        project_id: impl Into<String>,
        sub_project_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            sub_project_ids: sub_project_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Group reported as missing by the project directory.
pub type VerificationResult = VerificationRequest;

/// Identifier assigned by the effort store on append.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffortId(pub String);

/// Effort as held by the store, keyed by its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEffort {
    pub id: EffortId,
    #[serde(flatten)]
    pub effort: Effort,
}
