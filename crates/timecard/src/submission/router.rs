use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Submission;
use super::repository::{DirectoryError, EffortStore, ProjectDirectory};
use super::service::{SubmissionError, TimecardService};

/// Router builder exposing the timecard submission endpoints.
pub fn timecard_router<S, D>(service: Arc<TimecardService<S, D>>) -> Router
where
    S: EffortStore + 'static,
    D: ProjectDirectory + 'static,
{
    Router::new()
        .route("/timecards/submit", post(submit_handler::<S, D>))
        .route("/timecards/efforts", get(efforts_handler::<S, D>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EffortsQuery {
    #[serde(default)]
    pub(crate) employee_id: Option<String>,
}

pub(crate) async fn submit_handler<S, D>(
    State(service): State<Arc<TimecardService<S, D>>>,
    axum::Json(submission): axum::Json<Submission>,
) -> Response
where
    S: EffortStore + 'static,
    D: ProjectDirectory + 'static,
{
    match service.submit(&submission) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn efforts_handler<S, D>(
    State(service): State<Arc<TimecardService<S, D>>>,
    Query(query): Query<EffortsQuery>,
) -> Response
where
    S: EffortStore + 'static,
    D: ProjectDirectory + 'static,
{
    match service.efforts(query.employee_id.as_deref()) {
        Ok(efforts) => (StatusCode::OK, axum::Json(efforts)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SubmissionError) -> Response {
    let status = match &error {
        SubmissionError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
        SubmissionError::Directory(DirectoryError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
        SubmissionError::Directory(_) | SubmissionError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
