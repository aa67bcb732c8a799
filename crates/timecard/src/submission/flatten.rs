use chrono::NaiveDate;

use super::domain::{Effort, EffortInput, EffortStatus, Entry, SubEntry, Submission};
use super::hours::check_working_hours;
use super::service::SubmissionError;

/// Expand a nested submission into one effort per effort input, in submission order.
///
/// Each input's hours are checked before its record is built, so the first violation
/// stops the walk and nothing after it is parsed.
pub fn flatten(submission: &Submission) -> Result<Vec<Effort>, SubmissionError> {
    let capacity = submission
        .entries
        .iter()
        .flat_map(|entry| &entry.sub_entries)
        .map(|sub_entry| sub_entry.efforts.len())
        .sum();
    let mut efforts = Vec::with_capacity(capacity);

    for entry in &submission.entries {
        for sub_entry in &entry.sub_entries {
            for input in &sub_entry.efforts {
                efforts.push(build_effort(submission, entry, sub_entry, input)?);
            }
        }
    }

    Ok(efforts)
}

fn build_effort(
    submission: &Submission,
    entry: &Entry,
    sub_entry: &SubEntry,
    input: &EffortInput,
) -> Result<Effort, SubmissionError> {
    check_working_hours(input.working_hours)?;
    let date = parse_date(&input.date)?;

    Ok(Effort {
        employee_id: submission.employee_id.clone(),
        date,
        working_hours: input.working_hours,
        location_code: sub_entry.location_code.clone(),
        billable: sub_entry.billable,
        note: input.note.clone(),
        sub_project_id: sub_entry.sub_project_id.clone(),
        project_id: entry.project_id.clone(),
        status: EffortStatus::Submitted,
    })
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, SubmissionError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| SubmissionError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}
