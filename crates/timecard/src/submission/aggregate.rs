use std::collections::{BTreeMap, BTreeSet};

use super::domain::{Effort, VerificationRequest};

/// Group efforts by project, merging the sub-project ids of repeated projects.
pub fn verification_groups(efforts: &[Effort]) -> Vec<VerificationRequest> {
    efforts
        .iter()
        .fold(
            BTreeMap::<&str, BTreeSet<String>>::new(),
            |mut groups, effort| {
                groups
                    .entry(effort.project_id.as_str())
                    .and_modify(|sub_projects| {
                        sub_projects.insert(effort.sub_project_id.clone());
                    })
                    .or_insert_with(|| BTreeSet::from([effort.sub_project_id.clone()]));
                groups
            },
        )
        .into_iter()
        .map(|(project_id, sub_project_ids)| VerificationRequest {
            project_id: project_id.to_string(),
            sub_project_ids,
        })
        .collect()
}
