use clap::Args;
use std::fs;
use std::path::PathBuf;
use timecard::config::AppConfig;
use timecard::error::AppError;
use timecard::submission::{
    ensure_projects_exist, flatten, verification_groups, ProjectCatalog, Submission,
    VerificationRequest,
};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Timecard submission JSON to check
    pub(crate) file: PathBuf,
    /// Project catalog (JSON) to verify against; falls back to APP_PROJECT_CATALOG
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

/// Outcome of an offline check, rendered for the terminal.
#[derive(Debug)]
pub(crate) struct CheckReport {
    pub(crate) employee_id: String,
    pub(crate) efforts: usize,
    pub(crate) groups: Vec<VerificationRequest>,
    pub(crate) verified: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file)?;
    let submission: Submission = serde_json::from_str(&raw)?;

    let catalog_path = match args.catalog {
        Some(path) => Some(path),
        None => AppConfig::load()?.directory.catalog_path,
    };
    let catalog = catalog_path
        .map(ProjectCatalog::from_json_file)
        .transpose()?;

    let report = check_submission(&submission, catalog.as_ref())?;
    print_report(&report);
    Ok(())
}

pub(crate) fn check_submission(
    submission: &Submission,
    catalog: Option<&ProjectCatalog>,
) -> Result<CheckReport, AppError> {
    let efforts = flatten(submission)?;
    let groups = verification_groups(&efforts);

    let verified = match catalog {
        Some(catalog) => {
            ensure_projects_exist(catalog, &groups)?;
            true
        }
        None => false,
    };

    Ok(CheckReport {
        employee_id: submission.employee_id.clone(),
        efforts: efforts.len(),
        groups,
        verified,
    })
}

fn print_report(report: &CheckReport) {
    println!("Timecard for {}", report.employee_id);
    println!("  Efforts: {}", report.efforts);
    println!("  Verification groups:");
    for group in &report.groups {
        let sub_projects: Vec<&str> = group.sub_project_ids.iter().map(String::as_str).collect();
        println!("    {} -> {}", group.project_id, sub_projects.join(", "));
    }
    if report.verified {
        println!("  Projects: verified against catalog");
    } else {
        println!("  Projects: not verified (no catalog)");
    }
}
