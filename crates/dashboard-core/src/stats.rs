//! Aggregation of raw activity records into dashboard statistics.

use crate::models::{
    Deployment, DeploymentDay, DeploymentRates, DeploymentStats, Workflow, WorkflowCategory,
    WorkflowRun, WorkflowStat,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Infer a category label from a workflow's definition path.
///
/// Keyword checks run in a fixed order and the first match wins, so
/// "deploy-to-production.yml" is Deploy even though "production" also
/// contains "pr".
pub fn categorize_workflow(path: &str) -> WorkflowCategory {
    let path = path.to_lowercase();
    if path.contains("build") {
        WorkflowCategory::Build
    } else if path.contains("integration") && path.contains("test") {
        WorkflowCategory::IntegrationTests
    } else if path.contains("unit") && path.contains("test") {
        WorkflowCategory::UnitTests
    } else if path.contains("test") {
        WorkflowCategory::Tests
    } else if path.contains("lint") || path.contains("quality") {
        WorkflowCategory::Lint
    } else if path.contains("deploy") {
        WorkflowCategory::Deploy
    } else if path.contains("release") {
        WorkflowCategory::Release
    } else if path.contains("pr") || path.contains("pull") {
        WorkflowCategory::PullRequest
    } else {
        WorkflowCategory::Unknown
    }
}

/// Group runs by workflow and compute per-workflow outcome rates.
///
/// Workflows with no runs produce a zero-filled stat. Runs whose
/// workflow_id matches no definition still aggregate, named "Unknown",
/// ordered after the defined workflows by ascending id.
pub fn workflow_stats(workflows: &[Workflow], runs: &[WorkflowRun]) -> Vec<WorkflowStat> {
    let mut groups: BTreeMap<u64, RunTotals> = BTreeMap::new();
    for run in runs {
        groups.entry(run.workflow_id).or_default().record(run);
    }

    let mut stats = Vec::with_capacity(workflows.len());
    for workflow in workflows {
        let totals = groups.remove(&workflow.id).unwrap_or_default();
        stats.push(totals.into_stat(workflow.name.clone(), categorize_workflow(&workflow.path)));
    }
    for totals in groups.into_values() {
        stats.push(totals.into_stat("Unknown".to_string(), WorkflowCategory::Unknown));
    }
    stats
}

#[derive(Default)]
struct RunTotals {
    success: usize,
    failure: usize,
    skipped: usize,
    last_run: Option<DateTime<Utc>>,
}

impl RunTotals {
    fn record(&mut self, run: &WorkflowRun) {
        // Anything that is neither a success nor a failure (cancelled,
        // skipped, in progress, ...) lands in the skipped bucket.
        match run.conclusion.as_deref() {
            Some("success") => self.success += 1,
            Some("failure") => self.failure += 1,
            _ => self.skipped += 1,
        }
        if self.last_run.is_none_or(|ts| run.created_at > ts) {
            self.last_run = Some(run.created_at);
        }
    }

    fn into_stat(self, name: String, category: WorkflowCategory) -> WorkflowStat {
        let total = self.success + self.failure + self.skipped;
        let (success_rate, failure_rate, skipped_rate) =
            remainder_rates(self.success, self.failure, total);
        WorkflowStat {
            name,
            category,
            success_rate,
            failure_rate,
            skipped_rate,
            total_runs: total,
            last_run: self.last_run,
        }
    }
}

/// Aggregate deployments into totals, rates, and a per-day series.
///
/// An empty input yields the zero-filled object: a successful fetch with
/// no records is genuine "no deployments", not a reason to fabricate data.
pub fn deployment_stats(deployments: &[Deployment]) -> DeploymentStats {
    let mut successful = 0;
    let mut failed = 0;
    let mut days: BTreeMap<NaiveDate, DeploymentDay> = BTreeMap::new();

    for deployment in deployments {
        let outcome = classify_deployment(&deployment.state);
        let date = deployment.created_at.date_naive();
        let day = days.entry(date).or_insert(DeploymentDay {
            date,
            total: 0,
            successful: 0,
            failed: 0,
            pending: 0,
        });
        day.total += 1;
        match outcome {
            DeployOutcome::Successful => {
                successful += 1;
                day.successful += 1;
            }
            DeployOutcome::Failed => {
                failed += 1;
                day.failed += 1;
            }
            DeployOutcome::Pending => day.pending += 1,
        }
    }

    let total = deployments.len();
    let (success, failure, pending_rate) = remainder_rates(successful, failed, total);
    DeploymentStats {
        total,
        successful,
        failed,
        pending: total - successful - failed,
        rates: DeploymentRates {
            success,
            failure,
            pending: pending_rate,
        },
        days: days.into_values().collect(),
    }
}

/// Keep only deployments created within one UTC calendar month.
pub fn deployments_in_month(deployments: &[Deployment], year: i32, month: u32) -> Vec<Deployment> {
    deployments
        .iter()
        .filter(|d| {
            let date = d.created_at.date_naive();
            date.year() == year && date.month() == month
        })
        .cloned()
        .collect()
}

enum DeployOutcome {
    Successful,
    Failed,
    Pending,
}

fn classify_deployment(state: &str) -> DeployOutcome {
    match state {
        "success" => DeployOutcome::Successful,
        "failure" | "error" => DeployOutcome::Failed,
        _ => DeployOutcome::Pending,
    }
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Round the first two rates and give the third bucket the remainder.
///
/// The second rate is capped at what is left after the first so the
/// remainder can never underflow when both halves round up.
fn remainder_rates(first: usize, second: usize, total: usize) -> (u32, u32, u32) {
    if total == 0 {
        return (0, 0, 0);
    }
    let first_rate = percent(first, total);
    let second_rate = percent(second, total).min(100 - first_rate);
    (first_rate, second_rate, 100 - first_rate - second_rate)
}
