//! Deterministic sample data for views that have nothing live to show.
//!
//! Every value derives from a seed computed over the scope name, so the
//! same organization or repository always renders the same figures and
//! test runs are reproducible. No RNG is involved.

use crate::models::{
    Deployment, IssueSeverity, QualityIssue, QualityReport, WorkflowCategory, WorkflowStat,
};
use crate::quality;
use chrono::NaiveDate;

/// Sum of the Unicode scalar values of the scope name.
pub fn seed(name: &str) -> u64 {
    name.chars().map(|c| c as u64).sum()
}

/// Synthetic deployments spread across one calendar month.
///
/// Count, states, environments, and timestamps all derive from the seed;
/// an invalid year/month yields an empty list rather than panicking.
pub fn sample_deployments(name: &str, year: i32, month: u32) -> Vec<Deployment> {
    let Some(days_in_month) = days_in_month(year, month) else {
        return Vec::new();
    };
    let seed = seed(name);
    let count = 20 + seed % 20;

    (0..count)
        .filter_map(|i| {
            let day = 1 + (seed.wrapping_mul(7) + i * 13) % u64::from(days_in_month);
            let hour = (seed + i * 5) % 24;
            let minute = (seed.wrapping_mul(3) + i * 11) % 60;
            let created_at = NaiveDate::from_ymd_opt(year, month, day as u32)?
                .and_hms_opt(hour as u32, minute as u32, 0)?
                .and_utc();

            let state = match (seed + i) % 10 {
                0 | 1 => "failure",
                2 => "pending",
                _ => "success",
            };
            let environment = match i % 3 {
                0 => "production",
                1 => "staging",
                _ => "development",
            };

            Some(Deployment {
                state: state.to_string(),
                environment: Some(environment.to_string()),
                created_at,
            })
        })
        .collect()
}

/// Synthetic per-workflow outcome rates for the usual pipeline quartet.
pub fn sample_workflow_stats(name: &str) -> Vec<WorkflowStat> {
    let seed = seed(name);
    let workflows = [
        ("CI", WorkflowCategory::Tests),
        ("CD", WorkflowCategory::Deploy),
        ("Tests", WorkflowCategory::UnitTests),
        ("Build", WorkflowCategory::Build),
    ];

    workflows
        .iter()
        .enumerate()
        .map(|(idx, (workflow, category))| {
            let idx = idx as u64;
            let success = 60 + (seed + idx * 31) % 40;
            // Failures cap at what is left so the skipped remainder
            // cannot underflow.
            let failure = ((seed / 2 + idx * 17) % 20).min(100 - success);
            WorkflowStat {
                name: workflow.to_string(),
                category: *category,
                success_rate: success as u32,
                failure_rate: failure as u32,
                skipped_rate: (100 - success - failure) as u32,
                total_runs: (12 + (seed + idx * 7) % 30) as usize,
                last_run: None,
            }
        })
        .collect()
}

/// Synthetic quality report: the five metric cards plus five open issues.
///
/// Statuses come from the same thresholds as live data, so a sample
/// dashboard never contradicts the classification rules.
pub fn sample_quality_report(name: &str) -> QualityReport {
    let seed = seed(name);
    let values = [
        ("coverage", (80 + seed % 20) as f64),
        ("duplicated_lines_density", ((seed / 3) % 10) as f64),
        ("sqale_index", (2 + seed % 4) as f64),
        ("code_smells", (seed.wrapping_mul(3) % 50) as f64),
        ("bugs", ((seed / 7) % 5) as f64),
    ];
    let metrics = values
        .iter()
        .filter_map(|(key, value)| quality::build_metric(key, *value))
        .collect();

    let titles = [
        "Missing error handling",
        "Unused variable",
        "Complex method",
        "Hardcoded value",
        "Uncaught exception",
    ];
    let severities = [
        IssueSeverity::Critical,
        IssueSeverity::High,
        IssueSeverity::Medium,
        IssueSeverity::Low,
        IssueSeverity::Info,
    ];
    let issues = titles
        .iter()
        .zip(severities)
        .enumerate()
        .map(|(i, (title, severity))| QualityIssue {
            title: format!("Issue #{}: {}", i + 1, title),
            severity,
            component: format!("src/components/Sample{}.tsx", i + 1),
            line: Some(1 + seed.wrapping_mul(i as u64 + 1) % 200),
        })
        .collect();

    QualityReport { metrics, issues }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;
    use chrono::Datelike;

    #[test]
    fn test_seed_is_char_code_sum() {
        assert_eq!(seed("abc"), 97 + 98 + 99);
        assert_eq!(seed(""), 0);
    }

    #[test]
    fn test_sample_deployments_are_deterministic() {
        let first = sample_deployments("acme-webapp", 2026, 8);
        let second = sample_deployments("acme-webapp", 2026, 8);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.state, b.state);
            assert_eq!(a.environment, b.environment);
            assert_eq!(a.created_at, b.created_at);
        }
    }

    #[test]
    fn test_sample_deployment_count_range() {
        for name in ["a", "acme", "a-much-longer-organization-name"] {
            let count = sample_deployments(name, 2026, 8).len();
            assert!((20..40).contains(&count), "{} deployments for {}", count, name);
        }
    }

    #[test]
    fn test_sample_deployments_stay_in_month() {
        for d in sample_deployments("acme", 2026, 2) {
            let date = d.created_at.date_naive();
            assert_eq!(date.year(), 2026);
            assert_eq!(date.month(), 2);
        }
    }

    #[test]
    fn test_sample_deployments_skew_successful() {
        let deployments = sample_deployments("acme", 2026, 8);
        let stats = stats::deployment_stats(&deployments);
        assert!(stats.successful > stats.failed);
        assert_eq!(stats.total, deployments.len());
    }

    #[test]
    fn test_invalid_month_yields_empty_list() {
        assert!(sample_deployments("acme", 2026, 13).is_empty());
    }

    #[test]
    fn test_sample_workflow_rates_sum_to_one_hundred() {
        for stat in sample_workflow_stats("acme-webapp") {
            assert!((60..100).contains(&stat.success_rate), "{}", stat.success_rate);
            assert_eq!(
                stat.success_rate + stat.failure_rate + stat.skipped_rate,
                100
            );
            assert!(stat.total_runs >= 12);
        }
    }

    #[test]
    fn test_sample_workflows_are_deterministic() {
        let first = sample_workflow_stats("gitopia");
        let second = sample_workflow_stats("gitopia");
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.success_rate, b.success_rate);
            assert_eq!(a.failure_rate, b.failure_rate);
        }
    }

    #[test]
    fn test_sample_quality_report_shape() {
        let report = sample_quality_report("acme");
        assert_eq!(report.metrics.len(), 5);
        assert_eq!(report.issues.len(), 5);
        let coverage = &report.metrics[0];
        assert_eq!(coverage.key, "coverage");
        assert!((80.0..100.0).contains(&coverage.value));
        assert_eq!(report.issues[0].severity, IssueSeverity::Critical);
        assert!(report.issues.iter().all(|i| i.line.is_some()));
    }

    #[test]
    fn test_different_names_usually_differ() {
        let a = sample_deployments("alpha", 2026, 8);
        let b = sample_deployments("omega-service", 2026, 8);
        assert_ne!(a.len(), b.len());
    }
}
