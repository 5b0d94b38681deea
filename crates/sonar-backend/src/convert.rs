//! Model conversions from SonarQube types to dashboard-core types

use dashboard_core::quality::build_metric;
use dashboard_core::{IssueSeverity, QualityIssue, QualityMetric};

use crate::models::{SonarIssue, SonarMeasure};

/// Convert one measure to a classified metric card.
///
/// Unknown metric keys and measures without a current value are skipped.
/// Technical debt arrives in minutes and is normalized to hours first.
pub fn to_quality_metric(measure: &SonarMeasure) -> Option<QualityMetric> {
    let raw: f64 = measure.value.as_deref()?.parse().ok()?;

    let value = match measure.metric.as_str() {
        "sqale_index" => raw / 60.0,
        _ => raw,
    };

    build_metric(&measure.metric, value)
}

/// Map the server's severity scale onto the dashboard's
fn to_severity(severity: Option<&str>) -> IssueSeverity {
    match severity.map(|s| s.to_uppercase()).as_deref() {
        Some("BLOCKER") => IssueSeverity::Critical,
        Some("CRITICAL") => IssueSeverity::High,
        Some("MAJOR") => IssueSeverity::Medium,
        Some("MINOR") => IssueSeverity::Low,
        _ => IssueSeverity::Info,
    }
}

/// Convert one issue, stripping the project prefix from the component key
/// so listings show the file path
pub fn to_quality_issue(issue: SonarIssue) -> QualityIssue {
    let component = match issue.component.split_once(':') {
        Some((_, path)) => path.to_string(),
        None => issue.component,
    };

    QualityIssue {
        title: issue.message,
        severity: to_severity(issue.severity.as_deref()),
        component,
        line: issue.line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::MetricStatus;

    fn measure(metric: &str, value: Option<&str>) -> SonarMeasure {
        SonarMeasure {
            metric: metric.to_string(),
            value: value.map(|v| v.to_string()),
            best_value: None,
        }
    }

    fn issue(severity: Option<&str>, component: &str) -> SonarIssue {
        SonarIssue {
            key: "AY123".to_string(),
            rule: Some("rust:S1135".to_string()),
            severity: severity.map(|s| s.to_string()),
            component: component.to_string(),
            line: Some(42),
            message: "Complete the task associated to this TODO comment.".to_string(),
            issue_type: Some("CODE_SMELL".to_string()),
        }
    }

    #[test]
    fn test_technical_debt_minutes_become_hours() {
        let metric = to_quality_metric(&measure("sqale_index", Some("500"))).unwrap();
        assert_eq!(metric.value, 500.0 / 60.0);
        assert_eq!(metric.unit, "h");
        assert_eq!(metric.status, MetricStatus::Warning);
    }

    #[test]
    fn test_coverage_value_passes_through() {
        let metric = to_quality_metric(&measure("coverage", Some("82.5"))).unwrap();
        assert_eq!(metric.value, 82.5);
        assert_eq!(metric.status, MetricStatus::Good);
    }

    #[test]
    fn test_measure_without_value_is_skipped() {
        assert!(to_quality_metric(&measure("coverage", None)).is_none());
    }

    #[test]
    fn test_unparsable_value_is_skipped() {
        assert!(to_quality_metric(&measure("coverage", Some("n/a"))).is_none());
    }

    #[test]
    fn test_unknown_metric_is_skipped() {
        assert!(to_quality_metric(&measure("ncloc", Some("1234"))).is_none());
    }

    #[test]
    fn test_severity_mapping() {
        let cases = [
            (Some("BLOCKER"), IssueSeverity::Critical),
            (Some("CRITICAL"), IssueSeverity::High),
            (Some("MAJOR"), IssueSeverity::Medium),
            (Some("MINOR"), IssueSeverity::Low),
            (Some("INFO"), IssueSeverity::Info),
            (Some("minor"), IssueSeverity::Low),
            (Some("SOMETHING_NEW"), IssueSeverity::Info),
            (None, IssueSeverity::Info),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                to_quality_issue(issue(raw, "p:src/lib.rs")).severity,
                expected,
                "severity {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_component_prefix_is_stripped() {
        let converted = to_quality_issue(issue(Some("MAJOR"), "acme_webapp:src/main.rs"));
        assert_eq!(converted.component, "src/main.rs");
        assert_eq!(converted.line, Some(42));

        let bare = to_quality_issue(issue(Some("MAJOR"), "acme_webapp"));
        assert_eq!(bare.component, "acme_webapp");
    }
}
