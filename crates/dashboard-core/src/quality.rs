//! Metric catalog and threshold classification for code-quality measures.

use crate::models::{MetricStatus, QualityMetric};

/// Metric keys requested from the quality server, in display order.
pub const METRIC_KEYS: [&str; 5] = [
    "coverage",
    "duplicated_lines_density",
    "sqale_index",
    "code_smells",
    "bugs",
];

/// Build a classified metric card for a known metric key.
///
/// Values arrive already normalized to display units (sqale_index in
/// hours). Unknown keys yield None so callers can skip measures this
/// dashboard does not chart.
pub fn build_metric(key: &str, value: f64) -> Option<QualityMetric> {
    let (name, unit, description, status) = match key {
        "coverage" => (
            "Code Coverage",
            "%",
            "Percentage of code covered by tests",
            if value >= 80.0 {
                MetricStatus::Good
            } else if value >= 50.0 {
                MetricStatus::Warning
            } else {
                MetricStatus::Critical
            },
        ),
        "duplicated_lines_density" => (
            "Duplication",
            "%",
            "Percentage of duplicated code",
            if value <= 5.0 {
                MetricStatus::Good
            } else if value <= 15.0 {
                MetricStatus::Warning
            } else {
                MetricStatus::Critical
            },
        ),
        "sqale_index" => (
            "Technical Debt",
            "h",
            "Hours needed to fix all issues",
            if value <= 8.0 {
                MetricStatus::Good
            } else if value <= 40.0 {
                MetricStatus::Warning
            } else {
                MetricStatus::Critical
            },
        ),
        "code_smells" => (
            "Code Smells",
            "",
            "Number of code smells detected",
            if value < 20.0 {
                MetricStatus::Good
            } else if value < 100.0 {
                MetricStatus::Warning
            } else {
                MetricStatus::Critical
            },
        ),
        "bugs" => (
            "Bugs",
            "",
            "Number of bugs detected",
            if value == 0.0 {
                MetricStatus::Good
            } else if value <= 5.0 {
                MetricStatus::Warning
            } else {
                MetricStatus::Critical
            },
        ),
        _ => return None,
    };

    Some(QualityMetric {
        key: key.to_string(),
        name: name.to_string(),
        value,
        unit: unit.to_string(),
        status,
        description: description.to_string(),
    })
}
