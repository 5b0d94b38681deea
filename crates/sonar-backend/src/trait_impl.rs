//! QualityHost implementation for SonarClient

use dashboard_core::quality::METRIC_KEYS;
use dashboard_core::{QualityHost, QualityIssue, QualityMetric, Result};

use crate::client::SonarClient;
use crate::convert;
use crate::error::SonarError;

/// Map a 404 onto the typed not-found error for a component key
fn component_not_found(err: SonarError, component: &str) -> SonarError {
    match err {
        SonarError::Api { status: 404, .. } => SonarError::ComponentNotFound(component.to_string()),
        other => other,
    }
}

impl QualityHost for SonarClient {
    fn measures(&self, component: &str) -> Result<Vec<QualityMetric>> {
        let result = self
            .get_measures(component)
            .map_err(|e| component_not_found(e, component))?;

        // The server echoes measures in its own order; present cards in
        // catalog order
        let mut cards: Vec<QualityMetric> = result
            .measures
            .iter()
            .filter_map(convert::to_quality_metric)
            .collect();
        cards.sort_by_key(|card| {
            METRIC_KEYS
                .iter()
                .position(|key| *key == card.key)
                .unwrap_or(METRIC_KEYS.len())
        });

        Ok(cards)
    }

    fn issues(&self, component: &str) -> Result<Vec<QualityIssue>> {
        let issues = self
            .search_issues(component)
            .map_err(|e| component_not_found(e, component))?;

        Ok(issues.into_iter().map(convert::to_quality_issue).collect())
    }
}
