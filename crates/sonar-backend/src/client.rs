use std::time::Duration;
use ureq::Agent;

use crate::error::{Result, SonarError};
use crate::models::*;
use dashboard_core::quality::METRIC_KEYS;

/// Default server when no URL is configured
pub const DEFAULT_BASE_URL: &str = "https://sonarcloud.io";

/// How many issues to fetch, most severe first
const ISSUE_PAGE_SIZE: u32 = 10;

/// SonarQube Web API client
///
/// Works against SonarCloud and self-hosted SonarQube servers; both speak
/// the same Web API for the endpoints used here.
#[derive(Debug)]
pub struct SonarClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl SonarClient {
    /// Create a new client targeting SonarCloud
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a new client with a custom server URL (for self-hosted
    /// SonarQube or testing)
    ///
    /// Refuses an empty token up front: anonymous access only works on
    /// public projects and yields confusing partial data everywhere else.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(SonarError::MissingToken);
        }

        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
        })
    }

    /// Build a Web API URL
    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // SonarQube error format: {"errors":[{"msg":"..."}]}
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            let messages: Vec<String> = error_response
                .get("errors")
                .and_then(|e| e.as_array())
                .map(|errors| {
                    errors
                        .iter()
                        .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                        .map(|s| s.to_string())
                        .collect()
                })
                .unwrap_or_default();

            if messages.is_empty() {
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body
                }
            } else {
                messages.join("; ")
            }
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(SonarError::Unauthorized)
        } else {
            Err(SonarError::Api { status, message })
        }
    }

    /// GET a URL and decode the JSON body
    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/json")
            .call()
            .map_err(SonarError::Http)?;

        let mut response = self.check_response(response)?;
        Ok(response.body_mut().read_json()?)
    }

    /// Fetch the dashboard's metric set for a component
    pub fn get_measures(&self, component: &str) -> Result<SonarComponent> {
        let url = format!(
            "{}?component={}&metricKeys={}",
            self.api_url("/measures/component"),
            urlencoding::encode(component),
            METRIC_KEYS.join(",")
        );

        let response: SonarMeasuresResponse = self.get_json(&url)?;
        Ok(response.component)
    }

    /// Search unresolved issues for a component, most severe first
    pub fn search_issues(&self, component: &str) -> Result<Vec<SonarIssue>> {
        let url = format!(
            "{}?components={}&resolved=false&ps={}&s=SEVERITY&asc=false",
            self.api_url("/issues/search"),
            urlencoding::encode(component),
            ISSUE_PAGE_SIZE
        );

        let response: SonarIssueSearchResponse = self.get_json(&url)?;
        Ok(response.issues)
    }
}
