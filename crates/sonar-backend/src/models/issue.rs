use serde::{Deserialize, Serialize};

/// Envelope returned by the issue search endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarIssueSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<SonarIssue>,
}

/// One open issue
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarIssue {
    pub key: String,
    #[serde(default)]
    pub rule: Option<String>,
    /// BLOCKER, CRITICAL, MAJOR, MINOR or INFO
    #[serde(default)]
    pub severity: Option<String>,
    /// "{projectKey}:{filePath}" for file-level issues
    pub component: String,
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
}
