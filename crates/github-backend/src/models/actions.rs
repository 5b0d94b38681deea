use serde::{Deserialize, Serialize};

/// Response wrapper for /actions/workflows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubWorkflowList {
    pub total_count: u64,
    #[serde(default)]
    pub workflows: Vec<GitHubWorkflow>,
}

/// Workflow definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubWorkflow {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Response wrapper for /actions/runs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRunList {
    pub total_count: u64,
    #[serde(default)]
    pub workflow_runs: Vec<GitHubWorkflowRun>,
}

/// Single workflow run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubWorkflowRun {
    pub id: u64,
    pub workflow_id: u64,
    /// Null while the run is queued or in progress
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
}
