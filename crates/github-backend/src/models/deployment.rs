use serde::{Deserialize, Serialize};

/// GitHub deployment record. The listing carries no outcome; that lives in
/// the deployment's statuses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubDeployment {
    pub id: u64,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub statuses_url: Option<String>,
}

/// One status entry for a deployment, newest first in the listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubDeploymentStatus {
    pub id: u64,
    pub state: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
