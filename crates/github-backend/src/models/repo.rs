use serde::{Deserialize, Serialize};

/// Owner field on repository payloads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepoOwner {
    pub id: u64,
    pub login: String,
    /// Account type: "User" or "Organization"
    #[serde(default, rename = "type")]
    pub owner_type: Option<String>,
}

/// GitHub repository
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: GitHubRepoOwner,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
