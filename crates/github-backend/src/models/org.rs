use serde::{Deserialize, Serialize};

/// GitHub organization, covering both the /user/orgs summary shape and the
/// richer /orgs/{org} detail shape
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubOrganization {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Only the detail endpoint reports this
    #[serde(default)]
    pub created_at: Option<String>,
    /// Orgs never report this; defaults to false so the view reads public
    #[serde(default)]
    pub private: bool,
}
