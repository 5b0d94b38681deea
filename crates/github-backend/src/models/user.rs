use serde::{Deserialize, Serialize};

/// GitHub account as returned by /user, member listings, and nested owner
/// fields. Everything beyond id and login is optional on some endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubUser {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Collaborator entry: a user plus the permission map the collaborators
/// endpoint attaches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubCollaborator {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub permissions: Option<GitHubPermissions>,
}

/// Boolean permission map on collaborator entries
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GitHubPermissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}
