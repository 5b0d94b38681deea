use std::time::Duration;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

/// GitHub REST API client
#[derive(Debug)]
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url("https://api.github.com", token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub
    /// Enterprise or testing)
    ///
    /// Refuses an empty token up front: every endpoint this client talks to
    /// requires authentication, so there is no anonymous mode to fall into.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GitHubError::MissingToken);
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

    /// Build a repo-scoped URL
    fn repo_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            path
        )
    }

    /// Build an org-scoped URL
    fn org_url(&self, org: &str, path: &str) -> String {
        format!("{}/orgs/{}{}", self.base_url, urlencoding::encode(org), path)
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

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Surface the API's own message when the body carries one
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    /// GET a URL and decode the JSON body
    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        Ok(response.body_mut().read_json()?)
    }

    // ==================== Account Operations ====================

    /// Get the authenticated user's profile
    pub fn current_user(&self) -> Result<GitHubUser> {
        self.get_json(&format!("{}/user", self.base_url))
    }

    /// List organizations the authenticated user belongs to
    pub fn list_user_organizations(&self) -> Result<Vec<GitHubOrganization>> {
        self.get_json(&format!("{}/user/orgs", self.base_url))
    }

    /// Get one organization's detail record
    pub fn get_organization(&self, org: &str) -> Result<GitHubOrganization> {
        self.get_json(&self.org_url(org, ""))
    }

    /// List an organization's members
    pub fn list_organization_members(&self, org: &str) -> Result<Vec<GitHubUser>> {
        self.get_json(&self.org_url(org, "/members?per_page=100"))
    }

    // ==================== Repository Operations ====================

    /// List repositories the authenticated user can access, most recently
    /// updated first
    pub fn list_user_repositories(&self) -> Result<Vec<GitHubRepository>> {
        self.get_json(&format!(
            "{}/user/repos?sort=updated&per_page=100",
            self.base_url
        ))
    }

    /// List an organization's repositories, most recently updated first
    pub fn list_organization_repositories(&self, org: &str) -> Result<Vec<GitHubRepository>> {
        self.get_json(&self.org_url(org, "/repos?sort=updated&per_page=100"))
    }

    /// Get one repository
    pub fn get_repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository> {
        self.get_json(&self.repo_url(owner, repo, ""))
    }

    /// List a repository's collaborators with their permission maps
    pub fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<GitHubCollaborator>> {
        self.get_json(&self.repo_url(owner, repo, "/collaborators?per_page=100"))
    }

    // ==================== Activity Operations ====================

    /// List a repository's workflow definitions
    pub fn list_workflows(&self, owner: &str, repo: &str) -> Result<Vec<GitHubWorkflow>> {
        let list: GitHubWorkflowList = self.get_json(&self.repo_url(owner, repo, "/actions/workflows"))?;
        Ok(list.workflows)
    }

    /// List a repository's recent workflow runs
    pub fn list_workflow_runs(&self, owner: &str, repo: &str) -> Result<Vec<GitHubWorkflowRun>> {
        let list: GitHubRunList =
            self.get_json(&self.repo_url(owner, repo, "/actions/runs?per_page=100"))?;
        Ok(list.workflow_runs)
    }

    /// List a repository's recent deployments
    pub fn list_deployments(&self, owner: &str, repo: &str) -> Result<Vec<GitHubDeployment>> {
        self.get_json(&self.repo_url(owner, repo, "/deployments?per_page=100"))
    }

    /// Fetch the most recent status state for one deployment, None when the
    /// deployment has no status yet
    pub fn latest_deployment_state(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Option<String>> {
        let statuses: Vec<GitHubDeploymentStatus> = self.get_json(&self.repo_url(
            owner,
            repo,
            &format!("/deployments/{}/statuses?per_page=1", deployment_id),
        ))?;
        Ok(statuses.into_iter().next().map(|s| s.state))
    }
}
