//! Implementation of the dashboard-core CodeHost trait for GitHubClient

use dashboard_core::{
    CodeHost, Deployment, Organization, OrganizationMember, Repository, RepositoryCollaborator,
    Result, User, Workflow, WorkflowRun,
};

use crate::client::GitHubClient;
use crate::convert;
use crate::error::GitHubError;

/// Map a 404 from an org-scoped endpoint to a typed not-found error
fn org_not_found(err: GitHubError, org: &str) -> GitHubError {
    match err {
        GitHubError::Api { status: 404, .. } => {
            GitHubError::OrganizationNotFound(org.to_string())
        }
        other => other,
    }
}

/// Map a 404 from a repo-scoped endpoint to a typed not-found error
fn repo_not_found(err: GitHubError, owner: &str, name: &str) -> GitHubError {
    match err {
        GitHubError::Api { status: 404, .. } => {
            GitHubError::RepositoryNotFound(format!("{}/{}", owner, name))
        }
        other => other,
    }
}

impl CodeHost for GitHubClient {
    fn authenticated_user(&self) -> Result<User> {
        let user = self.current_user()?;
        Ok(convert::to_user(user))
    }

    fn organizations(&self) -> Result<Vec<Organization>> {
        let orgs = self.list_user_organizations()?;
        Ok(orgs
            .into_iter()
            .map(|org| convert::to_organization(org, Vec::new()))
            .collect())
    }

    fn organization(&self, name: &str) -> Result<Organization> {
        let org = self
            .get_organization(name)
            .map_err(|e| org_not_found(e, name))?;
        let members = self.organization_members(name)?;
        Ok(convert::to_organization(org, members))
    }

    fn organization_members(&self, name: &str) -> Result<Vec<OrganizationMember>> {
        let members = self
            .list_organization_members(name)
            .map_err(|e| org_not_found(e, name))?;
        Ok(members.into_iter().map(convert::to_member).collect())
    }

    fn repositories(&self) -> Result<Vec<Repository>> {
        let repos = self.list_user_repositories()?;
        Ok(repos
            .into_iter()
            .map(|repo| convert::to_repository(repo, Vec::new()))
            .collect())
    }

    fn organization_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        let repos = self
            .list_organization_repositories(org)
            .map_err(|e| org_not_found(e, org))?;
        Ok(repos
            .into_iter()
            .map(|repo| convert::to_repository(repo, Vec::new()))
            .collect())
    }

    fn repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let repo = self
            .get_repository(owner, name)
            .map_err(|e| repo_not_found(e, owner, name))?;
        let collaborators = self.collaborators(owner, name)?;
        Ok(convert::to_repository(repo, collaborators))
    }

    fn collaborators(&self, owner: &str, name: &str) -> Result<Vec<RepositoryCollaborator>> {
        let collaborators = self
            .list_collaborators(owner, name)
            .map_err(|e| repo_not_found(e, owner, name))?;
        Ok(collaborators
            .into_iter()
            .map(convert::to_collaborator)
            .collect())
    }

    fn workflows(&self, owner: &str, name: &str) -> Result<Vec<Workflow>> {
        let workflows = self
            .list_workflows(owner, name)
            .map_err(|e| repo_not_found(e, owner, name))?;
        Ok(workflows.into_iter().map(convert::to_workflow).collect())
    }

    fn workflow_runs(&self, owner: &str, name: &str) -> Result<Vec<WorkflowRun>> {
        let runs = self
            .list_workflow_runs(owner, name)
            .map_err(|e| repo_not_found(e, owner, name))?;
        Ok(runs.into_iter().filter_map(convert::to_workflow_run).collect())
    }

    fn deployments(&self, owner: &str, name: &str) -> Result<Vec<Deployment>> {
        let raw = self
            .list_deployments(owner, name)
            .map_err(|e| repo_not_found(e, owner, name))?;

        let mut deployments = Vec::with_capacity(raw.len());
        for record in raw {
            // The listing carries no outcome; resolve each deployment's
            // latest status, reading "no status yet" and status-fetch
            // failures as pending.
            let state = match self.latest_deployment_state(owner, name, record.id) {
                Ok(Some(state)) => state,
                Ok(None) => "pending".to_string(),
                Err(e) => {
                    log::warn!(
                        "failed to fetch status for deployment {} of {}/{}: {}",
                        record.id,
                        owner,
                        name,
                        e
                    );
                    "pending".to_string()
                }
            };
            if let Some(deployment) = convert::to_deployment(record, state) {
                deployments.push(deployment);
            }
        }
        Ok(deployments)
    }
}
