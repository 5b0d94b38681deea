use crate::error::Result;
use crate::models::*;

/// Common trait for code-hosting backends
///
/// This trait defines the read operations the dashboard needs from a code
/// host. The GitHub backend provides the production implementation; tests
/// substitute doubles.
pub trait CodeHost: Send + Sync {
    // ========== Account Operations ==========

    /// Get the authenticated user's profile
    fn authenticated_user(&self) -> Result<User>;

    /// List organizations the authenticated user belongs to
    ///
    /// Member lists are left empty; use `organization` for a populated one.
    fn organizations(&self) -> Result<Vec<Organization>>;

    /// Get one organization with its members populated
    fn organization(&self, name: &str) -> Result<Organization>;

    /// List an organization's members
    fn organization_members(&self, name: &str) -> Result<Vec<OrganizationMember>>;

    // ========== Repository Operations ==========

    /// List repositories the authenticated user can access
    fn repositories(&self) -> Result<Vec<Repository>>;

    /// List an organization's repositories
    fn organization_repositories(&self, org: &str) -> Result<Vec<Repository>>;

    /// Get one repository with its collaborators populated
    fn repository(&self, owner: &str, name: &str) -> Result<Repository>;

    /// List a repository's collaborators
    fn collaborators(&self, owner: &str, name: &str) -> Result<Vec<RepositoryCollaborator>>;

    // ========== Activity Operations ==========

    /// List a repository's workflow definitions
    fn workflows(&self, owner: &str, name: &str) -> Result<Vec<Workflow>>;

    /// List a repository's recent workflow runs
    fn workflow_runs(&self, owner: &str, name: &str) -> Result<Vec<WorkflowRun>>;

    /// List a repository's recent deployments with their latest state
    fn deployments(&self, owner: &str, name: &str) -> Result<Vec<Deployment>>;
}

/// Common trait for code-quality backends
pub trait QualityHost: Send + Sync {
    /// Fetch the dashboard's metric set for a component, classified
    fn measures(&self, component: &str) -> Result<Vec<QualityMetric>>;

    /// Fetch the most severe open issues for a component
    fn issues(&self, component: &str) -> Result<Vec<QualityIssue>>;
}
