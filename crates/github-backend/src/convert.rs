//! Model conversions from GitHub wire types to dashboard-core types
//!
//! Conversions are total: missing optional fields become unset markers or
//! the weakest enum value, never an error.

use chrono::{DateTime, Utc};
use dashboard_core::{
    Deployment, MemberRole, Organization, OrganizationMember, Permission, Repository,
    RepositoryCollaborator, User, Workflow, WorkflowRun,
};

use crate::models::*;

/// Parse a GitHub RFC 3339 timestamp
fn parse_github_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert a GitHub user to a core User
///
/// The display name falls back to the login when the profile has no name.
pub fn to_user(user: GitHubUser) -> User {
    User {
        id: user.id.to_string(),
        display_name: user.name.filter(|n| !n.is_empty()).unwrap_or_else(|| user.login.clone()),
        username: user.login,
        email: user.email.filter(|e| !e.is_empty()),
        avatar_url: user.avatar_url,
    }
}

/// Convert a member-listing entry to a core OrganizationMember
///
/// The members endpoint exposes neither roles nor join dates, so the role
/// is always "member" and the join date stays unset.
pub fn to_member(user: GitHubUser) -> OrganizationMember {
    OrganizationMember {
        user: to_user(user),
        role: MemberRole::Member,
        joined_at: None,
    }
}

/// Convert a GitHub organization plus its member list to a core Organization
pub fn to_organization(
    org: GitHubOrganization,
    members: Vec<OrganizationMember>,
) -> Organization {
    Organization {
        id: org.id.to_string(),
        name: org.login,
        description: org.description.filter(|d| !d.is_empty()),
        avatar_url: org.avatar_url,
        created_at: org.created_at.as_deref().and_then(parse_github_datetime),
        public: !org.private,
        members,
    }
}

/// Convert a collaborator entry to a core RepositoryCollaborator
///
/// Permission precedence over the boolean map: admin, then maintain, then
/// push, then triage; everything else reads as plain read access.
pub fn to_collaborator(collab: GitHubCollaborator) -> RepositoryCollaborator {
    let GitHubCollaborator {
        id,
        login,
        name,
        email,
        avatar_url,
        permissions,
    } = collab;

    let permissions = permissions.unwrap_or_default();
    let permission = if permissions.admin {
        Permission::Admin
    } else if permissions.maintain {
        Permission::Maintain
    } else if permissions.push {
        Permission::Write
    } else if permissions.triage {
        Permission::Triage
    } else {
        Permission::Read
    };

    RepositoryCollaborator {
        user: to_user(GitHubUser {
            id,
            login,
            name,
            email,
            avatar_url,
        }),
        permission,
        added_at: None,
    }
}

/// Convert a GitHub repository plus its collaborators to a core Repository
///
/// The organization id is only recorded when the owner really is an
/// organization account; personal repositories leave it unset.
pub fn to_repository(
    repo: GitHubRepository,
    collaborators: Vec<RepositoryCollaborator>,
) -> Repository {
    let owned_by_org = repo.owner.owner_type.as_deref() == Some("Organization");

    Repository {
        id: repo.id.to_string(),
        name: repo.name,
        description: repo.description.filter(|d| !d.is_empty()),
        organization_id: owned_by_org.then(|| repo.owner.id.to_string()),
        owner_id: repo.owner.id.to_string(),
        owner: repo.owner.login,
        private: repo.private,
        created_at: repo.created_at.as_deref().and_then(parse_github_datetime),
        updated_at: repo.updated_at.as_deref().and_then(parse_github_datetime),
        collaborators,
    }
}

/// Convert a workflow definition
pub fn to_workflow(workflow: GitHubWorkflow) -> Workflow {
    Workflow {
        id: workflow.id,
        name: workflow.name,
        path: workflow.path,
    }
}

/// Convert a workflow run, dropping records with unparsable timestamps
pub fn to_workflow_run(run: GitHubWorkflowRun) -> Option<WorkflowRun> {
    Some(WorkflowRun {
        workflow_id: run.workflow_id,
        conclusion: run.conclusion,
        created_at: parse_github_datetime(&run.created_at)?,
    })
}

/// Convert a deployment with its resolved latest state, dropping records
/// with unparsable timestamps
pub fn to_deployment(deployment: GitHubDeployment, state: String) -> Option<Deployment> {
    Some(Deployment {
        state,
        environment: deployment.environment,
        created_at: parse_github_datetime(&deployment.created_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_user(id: u64, login: &str, name: Option<&str>) -> GitHubUser {
        GitHubUser {
            id,
            login: login.to_string(),
            name: name.map(String::from),
            email: None,
            avatar_url: Some(format!("https://avatars.example.com/{}", id)),
        }
    }

    fn raw_collaborator(permissions: Option<GitHubPermissions>) -> GitHubCollaborator {
        GitHubCollaborator {
            id: 7,
            login: "collab".to_string(),
            name: None,
            email: None,
            avatar_url: None,
            permissions,
        }
    }

    #[test]
    fn test_user_display_name_falls_back_to_login() {
        let named = to_user(raw_user(1, "octocat", Some("The Octocat")));
        assert_eq!(named.display_name, "The Octocat");
        assert_eq!(named.username, "octocat");

        let unnamed = to_user(raw_user(2, "ghost", None));
        assert_eq!(unnamed.display_name, "ghost");

        let empty_name = to_user(raw_user(3, "blank", Some("")));
        assert_eq!(empty_name.display_name, "blank");
    }

    #[test]
    fn test_member_role_is_always_member() {
        let member = to_member(raw_user(5, "dev", None));
        assert_eq!(member.role, MemberRole::Member);
        assert_eq!(member.joined_at, None);
    }

    #[test]
    fn test_organization_with_empty_members() {
        let org = to_organization(
            GitHubOrganization {
                id: 99,
                login: "acme".to_string(),
                description: None,
                avatar_url: None,
                created_at: Some("2019-03-01T12:00:00Z".to_string()),
                private: false,
            },
            Vec::new(),
        );
        assert_eq!(org.id, "99");
        assert_eq!(org.name, "acme");
        assert!(org.members.is_empty());
        assert!(org.public);
        assert!(org.created_at.is_some());
    }

    #[test]
    fn test_collaborator_permission_precedence() {
        let maintainer = to_collaborator(raw_collaborator(Some(GitHubPermissions {
            admin: false,
            maintain: true,
            push: true,
            triage: true,
            pull: true,
        })));
        assert_eq!(maintainer.permission, Permission::Maintain);

        let admin = to_collaborator(raw_collaborator(Some(GitHubPermissions {
            admin: true,
            maintain: true,
            push: true,
            triage: true,
            pull: true,
        })));
        assert_eq!(admin.permission, Permission::Admin);

        let writer = to_collaborator(raw_collaborator(Some(GitHubPermissions {
            admin: false,
            maintain: false,
            push: true,
            triage: true,
            pull: true,
        })));
        assert_eq!(writer.permission, Permission::Write);

        let reader = to_collaborator(raw_collaborator(Some(GitHubPermissions::default())));
        assert_eq!(reader.permission, Permission::Read);
    }

    #[test]
    fn test_collaborator_without_permission_map_reads_as_read() {
        let collab = to_collaborator(raw_collaborator(None));
        assert_eq!(collab.permission, Permission::Read);
        assert_eq!(collab.added_at, None);
    }

    #[test]
    fn test_repository_organization_id_requires_org_owner() {
        let repo = |owner_type: Option<&str>| GitHubRepository {
            id: 512,
            name: "webapp".to_string(),
            description: Some("".to_string()),
            owner: GitHubRepoOwner {
                id: 99,
                login: "acme".to_string(),
                owner_type: owner_type.map(String::from),
            },
            private: true,
            created_at: Some("2021-06-01T00:00:00Z".to_string()),
            updated_at: Some("not a timestamp".to_string()),
        };

        let org_owned = to_repository(repo(Some("Organization")), Vec::new());
        assert_eq!(org_owned.organization_id.as_deref(), Some("99"));
        assert_eq!(org_owned.owner_id, "99");
        assert_eq!(org_owned.owner, "acme");
        // Empty descriptions collapse to the unset marker
        assert_eq!(org_owned.description, None);
        assert!(org_owned.created_at.is_some());
        assert_eq!(org_owned.updated_at, None);

        let user_owned = to_repository(repo(Some("User")), Vec::new());
        assert_eq!(user_owned.organization_id, None);

        let untyped = to_repository(repo(None), Vec::new());
        assert_eq!(untyped.organization_id, None);
    }

    #[test]
    fn test_workflow_run_with_bad_timestamp_is_dropped() {
        let good = to_workflow_run(GitHubWorkflowRun {
            id: 1,
            workflow_id: 10,
            conclusion: Some("success".to_string()),
            status: Some("completed".to_string()),
            created_at: "2026-08-01T10:00:00Z".to_string(),
        });
        assert!(good.is_some());

        let bad = to_workflow_run(GitHubWorkflowRun {
            id: 2,
            workflow_id: 10,
            conclusion: None,
            status: None,
            created_at: "yesterday".to_string(),
        });
        assert!(bad.is_none());
    }
}
