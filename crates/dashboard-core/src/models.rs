use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Common user representation across views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Internal ID, rendered as a string regardless of backend width
    pub id: String,
    /// Login name
    pub username: String,
    /// Full name, falling back to the login when unset upstream
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Role of a member within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
    Guest,
}

impl MemberRole {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(MemberRole::Owner),
            "admin" => Some(MemberRole::Admin),
            "member" => Some(MemberRole::Member),
            "guest" => Some(MemberRole::Guest),
            _ => None,
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MemberRole::Owner => "owner",
            MemberRole::Admin => "admin",
            MemberRole::Member => "member",
            MemberRole::Guest => "guest",
        };
        write!(f, "{}", s)
    }
}

/// Membership record: a user plus their role in the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMember {
    pub user: User,
    pub role: MemberRole,
    /// Join date; the members listing does not expose one, so this is
    /// usually unset and renders as "unknown"
    pub joined_at: Option<DateTime<Utc>>,
}

/// Full organization representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    /// Organization login
    pub name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub public: bool,
    /// Empty in list views; populated on detail fetches
    #[serde(default)]
    pub members: Vec<OrganizationMember>,
}

/// Access level of a repository collaborator, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Admin,
    Maintain,
    Write,
    Triage,
    Read,
}

impl Permission {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Permission::Admin),
            "maintain" => Some(Permission::Maintain),
            "write" | "push" => Some(Permission::Write),
            "triage" => Some(Permission::Triage),
            "read" | "pull" => Some(Permission::Read),
            _ => None,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::Admin => "admin",
            Permission::Maintain => "maintain",
            Permission::Write => "write",
            Permission::Triage => "triage",
            Permission::Read => "read",
        };
        write!(f, "{}", s)
    }
}

/// Collaborator record: a user plus their effective permission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryCollaborator {
    pub user: User,
    pub permission: Permission,
    /// Unset; the collaborators listing does not expose the grant date
    pub added_at: Option<DateTime<Utc>>,
}

/// Full repository representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Owning organization id, present only when the owner is an
    /// organization account
    pub organization_id: Option<String>,
    pub owner_id: String,
    /// Owner login (user or organization), for display and navigation
    pub owner: String,
    pub private: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Empty in list views; populated on detail fetches
    #[serde(default)]
    pub collaborators: Vec<RepositoryCollaborator>,
}

// ============================================================================
// Activity Records
// ============================================================================

/// Workflow definition as listed by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    /// Definition file path; category inference keys off this
    pub path: String,
}

/// Single workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub workflow_id: u64,
    /// Raw conclusion string; None while the run is in progress
    pub conclusion: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Single deployment with its latest state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    /// Raw state string ("success", "failure", "error", "pending", ...)
    pub state: String,
    pub environment: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Statistics
// ============================================================================

/// Category label inferred from a workflow's definition path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowCategory {
    Build,
    #[serde(rename = "Integration Tests")]
    IntegrationTests,
    #[serde(rename = "Unit Tests")]
    UnitTests,
    Tests,
    Lint,
    Deploy,
    Release,
    #[serde(rename = "Pull Request")]
    PullRequest,
    Unknown,
}

impl std::fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkflowCategory::Build => "Build",
            WorkflowCategory::IntegrationTests => "Integration Tests",
            WorkflowCategory::UnitTests => "Unit Tests",
            WorkflowCategory::Tests => "Tests",
            WorkflowCategory::Lint => "Lint",
            WorkflowCategory::Deploy => "Deploy",
            WorkflowCategory::Release => "Release",
            WorkflowCategory::PullRequest => "Pull Request",
            WorkflowCategory::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Aggregated outcome rates for one workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStat {
    pub name: String,
    pub category: WorkflowCategory,
    /// Integer percentages; for a workflow with runs these sum to 100,
    /// with skipped_rate taking the rounding remainder
    pub success_rate: u32,
    pub failure_rate: u32,
    pub skipped_rate: u32,
    pub total_runs: usize,
    pub last_run: Option<DateTime<Utc>>,
}

/// Deployment counts for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentDay {
    pub date: NaiveDate,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub pending: usize,
}

/// Outcome percentages across a deployment set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRates {
    pub success: u32,
    pub failure: u32,
    /// Remainder bucket so the three rates sum to 100 on non-empty input
    pub pending: u32,
}

/// Aggregated deployment statistics with a per-day series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub pending: usize,
    pub rates: DeploymentRates,
    /// Ascending by date
    pub days: Vec<DeploymentDay>,
}

/// Classification of a quality metric value against its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MetricStatus::Good => "good",
            MetricStatus::Warning => "warning",
            MetricStatus::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// One code-quality measure with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetric {
    /// Metric key as reported by the quality server ("coverage", ...)
    pub key: String,
    pub name: String,
    pub value: f64,
    /// Display unit ("%", "h", or empty for plain counts)
    pub unit: String,
    pub status: MetricStatus,
    pub description: String,
}

/// Severity of a reported quality issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl IssueSeverity {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(IssueSeverity::Critical),
            "high" => Some(IssueSeverity::High),
            "medium" => Some(IssueSeverity::Medium),
            "low" => Some(IssueSeverity::Low),
            "info" => Some(IssueSeverity::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueSeverity::Critical => "critical",
            IssueSeverity::High => "high",
            IssueSeverity::Medium => "medium",
            IssueSeverity::Low => "low",
            IssueSeverity::Info => "info",
        };
        write!(f, "{}", s)
    }
}

/// One open issue reported by the quality server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub title: String,
    pub severity: IssueSeverity,
    /// File or component the issue was raised against
    pub component: String,
    pub line: Option<u64>,
}

/// Full code-quality view: metric cards plus the top open issues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub metrics: Vec<QualityMetric>,
    pub issues: Vec<QualityIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_role_parse_round_trip() {
        for role in [
            MemberRole::Owner,
            MemberRole::Admin,
            MemberRole::Member,
            MemberRole::Guest,
        ] {
            assert_eq!(MemberRole::parse(&role.to_string()), Some(role));
        }
        assert_eq!(MemberRole::parse("ADMIN"), Some(MemberRole::Admin));
        assert_eq!(MemberRole::parse("superuser"), None);
    }

    #[test]
    fn test_permission_parse_accepts_api_aliases() {
        assert_eq!(Permission::parse("push"), Some(Permission::Write));
        assert_eq!(Permission::parse("pull"), Some(Permission::Read));
        assert_eq!(Permission::parse("Maintain"), Some(Permission::Maintain));
        assert_eq!(Permission::parse("none"), None);
    }

    #[test]
    fn test_enum_json_wire_format() {
        let json = serde_json::to_string(&MemberRole::Owner).unwrap();
        assert_eq!(json, r#""owner""#);
        let json = serde_json::to_string(&WorkflowCategory::IntegrationTests).unwrap();
        assert_eq!(json, r#""Integration Tests""#);
        let json = serde_json::to_string(&IssueSeverity::High).unwrap();
        assert_eq!(json, r#""high""#);
    }
}
