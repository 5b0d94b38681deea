use dashboard_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GitHub token not configured")]
    MissingToken,

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for CoreError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => CoreError::Http(e.to_string()),
            GitHubError::Parse(e) => CoreError::Parse(e.to_string()),
            GitHubError::Io(e) => CoreError::Io(e.to_string()),
            GitHubError::MissingToken => CoreError::MissingToken("GitHub".to_string()),
            GitHubError::OrganizationNotFound(name) => CoreError::OrganizationNotFound(name),
            GitHubError::RepositoryNotFound(name) => CoreError::RepositoryNotFound(name),
            GitHubError::Unauthorized => CoreError::Unauthorized,
            GitHubError::RateLimited => CoreError::RateLimited,
            GitHubError::Api { status, message } => CoreError::Api { status, message },
        }
    }
}
