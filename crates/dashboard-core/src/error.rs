use thiserror::Error;

/// Common errors for all dashboard backends
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("API rate limit exceeded")]
    RateLimited,

    #[error("{0} token not configured")]
    MissingToken(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
