use dashboard_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SonarError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SonarQube token not configured")]
    MissingToken,

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, SonarError>;

impl From<SonarError> for CoreError {
    fn from(err: SonarError) -> Self {
        match err {
            SonarError::Http(e) => CoreError::Http(e.to_string()),
            SonarError::Parse(e) => CoreError::Parse(e.to_string()),
            SonarError::Io(e) => CoreError::Io(e.to_string()),
            SonarError::MissingToken => CoreError::MissingToken("SonarQube".to_string()),
            SonarError::ComponentNotFound(key) => CoreError::ComponentNotFound(key),
            SonarError::Unauthorized => CoreError::Unauthorized,
            SonarError::Api { status, message } => CoreError::Api { status, message },
        }
    }
}
