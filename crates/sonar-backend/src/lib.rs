pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::{DEFAULT_BASE_URL, SonarClient};
pub use error::{Result, SonarError};
pub use models::*;

// Re-export dashboard-core types for convenience
pub use dashboard_core::{CoreError, QualityHost};
