pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export dashboard-core types for convenience
pub use dashboard_core::{CodeHost, CoreError};
