pub mod auth;
pub mod dashboard;
pub mod members;
pub mod orgs;
pub mod repos;
pub mod stats;

use anyhow::{anyhow, Result};

/// Split an OWNER/NAME repository argument
pub fn parse_repo(arg: &str) -> Result<(String, String)> {
    match arg.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(anyhow!("Expected OWNER/NAME, got '{}'", arg)),
    }
}
