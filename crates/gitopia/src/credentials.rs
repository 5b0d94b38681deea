use crate::cli::Provider;
use crate::config;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CREDENTIALS_FILE: &str = "credentials.json";

/// Stored API tokens, one optional entry per provider.
///
/// Kept as a JSON file in the application config directory so tokens
/// survive between invocations without ending up in shell history.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sonar_token: Option<String>,
}

impl CredentialStore {
    /// Load the store from the default location; a missing file is an
    /// empty store
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::store_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse credentials in {}", path.display()))
    }

    /// Save the store to the default location, creating the config
    /// directory if needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write credentials to {}", path.display()))?;
        restrict_permissions(path)?;
        Ok(())
    }

    /// Path of the credentials file
    pub fn store_path() -> Result<PathBuf> {
        let dir = config::config_dir()
            .ok_or_else(|| anyhow!("Could not determine a config directory for credentials"))?;
        Ok(dir.join(CREDENTIALS_FILE))
    }

    /// Trimmed token for a provider; blank entries count as absent
    pub fn token(&self, provider: Provider) -> Option<&str> {
        let token = match provider {
            Provider::GitHub => self.github_token.as_deref(),
            Provider::Sonar => self.sonar_token.as_deref(),
        }?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    pub fn set_token(&mut self, provider: Provider, token: String) {
        match provider {
            Provider::GitHub => self.github_token = Some(token),
            Provider::Sonar => self.sonar_token = Some(token),
        }
    }

    pub fn clear_token(&mut self, provider: Provider) {
        match provider {
            Provider::GitHub => self.github_token = None,
            Provider::Sonar => self.sonar_token = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.github_token.is_none() && self.sonar_token.is_none()
    }
}

/// Token files stay readable by the owner only
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
