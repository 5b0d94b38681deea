use crate::cli::Provider;
use crate::credentials::CredentialStore;
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration, merged from config files, environment variables,
/// stored credentials and CLI flags
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API base URL override (for GitHub Enterprise)
    pub github_url: Option<String>,
    /// SonarQube server URL, defaults to SonarCloud
    pub sonar_url: Option<String>,
    /// GitHub API token
    pub github_token: Option<String>,
    /// SonarQube API token
    pub sonar_token: Option<String>,
    /// Organization used by `repos list` when --org is omitted
    pub default_org: Option<String>,
    /// Component key used by `stats quality` when no key is given
    pub sonar_component: Option<String>,
}

impl Config {
    /// Load configuration from TOML files and `GITOPIA_*` environment
    /// variables. An explicit config path must exist; the default
    /// locations may be absent.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = config_path.as_deref() {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths(config_path.as_deref()) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("GITOPIA_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    /// Tokens passed on the command line override every other source
    pub fn merge_with_cli(&mut self, github_token: Option<String>, sonar_token: Option<String>) {
        if github_token.is_some() {
            self.github_token = github_token;
        }
        if sonar_token.is_some() {
            self.sonar_token = sonar_token;
        }
    }

    /// Stored credentials fill in tokens no other source provided
    pub fn merge_with_store(&mut self, store: &CredentialStore) {
        if self.github_token.is_none() {
            self.github_token = store.token(Provider::GitHub).map(String::from);
        }
        if self.sonar_token.is_none() {
            self.sonar_token = store.token(Provider::Sonar).map(String::from);
        }
    }
}

/// Resolve the application config directory.
///
/// `GITOPIA_CONFIG_DIR` wins, then `$XDG_CONFIG_HOME/gitopia`, then the
/// platform default config location.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("GITOPIA_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("gitopia"));
    }
    ProjectDirs::from("", "", "gitopia").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Candidate config files, lowest precedence first. An explicit path
/// replaces the defaults entirely.
fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut paths = Vec::new();
    if let Some(dir) = config_dir() {
        paths.push(dir.join("config.toml"));
    }
    if let Ok(dir) = std::env::current_dir() {
        let local = dir.join("gitopia.toml");
        if !paths.contains(&local) {
            paths.push(local);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_replaces_defaults() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        let paths = config_paths(Some(&explicit));
        assert_eq!(paths, vec![explicit]);
    }

    #[test]
    fn test_merge_with_cli_overrides_file_token() {
        let mut config = Config {
            github_token: Some("from-file".to_string()),
            ..Config::default()
        };
        config.merge_with_cli(Some("from-flag".to_string()), None);
        assert_eq!(config.github_token.as_deref(), Some("from-flag"));
        assert_eq!(config.sonar_token, None);
    }

    #[test]
    fn test_store_only_fills_missing_tokens() {
        let mut store = CredentialStore::default();
        store.set_token(Provider::GitHub, "stored-gh".to_string());
        store.set_token(Provider::Sonar, "stored-sq".to_string());

        let mut config = Config {
            github_token: Some("explicit".to_string()),
            ..Config::default()
        };
        config.merge_with_store(&store);
        assert_eq!(config.github_token.as_deref(), Some("explicit"));
        assert_eq!(config.sonar_token.as_deref(), Some("stored-sq"));
    }
}
