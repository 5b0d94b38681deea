use crate::cli::{OutputFormat, RepoCommands};
use crate::commands::parse_repo;
use crate::config::Config;
use crate::output::{output_list, output_result};
use anyhow::{Context, Result};
use dashboard_core::CodeHost;

pub fn handle_repos(
    client: &dyn CodeHost,
    action: &RepoCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match action {
        RepoCommands::List { org } => {
            // --org wins over the configured default
            let org = org.as_deref().or(config.default_org.as_deref());
            handle_list(client, org, format)
        }
        RepoCommands::Get { repo } => {
            let (owner, name) = parse_repo(repo)?;
            handle_get(client, &owner, &name, format)
        }
    }
}

fn handle_list(client: &dyn CodeHost, org: Option<&str>, format: OutputFormat) -> Result<()> {
    let repos = match org {
        Some(org) => client
            .organization_repositories(org)
            .with_context(|| format!("Failed to list repositories of '{}'", org))?,
        None => client
            .repositories()
            .context("Failed to list repositories")?,
    };
    output_list(&repos, format);
    Ok(())
}

fn handle_get(client: &dyn CodeHost, owner: &str, name: &str, format: OutputFormat) -> Result<()> {
    let repo = client
        .repository(owner, name)
        .with_context(|| format!("Failed to fetch repository '{}/{}'", owner, name))?;
    output_result(&repo, format);
    Ok(())
}
