mod cli;
mod color;
mod commands;
mod config;
mod credentials;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use credentials::CredentialStore;
use dashboard_core::{CodeHost, CoreError, QualityHost};
use github_backend::GitHubClient;
use output::output_error;
use sonar_backend::SonarClient;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    color::init(cli.color);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    // Credential and completion commands never need a client or network
    match &cli.command {
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            return Ok(());
        }
        Commands::Auth { action } => return commands::auth::handle_auth(action, cli.format),
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.github_token.clone(), cli.sonar_token.clone());
    config.merge_with_store(&CredentialStore::load()?);

    let github = build_github_client(&config)?;
    let sonar = build_sonar_client(&config)?;

    run_with_hosts(
        github.as_ref().map(|client| client as &dyn CodeHost),
        sonar.as_ref().map(|client| client as &dyn QualityHost),
        cli,
        &config,
    )
}

/// Dispatch with the clients behind their traits. Clients stay optional:
/// statistics commands degrade to sample data, directory commands
/// explain what to configure.
fn run_with_hosts(
    github: Option<&dyn CodeHost>,
    sonar: Option<&dyn QualityHost>,
    cli: &Cli,
    config: &Config,
) -> Result<()> {
    match &cli.command {
        Commands::Dashboard => commands::dashboard::handle_dashboard(github, cli.format),
        Commands::Orgs { action } => {
            commands::orgs::handle_orgs(require_github(github)?, action, cli.format)
        }
        Commands::Repos { action } => {
            commands::repos::handle_repos(require_github(github)?, action, config, cli.format)
        }
        Commands::Members { org } => {
            commands::members::handle_members(require_github(github)?, org, cli.format)
        }
        Commands::Stats { action } => {
            commands::stats::handle_stats(github, sonar, action, config, cli.format)
        }
        Commands::Auth { .. } | Commands::Completions { .. } => {
            unreachable!("handled before client construction")
        }
    }
}

fn require_github(github: Option<&dyn CodeHost>) -> Result<&dyn CodeHost> {
    github.ok_or_else(|| anyhow::Error::new(CoreError::MissingToken("GitHub".to_string())))
}

fn build_github_client(config: &Config) -> Result<Option<GitHubClient>> {
    let Some(token) = config.github_token.as_deref() else {
        return Ok(None);
    };

    let client = match config.github_url.as_deref() {
        Some(url) => GitHubClient::with_base_url(url, token)?,
        None => GitHubClient::new(token)?,
    };
    Ok(Some(client))
}

fn build_sonar_client(config: &Config) -> Result<Option<SonarClient>> {
    let Some(token) = config.sonar_token.as_deref() else {
        return Ok(None);
    };

    let client = match config.sonar_url.as_deref() {
        Some(url) => SonarClient::with_base_url(url, token)?,
        None => SonarClient::new(token)?,
    };
    Ok(Some(client))
}
