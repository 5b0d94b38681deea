use crate::cli::{OutputFormat, Provider, StatsCommands};
use crate::commands::parse_repo;
use crate::config::Config;
use crate::output::{output_sourced, output_sourced_list};
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use dashboard_core::{sample, stats, CodeHost, QualityHost, QualityReport, Scope, Sourced};

pub fn handle_stats(
    github: Option<&dyn CodeHost>,
    sonar: Option<&dyn QualityHost>,
    action: &StatsCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match action {
        StatsCommands::Workflows { repo } => handle_workflows(github, repo, format),
        StatsCommands::Deployments { repo, month } => {
            handle_deployments(github, repo, month.as_deref(), format)
        }
        StatsCommands::Quality { component, repo } => {
            handle_quality(sonar, component.as_deref(), repo.as_deref(), config, format)
        }
    }
}

/// Wrap a fetch as live data, degrading to the sample generator when no
/// client is configured or the fetch fails
fn live_or_sample<C: ?Sized, T>(
    client: Option<&C>,
    label: &str,
    fetch: impl FnOnce(&C) -> Result<T>,
    sample: impl FnOnce() -> T,
) -> Sourced<T> {
    match client {
        Some(client) => match fetch(client) {
            Ok(data) => Sourced::Live(data),
            Err(e) => {
                log::warn!("falling back to sample data for {}: {:#}", label, e);
                Sourced::Sample(sample())
            }
        },
        None => Sourced::Sample(sample()),
    }
}

fn handle_workflows(
    github: Option<&dyn CodeHost>,
    repo: &str,
    format: OutputFormat,
) -> Result<()> {
    let (owner, name) = parse_repo(repo)?;
    let scope = Scope::repository(owner.as_str(), name.as_str());

    let result = live_or_sample(
        github,
        &scope.to_string(),
        |client| {
            let workflows = client
                .workflows(&owner, &name)
                .context("Failed to list workflows")?;
            let runs = client
                .workflow_runs(&owner, &name)
                .context("Failed to list workflow runs")?;
            Ok(stats::workflow_stats(&workflows, &runs))
        },
        || sample::sample_workflow_stats(scope.seed_name()),
    );

    output_sourced_list(&result, Provider::GitHub, format);
    Ok(())
}

fn handle_deployments(
    github: Option<&dyn CodeHost>,
    repo: &str,
    month: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (owner, name) = parse_repo(repo)?;
    let (year, month) = match month {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = Utc::now();
            (today.year(), today.month())
        }
    };
    let scope = Scope::repository(owner.as_str(), name.as_str());

    let result = live_or_sample(
        github,
        &scope.to_string(),
        |client| {
            let deployments = client
                .deployments(&owner, &name)
                .context("Failed to list deployments")?;
            let in_month = stats::deployments_in_month(&deployments, year, month);
            Ok(stats::deployment_stats(&in_month))
        },
        || stats::deployment_stats(&sample::sample_deployments(scope.seed_name(), year, month)),
    );

    output_sourced(&result, Provider::GitHub, format);
    Ok(())
}

fn handle_quality(
    sonar: Option<&dyn QualityHost>,
    component: Option<&str>,
    repo: Option<&str>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let component = resolve_component(component, repo, config)?;

    let result = live_or_sample(
        sonar,
        &component,
        |client| {
            let metrics = client
                .measures(&component)
                .context("Failed to fetch quality measures")?;
            let issues = client
                .issues(&component)
                .context("Failed to fetch quality issues")?;
            Ok(QualityReport { metrics, issues })
        },
        || sample::sample_quality_report(&component),
    );

    output_sourced(&result, Provider::Sonar, format);
    Ok(())
}

/// Component precedence: explicit key, then OWNER/NAME mapped to the
/// original's `owner_name` convention, then the configured default
fn resolve_component(
    component: Option<&str>,
    repo: Option<&str>,
    config: &Config,
) -> Result<String> {
    if let Some(key) = component {
        return Ok(key.to_string());
    }
    if let Some(repo) = repo {
        let (owner, name) = parse_repo(repo)?;
        return Ok(format!("{}_{}", owner, name));
    }
    config.sonar_component.clone().ok_or_else(|| {
        anyhow!("No component key given. Pass --component or set sonar_component in the config file")
    })
}

/// Parse a YYYY-MM month argument
fn parse_month(raw: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .map_err(|_| anyhow!("Expected YYYY-MM, got '{}'", raw))?;
    Ok((date.year(), date.month()))
}
