use crate::cli::{OrgCommands, OutputFormat};
use crate::output::{output_list, output_result, Displayable};
use anyhow::{Context, Result};
use colored::Colorize;
use dashboard_core::{CodeHost, Organization, Repository};
use serde::Serialize;

/// Detail view: the organization record plus its repositories
#[derive(Serialize)]
struct OrganizationDetail {
    #[serde(flatten)]
    organization: Organization,
    repositories: Vec<Repository>,
}

impl Displayable for OrganizationDetail {
    fn display(&self) -> String {
        let mut output = self.organization.display();
        output.push_str(&format!(
            "\n  {} ({}):",
            "Repositories".dimmed(),
            self.repositories.len()
        ));
        for repo in &self.repositories {
            output.push_str(&format!("\n    {}", repo.name.cyan()));
        }
        output
    }
}

pub fn handle_orgs(client: &dyn CodeHost, action: &OrgCommands, format: OutputFormat) -> Result<()> {
    match action {
        OrgCommands::List => handle_list(client, format),
        OrgCommands::Get { name } => handle_get(client, name, format),
    }
}

fn handle_list(client: &dyn CodeHost, format: OutputFormat) -> Result<()> {
    let orgs = client
        .organizations()
        .context("Failed to list organizations")?;
    output_list(&orgs, format);
    Ok(())
}

fn handle_get(client: &dyn CodeHost, name: &str, format: OutputFormat) -> Result<()> {
    let organization = client
        .organization(name)
        .with_context(|| format!("Failed to fetch organization '{}'", name))?;
    let repositories = client
        .organization_repositories(name)
        .with_context(|| format!("Failed to list repositories of '{}'", name))?;

    output_result(
        &OrganizationDetail {
            organization,
            repositories,
        },
        format,
    );
    Ok(())
}
