use crate::cli::OutputFormat;
use crate::output::{output_result, Displayable};
use anyhow::{Context, Result};
use colored::Colorize;
use dashboard_core::{CodeHost, Organization, Repository, User};
use serde::Serialize;

/// Everything the account overview shows, fetched in one pass
#[derive(Serialize)]
struct DashboardView {
    user: User,
    organizations: Vec<Organization>,
    repositories: Vec<Repository>,
}

impl Displayable for DashboardView {
    fn display(&self) -> String {
        let mut output = self.user.display();

        output.push_str(&format!(
            "\n\n{} ({}):",
            "Organizations".white().bold(),
            self.organizations.len()
        ));
        if self.organizations.is_empty() {
            output.push_str(&format!("\n  {}", "none".dimmed()));
        }
        for org in &self.organizations {
            match &org.description {
                Some(desc) => {
                    output.push_str(&format!("\n  {} - {}", org.name.cyan(), desc.dimmed()))
                }
                None => output.push_str(&format!("\n  {}", org.name.cyan())),
            }
        }

        output.push_str(&format!(
            "\n\n{} ({}):",
            "Repositories".white().bold(),
            self.repositories.len()
        ));
        if self.repositories.is_empty() {
            output.push_str(&format!("\n  {}", "none".dimmed()));
        }
        for repo in &self.repositories {
            let full_name = format!("{}/{}", repo.owner, repo.name);
            let visibility = if repo.private {
                "private".yellow().to_string()
            } else {
                "public".green().to_string()
            };
            output.push_str(&format!("\n  {} ({})", full_name.cyan(), visibility));
        }

        output
    }
}

/// Without a client there is nothing to fetch; print how to connect and
/// exit cleanly
pub fn handle_dashboard(github: Option<&dyn CodeHost>, format: OutputFormat) -> Result<()> {
    let Some(client) = github else {
        match format {
            OutputFormat::Json => {
                println!(r#"{{"connected": false, "message": "No GitHub token configured"}}"#);
            }
            OutputFormat::Text => {
                println!("{}", "No GitHub token configured.".yellow());
                println!("Run 'gitopia auth set github <token>' to connect your account.");
            }
        }
        return Ok(());
    };

    let user = client
        .authenticated_user()
        .context("Failed to fetch your profile")?;
    let organizations = client
        .organizations()
        .context("Failed to list organizations")?;
    let repositories = client
        .repositories()
        .context("Failed to list repositories")?;

    output_result(
        &DashboardView {
            user,
            organizations,
            repositories,
        },
        format,
    );
    Ok(())
}
