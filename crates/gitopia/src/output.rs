use crate::cli::{OutputFormat, Provider};
use colored::Colorize;
use dashboard_core::{
    CoreError, DeploymentStats, IssueSeverity, MetricStatus, Organization, OrganizationMember,
    QualityIssue, QualityMetric, QualityReport, Repository, RepositoryCollaborator, Sourced, User,
    WorkflowStat,
};
use serde::Serialize;

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

/// Render a statistics value, prefixing sample data with a banner in
/// text mode. JSON mode serializes the whole tagged wrapper so callers
/// can tell live and sample apart.
pub fn output_sourced<T: Serialize + Displayable>(
    result: &Sourced<T>,
    provider: Provider,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            if result.is_sample() {
                println!("{}", sample_banner(provider).yellow());
            }
            println!("{}", result.data().display());
        }
    }
}

pub fn output_sourced_list<T: Serialize + Displayable>(
    result: &Sourced<Vec<T>>,
    provider: Provider,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            if result.is_sample() {
                println!("{}", sample_banner(provider).yellow());
                println!();
            }
            for item in result.data() {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

fn sample_banner(provider: Provider) -> String {
    let name = match provider {
        Provider::GitHub => "github",
        Provider::Sonar => "sonar",
    };
    format!(
        "Showing sample data. Run 'gitopia auth set {} <token>' for live statistics.",
        name
    )
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            let message = serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err));
            eprintln!("{}", message);
        }
        OutputFormat::Text => {
            eprintln!("{}: {:#}", "Error".red().bold(), err);
            if let Some(hint) = hint_for(err) {
                eprintln!("{}: {}", "Hint".yellow(), hint);
            }
        }
    }
}

/// One actionable follow-up per error kind, shown under the error line
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    for cause in err.chain() {
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return match core {
                CoreError::MissingToken(provider) if provider == "SonarQube" => {
                    Some("Run 'gitopia auth set sonar <token>' to store a token.")
                }
                CoreError::MissingToken(_) => {
                    Some("Run 'gitopia auth set github <token>' to store a token.")
                }
                CoreError::Unauthorized => {
                    Some("The token was rejected. Store a fresh one with 'gitopia auth set'.")
                }
                CoreError::RepositoryNotFound(_) => {
                    Some("Run 'gitopia repos list' to see the repositories you can access.")
                }
                CoreError::OrganizationNotFound(_) => {
                    Some("Run 'gitopia orgs list' to see your organizations.")
                }
                CoreError::ComponentNotFound(_) => {
                    Some("Check the component key on your quality server.")
                }
                _ => None,
            };
        }
    }
    None
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for User {
    fn display(&self) -> String {
        let mut output = format!(
            "{} - {}",
            self.username.cyan().bold(),
            self.display_name.white().bold()
        );
        if let Some(email) = &self.email {
            output.push_str(&format!("\n  {}: {}", "Email".dimmed(), email));
        }
        if let Some(url) = &self.avatar_url {
            output.push_str(&format!("\n  {}: {}", "Avatar".dimmed(), url.dimmed()));
        }
        output
    }
}

impl Displayable for Organization {
    fn display(&self) -> String {
        let visibility = if self.public {
            "public".green().to_string()
        } else {
            "private".yellow().to_string()
        };
        let mut output = format!(
            "{} ({}) - {}",
            self.name.cyan().bold(),
            self.id.dimmed(),
            visibility
        );
        if let Some(desc) = &self.description {
            output.push_str(&format!("\n  {}: {}", "Description".dimmed(), desc));
        }
        if let Some(created) = &self.created_at {
            output.push_str(&format!(
                "\n  {}: {}",
                "Created".dimmed(),
                created.format("%Y-%m-%d").to_string().dimmed()
            ));
        }
        if !self.members.is_empty() {
            output.push_str(&format!(
                "\n  {} ({}):",
                "Members".dimmed(),
                self.members.len()
            ));
            for member in &self.members {
                output.push_str(&format!("\n    {}", member.display()));
            }
        }
        output
    }
}

impl Displayable for OrganizationMember {
    fn display(&self) -> String {
        let joined = self
            .joined_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "{} ({}) - joined {}",
            self.user.username.cyan(),
            self.role.to_string().magenta(),
            joined.dimmed()
        )
    }
}

impl Displayable for Repository {
    fn display(&self) -> String {
        let full_name = format!("{}/{}", self.owner, self.name);
        let visibility = if self.private {
            "private".yellow().to_string()
        } else {
            "public".green().to_string()
        };
        let mut output = format!("{} - {}", full_name.cyan().bold(), visibility);
        if let Some(desc) = &self.description {
            output.push_str(&format!("\n  {}: {}", "Description".dimmed(), desc));
        }
        if let Some(updated) = &self.updated_at {
            output.push_str(&format!(
                "\n  {}: {}",
                "Updated".dimmed(),
                updated.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            ));
        }
        if !self.collaborators.is_empty() {
            output.push_str(&format!(
                "\n  {} ({}):",
                "Collaborators".dimmed(),
                self.collaborators.len()
            ));
            for collaborator in &self.collaborators {
                output.push_str(&format!("\n    {}", collaborator.display()));
            }
        }
        output
    }
}

impl Displayable for RepositoryCollaborator {
    fn display(&self) -> String {
        format!(
            "{} [{}]",
            self.user.username.cyan(),
            self.permission.to_string().magenta()
        )
    }
}

impl Displayable for WorkflowStat {
    fn display(&self) -> String {
        let last_run = self
            .last_run
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());
        format!(
            "{} [{}]\n  {}: {}  {}: {}  {}: {}%\n  {}: {}  {}: {}",
            self.name.white().bold(),
            self.category.to_string().cyan(),
            "Success".dimmed(),
            format!("{}%", self.success_rate).green(),
            "Failure".dimmed(),
            format!("{}%", self.failure_rate).red(),
            "Skipped".dimmed(),
            self.skipped_rate,
            "Runs".dimmed(),
            self.total_runs,
            "Last run".dimmed(),
            last_run.dimmed()
        )
    }
}

impl Displayable for DeploymentStats {
    fn display(&self) -> String {
        let mut output = format!(
            "{}: {} ({} successful, {} failed, {} pending)",
            "Deployments".white().bold(),
            self.total,
            self.successful.to_string().green(),
            self.failed.to_string().red(),
            self.pending.to_string().yellow()
        );
        output.push_str(&format!(
            "\n  {}: {}% success, {}% failure, {}% pending",
            "Rates".dimmed(),
            self.rates.success,
            self.rates.failure,
            self.rates.pending
        ));
        if !self.days.is_empty() {
            output.push_str(&format!("\n  {}:", "By day".dimmed()));
            for day in &self.days {
                output.push_str(&format!(
                    "\n    {}  {} total ({} ok, {} failed, {} pending)",
                    day.date.format("%Y-%m-%d"),
                    day.total,
                    day.successful,
                    day.failed,
                    day.pending
                ));
            }
        }
        output
    }
}

impl Displayable for QualityMetric {
    fn display(&self) -> String {
        format!(
            "{}: {}{} ({})\n  {}",
            self.name.white().bold(),
            format_metric_value(self.value),
            self.unit,
            colorize_status(self.status),
            self.description.dimmed()
        )
    }
}

impl Displayable for QualityIssue {
    fn display(&self) -> String {
        let location = match self.line {
            Some(line) => format!("{}:{}", self.component, line),
            None => self.component.clone(),
        };
        format!(
            "[{}] {} ({})",
            colorize_severity(self.severity),
            self.title,
            location.dimmed()
        )
    }
}

impl Displayable for QualityReport {
    fn display(&self) -> String {
        let mut output = String::new();
        for (i, metric) in self.metrics.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&metric.display());
        }
        if self.metrics.is_empty() {
            output.push_str(&"No metrics reported.".dimmed().to_string());
        }
        if !self.issues.is_empty() {
            output.push_str(&format!("\n{} ({}):", "Top issues".white().bold(), self.issues.len()));
            for issue in &self.issues {
                output.push_str(&format!("\n  {}", issue.display()));
            }
        }
        output
    }
}

/// Integral values print without a trailing ".0"
fn format_metric_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn colorize_status(status: MetricStatus) -> String {
    match status {
        MetricStatus::Good => "good".green().to_string(),
        MetricStatus::Warning => "warning".yellow().to_string(),
        MetricStatus::Critical => "critical".red().to_string(),
    }
}

fn colorize_severity(severity: IssueSeverity) -> String {
    match severity {
        IssueSeverity::Critical => "Critical".red().bold().to_string(),
        IssueSeverity::High => "High".red().to_string(),
        IssueSeverity::Medium => "Medium".yellow().to_string(),
        IssueSeverity::Low => "Low".to_string(),
        IssueSeverity::Info => "Info".dimmed().to_string(),
    }
}
