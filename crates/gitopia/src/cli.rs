use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitopia")]
#[command(about = "CLI dashboard for GitHub organizations, repositories and code quality")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Color output mode
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "GITOPIA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub API token (overrides config file and stored credentials)
    #[arg(long, global = true, env = "GITOPIA_GITHUB_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// SonarQube API token (overrides config file and stored credentials)
    #[arg(long, global = true, env = "GITOPIA_SONAR_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub sonar_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colorize when stdout is a terminal
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

/// Services a stored credential can belong to
#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum Provider {
    /// GitHub code host
    #[value(name = "github", alias = "gh")]
    GitHub,
    /// SonarQube quality server
    #[value(name = "sonar", alias = "sq")]
    Sonar,
}

impl Provider {
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::GitHub => "GitHub",
            Provider::Sonar => "SonarQube",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account overview: profile, organizations and repositories
    #[command(visible_alias = "d")]
    Dashboard,

    /// Organization operations
    #[command(visible_alias = "o")]
    Orgs {
        #[command(subcommand)]
        action: OrgCommands,
    },

    /// Repository operations
    #[command(visible_alias = "r")]
    Repos {
        #[command(subcommand)]
        action: RepoCommands,
    },

    /// List the members of an organization
    #[command(visible_alias = "m")]
    Members {
        /// Organization login
        org: String,
    },

    /// Workflow, deployment and code quality statistics
    #[command(visible_alias = "s")]
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },

    /// Manage stored API tokens
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum OrgCommands {
    /// List organizations you belong to
    #[command(visible_alias = "ls")]
    List,

    /// Get one organization with its members and repositories
    Get {
        /// Organization login
        name: String,
    },
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// List repositories you can access
    #[command(visible_alias = "ls")]
    List {
        /// Restrict the listing to one organization
        #[arg(long)]
        org: Option<String>,
    },

    /// Get one repository with its collaborators
    Get {
        /// Repository in owner/name form (e.g. acme/webapp)
        #[arg(value_name = "OWNER/NAME")]
        repo: String,
    },
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Workflow run success rates, grouped by workflow
    Workflows {
        /// Repository in owner/name form
        #[arg(long, value_name = "OWNER/NAME")]
        repo: String,
    },

    /// Deployment counts and per-day series for one month
    Deployments {
        /// Repository in owner/name form
        #[arg(long, value_name = "OWNER/NAME")]
        repo: String,

        /// Month to report on, defaults to the current month
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Code quality metrics and the most severe open issues
    Quality {
        /// Quality server component key
        #[arg(long)]
        component: Option<String>,

        /// Derive the component key from a repository (owner_name)
        #[arg(long, value_name = "OWNER/NAME", conflicts_with = "component")]
        repo: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an API token for a provider
    Set {
        /// Provider the token belongs to
        #[arg(value_enum)]
        provider: Provider,
        /// Token value
        token: String,
    },

    /// Show stored tokens, masked
    Show,

    /// Remove a stored token, or all of them when no provider is given
    Clear {
        /// Provider to clear
        #[arg(value_enum)]
        provider: Option<Provider>,
    },

    /// Print the path of the credentials file
    Path,
}

impl Cli {
    /// Generate shell completions and write them to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "gitopia", &mut std::io::stdout());
    }
}
