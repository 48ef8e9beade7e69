use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repohealth",
    version,
    about = "Audit an organization's public repositories for open-source health"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Build(BuildCommand),
    Check(CheckCommand),
}

/// Score every repository and write the static report page.
#[derive(Args)]
pub struct BuildCommand {
    /// Site configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Where to write the rendered page
    #[arg(short, long, default_value = "public/index.html")]
    pub out: PathBuf,

    /// Personal access token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Score every repository and print verdicts; the exit code reflects the
/// worst severity found.
#[derive(Args)]
pub struct CheckCommand {
    /// Site configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Personal access token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Clone, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}
