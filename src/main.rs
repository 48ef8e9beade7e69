mod cli;
mod config;
mod criteria;
mod error;
mod fetch;
mod github;
mod readability;
mod report;
mod types;
mod unmark;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::HealthError;
use crate::github::{GitHubClient, TokenStatus};
use crate::types::verdict::Severity;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, HealthError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Build(cmd) => run_build(cmd),
        cli::Commands::Check(cmd) => run_check(cmd),
    }
}

fn run_build(cmd: cli::BuildCommand) -> Result<i32, HealthError> {
    let config = config::load(&cmd.config)?;
    let metrics = config.metrics()?;
    let (client, token_status) = prepare_client(cmd.token)?;
    let token_message = token_status.message();
    if let Some(message) = &token_message {
        eprintln!("warning: {message}");
    }

    let repos = fetch::fetch_org(&client, &config.organization)?;
    let scored = criteria::score_repos(repos, &metrics);

    let default_title = format!("{} repositories", config.organization);
    let input = report::ReportInput {
        title: config.page_str("title").unwrap_or(&default_title),
        intro: config.page_str("intro"),
        token_message: token_message.as_deref(),
        metrics: &metrics,
        repos: &scored,
    };
    let page = report::render(&input, report::OutputFormat::Html)?;

    if let Some(parent) = cmd.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&cmd.out, page)?;
    println!("wrote {}", cmd.out.display());
    Ok(exit_code::SUCCESS)
}

fn run_check(cmd: cli::CheckCommand) -> Result<i32, HealthError> {
    let config = config::load(&cmd.config)?;
    let metrics = config.metrics()?;
    let (client, token_status) = prepare_client(cmd.token)?;
    if let Some(message) = token_status.message() {
        eprintln!("warning: {message}");
    }

    let repos = fetch::fetch_org(&client, &config.organization)?;
    let scored = criteria::score_repos(repos, &metrics);

    match cmd.format {
        cli::CheckFormat::Json => {
            let input = report::ReportInput {
                title: &config.organization,
                intro: None,
                token_message: None,
                metrics: &metrics,
                repos: &scored,
            };
            println!("{}", report::render(&input, report::OutputFormat::Json)?);
        }
        cli::CheckFormat::Text => {
            for repo in &scored {
                for verdict in &repo.verdicts {
                    println!(
                        "[{}] {}/{}: {}",
                        verdict.severity.as_str().to_uppercase(),
                        repo.repo.name,
                        verdict.metric,
                        verdict.message
                    );
                }
            }
        }
    }

    let worst = scored
        .iter()
        .flat_map(|repo| repo.verdicts.iter())
        .map(|verdict| verdict.severity)
        .max();
    Ok(match worst {
        Some(Severity::High) => exit_code::BLOCKING,
        Some(Severity::Low) => exit_code::WARNINGS,
        _ => exit_code::SUCCESS,
    })
}

/// Build the API client and classify the credential. An expired token is
/// dropped so the run proceeds unauthenticated instead of hitting 401s.
fn prepare_client(token: Option<String>) -> Result<(GitHubClient, TokenStatus), HealthError> {
    match token {
        None => Ok((GitHubClient::new(None), TokenStatus::Missing)),
        Some(token) => {
            let mut client = GitHubClient::new(Some(token));
            let remaining = client.token_expiration()?;
            let status = TokenStatus::from_remaining(remaining);
            if status == TokenStatus::Expired {
                client.clear_token();
            }
            Ok((client, status))
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
