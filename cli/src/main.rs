//! CLI for the Repository Lister.
//!
//! Lists an organization's or user's repositories, publishes them as
//! GitHub Actions step outputs, and optionally finds repositories that
//! contain a given branch.

use clap::Parser;
use repository_lister::{
    DiscoveryOptions, ForkPolicy, OutputFormat, RunSummary, Runner, RunnerConfig, RunnerError,
    VisibilityPolicy, DEFAULT_MAX_REPOSITORIES, MAX_PER_PAGE,
};
use std::fmt::Display;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Token used when the `token` input is empty or absent.
const TOKEN_FALLBACK_ENV: &str = "GITHUB_TOKEN";

// Actions passes an omitted input as an empty string, so numeric inputs are
// read as text and blank values mean "use the default".

/// Repository Lister - List, filter and search the repositories of a GitHub owner.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Organization or user whose repositories are listed.
    #[arg(long, env = "INPUT_OWNER")]
    owner: String,

    /// GitHub Personal Access Token. Falls back to `GITHUB_TOKEN`.
    #[arg(long, env = "INPUT_TOKEN")]
    token: Option<String>,

    /// Only report repositories containing this branch.
    #[arg(long, env = "INPUT_BRANCH-NAME", default_value = "")]
    branch_name: String,

    /// Output format: json, flat, array or csv.
    #[arg(long, env = "INPUT_OUTPUT-FORMAT", default_value = "json")]
    output_format: String,

    /// Visibility filter: all, public, private or internal.
    #[arg(long, env = "INPUT_VISIBILITY", default_value = "all")]
    visibility: String,

    /// Fork handling: true, false or only.
    #[arg(long, env = "INPUT_INCLUDE-FORKS", default_value = "true")]
    include_forks: String,

    /// Maximum repositories to fetch (0 for unlimited, default 1000).
    #[arg(long, env = "INPUT_MAX-REPOS")]
    max_repos: Option<String>,

    /// Page number to start fetching from (default 1).
    #[arg(long, env = "INPUT_PAGE")]
    page: Option<String>,

    /// Repositories per page, 1-100 (default 100).
    #[arg(long, env = "INPUT_PER-PAGE")]
    per_page: Option<String>,

    /// Maximum concurrent branch lookups (default 1).
    #[arg(long, env = "INPUT_PROBE-CONCURRENCY")]
    probe_concurrency: Option<String>,
}

/// Errors that stop the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Neither the `token` input nor `GITHUB_TOKEN` is set.
    #[error("Input required and not supplied: token (or set GITHUB_TOKEN)")]
    MissingToken,

    /// The run itself failed.
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            // Fails the step with the message in the workflow annotations
            println!("::error::{}", escape_command_data(&e.to_string()));
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Returns the trimmed value, or `None` when it is absent or blank.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Picks the `token` input, then `GITHUB_TOKEN`.
fn resolve_token(input: Option<&str>) -> Result<String, CliError> {
    if let Some(token) = non_empty(input) {
        return Ok(token.to_string());
    }
    std::env::var(TOKEN_FALLBACK_ENV)
        .ok()
        .filter(|token| !token.is_empty())
        .ok_or(CliError::MissingToken)
}

/// Parses a numeric input, keeping `default` for blank or invalid values.
fn parse_number<T>(input: &str, value: Option<&str>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = non_empty(value) else {
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!(input, value = raw, error = %e, "Ignoring invalid number");
        default
    })
}

/// Parses a policy input, keeping the default for blank or unknown values.
fn parse_or_default<T>(value: &str) -> T
where
    T: FromStr + Default,
    T::Err: Display,
{
    let Some(raw) = non_empty(Some(value)) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unrecognized input");
        T::default()
    })
}

/// Escapes `%`, CR and LF for a workflow command message.
fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Turns parsed arguments into a runner configuration.
fn build_config(args: Args) -> Result<RunnerConfig, CliError> {
    let token = resolve_token(args.token.as_deref())?;
    let discovery = DiscoveryOptions::new(
        parse_number("per-page", args.per_page.as_deref(), u32::from(MAX_PER_PAGE)),
        parse_number("page", args.page.as_deref(), 1),
        parse_number(
            "max-repos",
            args.max_repos.as_deref(),
            DEFAULT_MAX_REPOSITORIES,
        ),
    );

    Ok(RunnerConfig::new(args.owner, token)
        .with_branch_name(args.branch_name.trim())
        .with_output_format(parse_or_default::<OutputFormat>(&args.output_format))
        .with_visibility(parse_or_default::<VisibilityPolicy>(&args.visibility))
        .with_forks(parse_or_default::<ForkPolicy>(&args.include_forks))
        .with_discovery_options(discovery)
        .with_probe_concurrency(parse_number(
            "probe-concurrency",
            args.probe_concurrency.as_deref(),
            1,
        )))
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, CliError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    Ok(runner.run().await?)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Owner type: {}", summary.owner_mode);
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Repositories selected: {}", summary.repositories_selected);

    if let Some(matches) = summary.branch_matches {
        println!("  Repositories with branch: {matches}");
    }
    if summary.has_warnings() {
        println!("  Branch lookups failed: {}", summary.probe_warnings);
    }
}
