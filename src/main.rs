use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_version_check::{CheckerConfig, VersionChecker};

/// Exit code reported when the remote repository has a newer version
const EXIT_UPDATE_AVAILABLE: u8 = 10;

/// Environment variable consulted when `--token` is not given
const TOKEN_ENV: &str = "GIT_VERSION_CHECK_TOKEN";

#[derive(Parser)]
#[command(name = "git-version-check")]
#[command(version, about = "Check whether a newer tagged release exists on GitHub or GitLab")]
struct Cli {
    /// Git hosting provider (github, gitlab)
    provider: String,

    /// Organization, group or owner
    org: String,

    /// Repository name
    repo: String,

    /// Locally known version (e.g. 2026.1.0-1)
    #[arg(long)]
    current: String,

    /// Access token for private repositories
    #[arg(long)]
    token: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CheckerConfig> {
    let Some(path) = path else {
        return Ok(CheckerConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    CheckerConfig::from_json_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_ref())?;
    let checker = VersionChecker::new(&config)?;
    let token = cli.token.or_else(|| std::env::var(TOKEN_ENV).ok());

    let result = checker
        .check(
            Some(cli.provider.as_str()),
            &cli.current,
            &cli.org,
            &cli.repo,
            token.as_deref(),
        )
        .await?;

    if result.newer {
        println!("update available: {} -> {}", result.current, result.latest);
        Ok(ExitCode::from(EXIT_UPDATE_AVAILABLE))
    } else {
        println!("up to date: {} (latest {})", result.current, result.latest);
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
