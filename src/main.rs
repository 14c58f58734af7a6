// Process entry point.
// Parses CLI/env configuration, fetches the chosen day's input through the
// local cache, and runs both parts of the solution.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use aoc2022::fetcher::{FetchConfig, Fetcher};
use aoc2022::{Result, solutions};

/// Run an Advent of Code 2022 solution against its (locally cached) input.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Day of the challenge to run.
    #[arg(env = "SOLUTION")]
    day: u8,

    /// adventofcode.com session cookie used to fetch inputs.
    #[arg(long, env = "SESSION_COOKIE", hide_env_values = true)]
    session: String,

    /// Directory inputs are cached in. Defaults to the platform cache dir.
    #[arg(long, env = "LOCAL_FOLDER")]
    cache_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, env = "TRACE")]
    trace: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.trace {
        "aoc2022=debug"
    } else {
        "aoc2022=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let solution = solutions::for_day(cli.day)?;

    let mut config = FetchConfig::new(cli.session);
    if let Some(cache_dir) = cli.cache_dir {
        config = config.with_cache_dir(cache_dir);
    }
    let fetcher = Fetcher::new(config)?;

    let input = fetcher.fetch_input(&cli.day.to_string()).await?;

    info!(day = cli.day, "input fetched, running part one");
    let answer = solution.part_one(&input)?;
    info!(day = cli.day, answer = %answer, "part one complete, running part two");

    let answer = solution.part_two(&input)?;
    info!(day = cli.day, answer = %answer, "part two complete");

    Ok(())
}
