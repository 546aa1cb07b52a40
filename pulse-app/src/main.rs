use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pulse_common::observability::{LogConfig, init_logging};
use pulse_config::{PulseConfig, PulseConfigLoader};
use pulse_social::twitter::TwitterApi;

mod report;

/// Print recent tweets matching the configured search expression.
///
/// The bearer token comes from the config file or from
/// `PULSE__TWITTER__BEARER_TOKEN`; it is never baked into the binary.
#[derive(Debug, Parser)]
#[command(name = "pulse", version)]
struct Cli {
    /// Optional YAML config file; `PULSE__`-prefixed env vars merge on top.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured search expression.
    #[arg(long)]
    query: Option<String>,

    /// Override the configured page size (provider clamps to 10..=100).
    #[arg(long)]
    max_results: Option<u32>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LogConfig::default()) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Guarded failure path: one diagnostic line, non-zero exit, no panic.
            tracing::error!(error = %format!("{e:#}"), "pulse.fetch_failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut loader = PulseConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let cfg: PulseConfig = loader
        .load()
        .context("loading config (set PULSE__TWITTER__BEARER_TOKEN or pass --config)")?;

    let query = cli.query.unwrap_or(cfg.twitter.query);
    let max_results = cli.max_results.unwrap_or(cfg.twitter.max_results);

    tracing::info!(%query, max_results, "pulse.search.start");

    let api = TwitterApi::new(cfg.twitter.bearer_token)?;
    let resp = api
        .recent_search(&query, max_results)
        .await
        .context("recent tweet search failed")?;

    tracing::debug!(result_count = resp.result_count(), "pulse.search.done");

    // stdout carries only the result lines; everything else goes to stderr.
    for line in report::tweet_lines(&resp.into_tweets()) {
        println!("{line}");
    }

    Ok(())
}
