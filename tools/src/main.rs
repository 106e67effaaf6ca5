//! blog-rank: prints the most engaging bloggers in a platform snapshot.
//!
//! Usage:
//!   blog-rank --data-dir ./data
//!   blog-rank --data-dir ./data --top 5 --json
//!   blog-rank --config rank.json --strategy chunked
//!
//! stdout carries only the report. Logs go to stderr (RUST_LOG=debug).

use anyhow::{Context, Result};
use blogrank_core::{
    config::{AggregationStrategy, RankConfig},
    ingest::Dataset,
    pipeline::EngagementPipeline,
    report::{write_report, OutputFormat},
    resource::DirProvider,
};
use std::env;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => RankConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => RankConfig::default(),
    };
    if let Some(top) = flag_value(&args, "--top") {
        config.top_n = top
            .parse()
            .with_context(|| format!("--top expects a non-negative integer, got '{top}'"))?;
    }
    if let Some(strategy) = flag_value(&args, "--strategy") {
        config.strategy = strategy.parse::<AggregationStrategy>()?;
    }
    let format = if args.iter().any(|a| a == "--json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    log::info!(
        "data_dir={data_dir} top_n={} strategy={}",
        config.top_n,
        config.strategy.as_str()
    );

    let provider = DirProvider::new(data_dir);
    let dataset = Dataset::load(&provider).context("ingesting snapshot")?;
    let pipeline = EngagementPipeline::new(config)?;
    let report = pipeline.run(&dataset)?;

    if report.diagnostics.dangling_comments > 0 {
        log::warn!(
            "{} comments reference posts missing from the snapshot",
            report.diagnostics.dangling_comments
        );
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report, format)?;
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
