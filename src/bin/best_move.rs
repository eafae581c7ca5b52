//! Line-delimited JSON front end for the engine.
//!
//! Reads one `{"board": [[...]], "player": 1|2}` request per line on stdin and
//! writes one response per line on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gomoku::request::serve;
use gomoku::{AIEngine, EngineConfig};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to an engine config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Candidate radius around existing stones (overrides the config file)
    #[arg(long)]
    radius: Option<u8>,

    /// Weight of the opponent's patterns, in [0.1, 1.0) (overrides the config file)
    #[arg(long)]
    defense_weight: Option<f64>,

    /// Attach the N best candidates and their scores to each response
    #[arg(short, long, default_value_t = 0)]
    explain: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let engine = build_engine(&args)?;
    info!(config = ?engine.config(), "engine ready");

    // Communication happens through stdin/stdout.
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    serve(&engine, stdin, stdout, args.explain).context("request loop failed")?;

    Ok(())
}

fn build_engine(args: &Args) -> anyhow::Result<AIEngine> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<EngineConfig>(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(defense_weight) = args.defense_weight {
        config.defense_weight = defense_weight;
    }
    Ok(AIEngine::from_config(config)?)
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
