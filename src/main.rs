use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kbfind", about = "Knowledge search: type to find an article", version)]
struct Cli {
    /// Catalog file (TOML, JSON or YAML with an `articles` array). Overrides config.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Keep the shown article while it still matches instead of redrawing.
    #[arg(long)]
    stable: bool,

    /// Seed the random draw for reproducible results.
    #[arg(long)]
    seed: Option<u64>,

    /// Resolve this query once, print the result and exit.
    #[arg(long, short)]
    query: Option<String>,

    /// With --query, print JSON instead of text.
    #[arg(long, requires = "query")]
    json: bool,

    /// Write debug logs to /tmp/kbfind-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

const DEBUG_LOG: &str = "/tmp/kbfind-debug.log";

/// Send `tracing` output to [`DEBUG_LOG`]. The TUI owns the terminal, so
/// nothing is logged to stderr. `RUST_LOG` overrides the `debug` default.
fn init_debug_log() -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(DEBUG_LOG)
        .with_context(|| format!("opening {DEBUG_LOG}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "kbfind debug log started");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        init_debug_log()?;
    }

    kb_tui::run(kb_tui::Options {
        catalog: cli.catalog,
        stable: cli.stable,
        seed: cli.seed,
        query: cli.query,
        json: cli.json,
    })
}
