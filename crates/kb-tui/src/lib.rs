//! kbfind TUI: ratatui application shell and headless driver.

pub mod app;
pub mod commands;
pub mod event;
pub mod headless;
pub mod theme;
pub mod widgets;

pub use app::{App, CatalogSource};

use anyhow::Context;
use kb_core::{config::Config, RandomSource, SeededRandom, ThreadRandom};
use std::path::PathBuf;

/// Startup options collected from the command line. Anything set here wins
/// over `config.toml`.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub catalog: Option<PathBuf>,
    pub stable: bool,
    pub seed: Option<u64>,
    /// Resolve this query once and print the result instead of starting the TUI.
    pub query: Option<String>,
    pub json: bool,
}

/// Load config and catalog, then start the TUI or run headless.
pub fn run(opts: Options) -> anyhow::Result<()> {
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::defaults()
    });
    if opts.stable {
        config.search.stable_selection = true;
    }

    let source = match opts.catalog.or_else(|| config.search.catalog.clone()) {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Builtin,
    };
    let catalog = source
        .load()
        .with_context(|| format!("cannot start with catalog {source:?}"))?;
    tracing::info!(articles = catalog.len(), ?source, "catalog ready");

    let mut rng: Box<dyn RandomSource> = match opts.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    if let Some(query) = opts.query {
        let report = headless::evaluate(&catalog, &query, rng.as_mut());
        let mut out = std::io::stdout().lock();
        if opts.json {
            report.write_json(&mut out)?;
        } else {
            report.write_plain(&mut out)?;
        }
        return Ok(());
    }

    let theme = theme::Theme::named(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });
    App::new(catalog, source, config, theme, rng).run()
}
