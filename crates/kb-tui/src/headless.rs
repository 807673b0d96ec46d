//! Headless mode: resolve a single query and print the outcome.
//!
//! Used by `kbfind --query <text>`. The output mirrors the three states the
//! TUI can show. With `--json` a single JSON object is written instead:
//!
//! ```json
//! {"state":"match","query":"refund","match_count":1,"article":{"id":"KB-1002",...}}
//! ```

use kb_core::{
    normalizer::{is_blank, normalize},
    resolve,
    search::count_matching,
    Article, Catalog, RandomSource, SelectionResult,
};
use serde::Serialize;
use std::io::Write;

/// Outcome of one headless evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub query: String,
    /// `None` when the query is blank.
    pub match_count: Option<usize>,
    pub result: SelectionResult,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    state: &'static str,
    query: &'a str,
    match_count: Option<usize>,
    article: Option<&'a Article>,
}

/// Resolve `raw_query` once against `catalog`.
pub fn evaluate<R>(catalog: &Catalog, raw_query: &str, rng: &mut R) -> Report
where
    R: RandomSource + ?Sized,
{
    let result = resolve(catalog.articles(), raw_query, rng);
    let match_count = if is_blank(raw_query) {
        None
    } else {
        Some(count_matching(catalog.articles(), &normalize(raw_query)))
    };
    tracing::debug!(query = %raw_query, state = result.state_name(), ?match_count, "headless: resolved");
    Report {
        query: raw_query.to_string(),
        match_count,
        result,
    }
}

impl Report {
    /// Human-readable rendering, one article card or one message line.
    pub fn write_plain<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match &self.result {
            SelectionResult::NoQuery => writeln!(out, "Start typing to search knowledge..."),
            SelectionResult::NoMatch => {
                writeln!(out, "No matching articles found for: {}", self.query)
            }
            SelectionResult::Match(article) => {
                if article.tags.is_empty() {
                    writeln!(out, "[{}]", article.id)?;
                } else {
                    writeln!(out, "[{}] {}", article.id, article.tags.join(", "))?;
                }
                writeln!(out, "{}", article.title)?;
                writeln!(out, "{}", article.summary)?;
                writeln!(out)?;
                writeln!(out, "{}", article.body)
            }
        }
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let json = JsonReport {
            state: self.result.state_name(),
            query: &self.query,
            match_count: self.match_count,
            article: self.result.article(),
        };
        serde_json::to_writer(&mut *out, &json)?;
        writeln!(out)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
