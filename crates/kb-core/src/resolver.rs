//! Maps a raw query to the single article the user should see.
//!
//! # Decision procedure
//!
//! 1. Normalise the raw query. Empty → [`SelectionResult::NoQuery`].
//! 2. Collect the matching subsequence. Empty → [`SelectionResult::NoMatch`].
//! 3. Draw one match uniformly at random → [`SelectionResult::Match`].
//!
//! [`resolve`] is the stateless form and redraws on every call. [`Selector`]
//! wraps it for drivers that want a configurable policy: with
//! [`SelectionPolicy::Stable`] the previously shown article is kept for as
//! long as it is still among the matches.
//!
//! # Randomness
//!
//! Draws go through the [`RandomSource`] trait. Production code uses
//! [`ThreadRandom`]; `--seed` runs use [`SeededRandom`]; tests pass a
//! closure returning a fixed value.

use crate::normalizer::normalize;
use crate::search::matching;
use crate::types::Article;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Random source
// ---------------------------------------------------------------------------

/// A generator of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic generator for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Map a unit float onto `0..len`. Out-of-range and NaN inputs are clamped.
///
/// `len` must be non-zero.
fn pick_index(len: usize, r: f64) -> usize {
    // `as usize` saturates: negatives and NaN become 0.
    let idx = (r * len as f64).floor() as usize;
    idx.min(len - 1)
}

// ---------------------------------------------------------------------------
// Selection result
// ---------------------------------------------------------------------------

/// Outcome of one resolver evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The query was empty after trimming.
    NoQuery,
    /// The query was non-empty but nothing matched.
    NoMatch,
    /// One article drawn from the matches.
    Match(Article),
}

impl SelectionResult {
    pub fn article(&self) -> Option<&Article> {
        match self {
            SelectionResult::Match(article) => Some(article),
            _ => None,
        }
    }

    /// Stable lowercase tag for logs and JSON output.
    pub fn state_name(&self) -> &'static str {
        match self {
            SelectionResult::NoQuery => "no_query",
            SelectionResult::NoMatch => "no_match",
            SelectionResult::Match(_) => "match",
        }
    }
}

/// Resolve `raw_query` against `articles`, drawing a fresh match every call.
pub fn resolve<R>(articles: &[Article], raw_query: &str, rng: &mut R) -> SelectionResult
where
    R: RandomSource + ?Sized,
{
    let q = normalize(raw_query);
    if q.is_empty() {
        return SelectionResult::NoQuery;
    }
    draw(&matching(articles, &q), rng)
}

fn draw<R>(hits: &[&Article], rng: &mut R) -> SelectionResult
where
    R: RandomSource + ?Sized,
{
    if hits.is_empty() {
        return SelectionResult::NoMatch;
    }
    let idx = pick_index(hits.len(), rng.next_unit());
    SelectionResult::Match(hits[idx].clone())
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// How a [`Selector`] treats the previously shown article on re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Draw again on every evaluation, even if the matches did not change.
    #[default]
    Reroll,
    /// Keep the previous article while it is still among the matches.
    Stable,
}

impl SelectionPolicy {
    pub fn from_stable(stable: bool) -> Self {
        if stable {
            SelectionPolicy::Stable
        } else {
            SelectionPolicy::Reroll
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::Reroll => write!(f, "reroll"),
            SelectionPolicy::Stable => write!(f, "stable"),
        }
    }
}

/// Policy-aware resolver for interactive drivers.
///
/// Holds the id of the last matched article; nothing else carries over
/// between evaluations.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    policy: SelectionPolicy,
    pinned: Option<String>,
}

impl Selector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            pinned: None,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        tracing::debug!(from = %self.policy, to = %policy, "selector: policy changed");
        self.policy = policy;
    }

    /// Evaluate `raw_query` under the current policy.
    pub fn select<R>(&mut self, articles: &[Article], raw_query: &str, rng: &mut R) -> SelectionResult
    where
        R: RandomSource + ?Sized,
    {
        self.evaluate(articles, raw_query, rng, self.policy == SelectionPolicy::Stable)
    }

    /// Evaluate `raw_query` with a fresh draw, ignoring any pinned article.
    pub fn reroll<R>(&mut self, articles: &[Article], raw_query: &str, rng: &mut R) -> SelectionResult
    where
        R: RandomSource + ?Sized,
    {
        self.evaluate(articles, raw_query, rng, false)
    }

    fn evaluate<R>(
        &mut self,
        articles: &[Article],
        raw_query: &str,
        rng: &mut R,
        keep_pinned: bool,
    ) -> SelectionResult
    where
        R: RandomSource + ?Sized,
    {
        let q = normalize(raw_query);
        let result = if q.is_empty() {
            SelectionResult::NoQuery
        } else {
            let hits = matching(articles, &q);
            let pinned = self
                .pinned
                .as_deref()
                .filter(|_| keep_pinned)
                .and_then(|id| hits.iter().find(|a| a.id == id));
            match pinned {
                Some(article) => SelectionResult::Match((*article).clone()),
                None => draw(&hits, rng),
            }
        };

        self.pinned = result.article().map(|a| a.id.clone());
        tracing::debug!(
            query = %q,
            policy = %self.policy,
            state = result.state_name(),
            article = self.pinned.as_deref().unwrap_or("-"),
            "selector: resolved"
        );
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
