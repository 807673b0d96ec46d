//! Case-insensitive substring matching over the catalog.
//!
//! An article matches a normalised query `q` when `q` occurs in its
//! lowercased title, summary, body, or any one of its lowercased tags.
//! Results keep catalog order; there is no scoring.
//!
//! Callers are expected to pass an already normalised query (see
//! [`crate::normalizer::normalize`]). The empty query is handled by the
//! resolver before matching runs; passed here it matches every article.

use crate::types::{Article, MatchField};

impl Article {
    /// The first field in which the normalised query `q` occurs, if any.
    pub fn match_field(&self, q: &str) -> Option<MatchField> {
        if contains_folded(&self.title, q) {
            Some(MatchField::Title)
        } else if contains_folded(&self.summary, q) {
            Some(MatchField::Summary)
        } else if contains_folded(&self.body, q) {
            Some(MatchField::Body)
        } else if self.tags.iter().any(|t| contains_folded(t, q)) {
            Some(MatchField::Tag)
        } else {
            None
        }
    }

    /// True when the normalised query `q` occurs in any searchable field.
    pub fn matches(&self, q: &str) -> bool {
        self.match_field(q).is_some()
    }
}

/// The catalog-order subsequence of `articles` that match `q`.
pub fn matching<'a>(articles: &'a [Article], q: &str) -> Vec<&'a Article> {
    let hits: Vec<&Article> = articles.iter().filter(|a| a.matches(q)).collect();
    tracing::debug!(query = %q, hits = hits.len(), total = articles.len(), "search: matched");
    hits
}

/// Number of articles matching `q`, without collecting them.
pub fn count_matching(articles: &[Article], q: &str) -> usize {
    articles.iter().filter(|a| a.matches(q)).count()
}

fn contains_folded(haystack: &str, q: &str) -> bool {
    haystack.to_lowercase().contains(q)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
