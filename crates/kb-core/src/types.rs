//! Core types for kb-core.
//!
//! [`Article`] is the only record type. It is a plain value: the catalog
//! owns the canonical copies and selection results carry clones.

use serde::{Deserialize, Serialize};

/// A single knowledge-base article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Opaque identifier, unique within a catalog (e.g. `KB-1002`).
    pub id: String,
    pub title: String,
    /// One-line description shown under the title.
    pub summary: String,
    /// Free-form article text. Line breaks are significant for display.
    pub body: String,
    /// Short labels in display order. Missing in a catalog file means none.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Which field of an [`Article`] satisfied a query.
///
/// Fields are checked in declaration order, so the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    Title,
    Summary,
    Body,
    Tag,
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchField::Title => write!(f, "title"),
            MatchField::Summary => write!(f, "summary"),
            MatchField::Body => write!(f, "body"),
            MatchField::Tag => write!(f, "tag"),
        }
    }
}
