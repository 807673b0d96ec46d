//! Builders for `Article` and `Catalog` test fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

#![allow(dead_code)]

use kb_core::{Article, Catalog};

// ---------------------------------------------------------------------------
// ArticleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Article`] test fixtures.
///
/// # Example
///
/// ```rust
/// let article = ArticleBuilder::new("KB-9")
///     .title("Resetting MFA")
///     .tags(["auth", "mfa"])
///     .build();
/// ```
pub struct ArticleBuilder {
    id: String,
    title: String,
    summary: String,
    body: String,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            summary: String::new(),
            body: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            summary: self.summary,
            body: self.body,
            tags: self.tags,
        }
    }
}

/// Build a catalog, panicking on duplicate ids.
pub fn catalog_of(articles: Vec<Article>) -> Catalog {
    Catalog::new(articles).expect("test catalog must have unique ids")
}

/// Ids of a slice of article references, in order.
pub fn ids(articles: &[&Article]) -> Vec<String> {
    articles.iter().map(|a| a.id.clone()).collect()
}

/// A random source that always returns `r`.
pub fn fixed(r: f64) -> impl FnMut() -> f64 {
    move || r
}
