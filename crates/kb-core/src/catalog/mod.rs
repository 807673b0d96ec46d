//! The ordered, immutable set of articles available for search.
//!
//! A catalog is built once at startup, either from the embedded default
//! (`catalog/default.toml`) or from a user-supplied file. The file format is
//! picked from the extension by the `config` crate, so TOML, JSON and YAML
//! all work as long as they carry a top-level `articles` array.
//!
//! [`Catalog::new`] is the only constructor and enforces id uniqueness; the
//! search and selection layers assume it.

use crate::types::Article;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const DEFAULT_CATALOG: &str = include_str!("default.toml");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate article id: {0}")]
    DuplicateId(String),
    #[error("failed to load catalog from {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
    #[error("invalid catalog source: {0}")]
    Parse(#[from] config::ConfigError),
}

// ---------------------------------------------------------------------------
// Raw (serde) type, mirrors the file structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    articles: Vec<Article>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids. Order is preserved.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !seen.insert(article.id.as_str()) {
                return Err(CatalogError::DuplicateId(article.id.clone()));
            }
        }
        Ok(Self { articles })
    }

    /// The embedded default catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed or contains duplicate ids.
    pub fn builtin() -> Self {
        Self::from_toml_str(DEFAULT_CATALOG).expect("embedded default catalog must be valid")
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::new(raw.articles)
    }

    /// Load a catalog file. The format follows the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let load_err = |source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        };
        let raw: RawCatalog = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(load_err)?;
        let catalog = Self::new(raw.articles)?;
        tracing::debug!(path = %path.display(), articles = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up an article by id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("title {id}"),
            summary: String::new(),
            body: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn builtin_loads_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.articles().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["KB-1001", "KB-1002", "KB-1003", "KB-1004"]);
    }

    #[test]
    fn builtin_bodies_keep_line_breaks() {
        let catalog = Catalog::builtin();
        let reset = catalog.get("KB-1001").unwrap();
        assert!(reset.body.starts_with("1) Go to the login page\n"));
        assert!(reset.body.contains("\"Forgot Password\""));
        assert_eq!(reset.tags, vec!["login", "password", "agents"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![article("A"), article("B"), article("A")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "A"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[articles]]
            id = "X-1"
            title = "t"
            summary = "s"
            body = "b"
            "#,
        )
        .unwrap();
        assert!(catalog.articles()[0].tags.is_empty());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result = Catalog::from_toml_str(
            r#"
            [[articles]]
            id = "X-1"
            title = "t"
            "#,
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn load_reports_path_on_failure() {
        let err = Catalog::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
