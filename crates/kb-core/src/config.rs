//! User configuration, `$XDG_CONFIG_HOME/kbfind/config.toml`.
//!
//! The file is layered over [`DEFAULT_CONFIG`] with the `config` crate, so a
//! user file only needs the keys it changes. On first run the defaults are
//! written out as a starting point.

use crate::resolver::SelectionPolicy;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents written to a fresh `config.toml`, and the base layer under it.
pub const DEFAULT_CONFIG: &str = r#"[ui]
# default | gruvbox
theme     = "default"
show_ids  = true
show_tags = true

[search]
# Keep the shown article while it still matches instead of redrawing on
# every keystroke.
stable_selection = false
# catalog = "/path/to/catalog.toml"
"#;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchConfig,
}

/// `[ui]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    /// Show the `[KB-1234]` badge on the card.
    pub show_ids: bool,
    pub show_tags: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_ids: true,
            show_tags: true,
        }
    }
}

/// `[search]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub stable_selection: bool,
    /// Catalog file to load instead of the built-in articles.
    pub catalog: Option<PathBuf>,
}

impl SearchConfig {
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::from_stable(self.stable_selection)
    }
}

impl Config {
    /// Where [`Config::load`] looks.
    pub fn path() -> PathBuf {
        config_path(|key| std::env::var(key).ok())
    }

    /// Load the user config, writing the defaults to disk first if the
    /// file does not exist yet.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_init(&Self::path())
    }

    pub fn load_or_init(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
            std::fs::write(path, DEFAULT_CONFIG)
                .with_context(|| format!("writing default config to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        Self::load_from(path)
    }

    /// `path` layered over the defaults. A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("reading {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg)
    }

    /// The built-in defaults, without touching the filesystem.
    pub fn defaults() -> Self {
        Self::default()
    }
}

/// `$XDG_CONFIG_HOME/kbfind/config.toml`, falling back to
/// `$HOME/.config/kbfind/config.toml`.
fn config_path(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let base = env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env("HOME").unwrap_or_else(|| ".".to_string())).join(".config")
        });
    base.join("kbfind").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_defaults_match_rust_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        let dflt = Config::defaults();
        assert_eq!(cfg.ui.theme, dflt.ui.theme);
        assert_eq!(cfg.ui.show_ids, dflt.ui.show_ids);
        assert_eq!(cfg.ui.show_tags, dflt.ui.show_tags);
        assert_eq!(cfg.search.stable_selection, dflt.search.stable_selection);
        assert_eq!(cfg.search.catalog, None);
        assert_eq!(cfg.search.policy(), SelectionPolicy::Reroll);
    }

    #[test]
    fn file_overrides_layer_on_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search]\nstable_selection = true\ncatalog = \"/srv/kb/articles.json\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.search.policy(), SelectionPolicy::Stable);
        assert_eq!(cfg.search.catalog, Some(PathBuf::from("/srv/kb/articles.json")));
        assert_eq!(cfg.ui.theme, "default");
        assert!(cfg.ui.show_tags);
    }

    #[test]
    fn first_load_writes_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config::load_or_init(&path).unwrap();
        assert!(!cfg.search.stable_selection);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn path_prefers_xdg_then_home() {
        let xdg = config_path(|k| match k {
            "XDG_CONFIG_HOME" => Some("/xdg".into()),
            "HOME" => Some("/home/u".into()),
            _ => None,
        });
        assert_eq!(xdg, PathBuf::from("/xdg/kbfind/config.toml"));

        let home = config_path(|k| (k == "HOME").then(|| "/home/u".to_string()));
        assert_eq!(home, PathBuf::from("/home/u/.config/kbfind/config.toml"));

        let empty_xdg = config_path(|k| match k {
            "XDG_CONFIG_HOME" => Some(String::new()),
            "HOME" => Some("/home/u".into()),
            _ => None,
        });
        assert_eq!(empty_xdg, home);
    }
}
