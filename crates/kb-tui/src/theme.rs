//! Colour themes.
//!
//! A theme is a small TOML file (see `themes/`) read through the `config`
//! crate. The built-in themes are embedded with [`include_str!`]; pick one by
//! name with [`Theme::named`].
//!
//! Colour strings use ratatui's own parser, so anything `Color::from_str`
//! understands works: `light_blue`, `dark-gray`, `#fabd2f`, `208`.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::str::FromStr;

/// `(name, toml source)` for every embedded theme.
const BUILTIN: &[(&str, &str)] = &[
    ("default", include_str!("themes/default.toml")),
    ("gruvbox", include_str!("themes/gruvbox_dark.toml")),
];

/// One `{ fg = .., bg = .., bold = .. }` entry in a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
    italic: bool,
    underlined: bool,
}

impl From<StyleSpec> for Style {
    fn from(spec: StyleSpec) -> Self {
        let modifiers = [
            (spec.bold, Modifier::BOLD),
            (spec.dim, Modifier::DIM),
            (spec.italic, Modifier::ITALIC),
            (spec.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(fg) = spec.fg.as_deref().and_then(parse_color) {
            style = style.fg(fg);
        }
        if let Some(bg) = spec.bg.as_deref().and_then(parse_color) {
            style = style.bg(bg);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    borders: BorderSection,
    card: CardSection,
    prompt: PromptSection,
    search: SearchSection,
    #[serde(default)]
    tags: TagSection,
}

#[derive(Debug, Deserialize)]
struct BorderSection {
    focused: StyleSpec,
    command_bar: StyleSpec,
    unfocused: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct CardSection {
    id: StyleSpec,
    title: StyleSpec,
    summary: StyleSpec,
    body: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct PromptSection {
    hint: StyleSpec,
    no_match: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct SearchSection {
    highlight: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
struct TagSection {
    #[serde(default)]
    palette: Vec<String>,
}

/// Resolved styles for every themed element of the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    pub card_id: Style,
    pub card_title: Style,
    pub card_summary: Style,
    pub card_body: Style,

    /// "Start typing" prompt for a blank query.
    pub prompt_hint: Style,
    pub prompt_no_match: Style,

    /// Applied to occurrences of the query inside the article card.
    pub search_highlight: Style,

    tag_palette: Vec<Color>,
}

impl Theme {
    /// Names accepted by [`Theme::named`].
    pub const NAMES: &'static [&'static str] = &["default", "gruvbox"];

    /// The embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::named("default").expect("embedded default theme must be valid")
    }

    /// Look up a built-in theme, ignoring case. `gruvbox_dark` and
    /// `gruvbox-dark` are accepted as aliases of `gruvbox`.
    pub fn named(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "gruvbox_dark" | "gruvbox-dark" => "gruvbox".to_string(),
            other => other.to_string(),
        };
        let (_, src) = BUILTIN.iter().find(|(n, _)| *n == key)?;
        match Self::from_toml_str(src) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme = %key, error = %e, "embedded theme failed to parse");
                None
            }
        }
    }

    /// Parse a theme from TOML. Unknown keys are ignored; the `[tags]`
    /// section may be omitted.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let file: ThemeFile = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: file.borders.focused.into(),
            border_command_bar: file.borders.command_bar.into(),
            border_unfocused: file.borders.unfocused.into(),
            card_id: file.card.id.into(),
            card_title: file.card.title.into(),
            card_summary: file.card.summary.into(),
            card_body: file.card.body.into(),
            prompt_hint: file.prompt.hint.into(),
            prompt_no_match: file.prompt.no_match.into(),
            search_highlight: file.search.highlight.into(),
            tag_palette: file.tags.palette.iter().filter_map(|c| parse_color(c)).collect(),
        })
    }

    /// Colour for a tag chip. The same tag (in any case) always gets the
    /// same palette entry.
    pub fn tag_style(&self, tag: &str) -> Style {
        if self.tag_palette.is_empty() {
            return Style::default();
        }
        let slot = fnv1a(&tag.to_lowercase()) as usize % self.tag_palette.len();
        Style::default().fg(self.tag_palette[slot])
    }
}

/// FNV-1a; `std`'s hasher is randomly seeded per process.
fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn parse_color(s: &str) -> Option<Color> {
    Color::from_str(s.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn every_builtin_theme_parses() {
        for name in Theme::NAMES {
            let theme = Theme::named(name).unwrap();
            assert_ne!(theme.border_focused, Style::default(), "{name}");
            assert_ne!(theme.search_highlight, Style::default(), "{name}");
            assert!(!theme.tag_palette.is_empty(), "{name}");
        }
    }

    #[rstest]
    #[case("default", true)]
    #[case("GruvBox", true)]
    #[case("gruvbox-dark", true)]
    #[case("solarized", false)]
    fn theme_lookup(#[case] name: &str, #[case] found: bool) {
        assert_eq!(Theme::named(name).is_some(), found);
    }

    #[test]
    fn tags_keep_their_colour_across_case() {
        let theme = Theme::load_default();
        assert_eq!(theme.tag_style("CRM"), theme.tag_style("crm"));
        let distinct: std::collections::HashSet<_> =
            ["login", "password", "refund", "billing", "shipping", "crm"]
                .iter()
                .map(|t| theme.tag_style(t))
                .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn minimal_theme_without_tags() {
        let src = r##"
            [borders]
            focused = { fg = "#ff0080", bold = true }
            command_bar = { fg = "yellow" }
            unfocused = { fg = "208" }
            [card]
            id = { dim = true }
            title = { bold = true }
            summary = { italic = true }
            body = { fg = "white" }
            [prompt]
            hint = { dim = true }
            no_match = { fg = "red" }
            [search]
            highlight = { bg = "yellow", underlined = true }
        "##;
        let theme = Theme::from_toml_str(src).unwrap();
        assert_eq!(
            theme.border_focused,
            Style::default().fg(Color::Rgb(255, 0, 128)).add_modifier(Modifier::BOLD)
        );
        assert_eq!(theme.border_unfocused, Style::default().fg(Color::Indexed(208)));
        assert_eq!(theme.tag_style("anything"), Style::default());
    }

    #[test]
    fn missing_section_is_an_error() {
        assert!(Theme::from_toml_str("[borders]\n").is_err());
    }
}
