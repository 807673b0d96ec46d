//! The main pane, showing the current [`SelectionResult`].
//!
//! | Result    | Rendered as                                    |
//! |-----------|------------------------------------------------|
//! | `NoQuery` | "Start typing to search knowledge..."          |
//! | `NoMatch` | "No matching articles found for: <query>"      |
//! | `Match`   | id badge, tag chips, title, summary, body      |
//!
//! The meta row ends with the field that satisfied the query. Occurrences of
//! the normalised query are highlighted in the title, summary and body. The
//! card scrolls by wrapped rows with `↑`/`↓` and `PageUp`/`PageDown` while
//! the panel is focused, stopping once the last row is on screen.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use kb_core::{normalizer::normalize, Article, SelectionResult};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PAGE_STEP: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ArticlePanelState {
    /// Wrapped rows scrolled off the top of the card.
    pub scroll: u16,
    /// Cached from the last render so `handle()` can clamp scrolling.
    max_scroll: Cell<u16>,
}

impl ArticlePanelState {
    /// Handle a scroll event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_scroll.get();
        let next = match event {
            AppEvent::Nav(Direction::Up) => self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll.saturating_add(PAGE_STEP),
            _ => return,
        };
        self.scroll = next.min(max);
        tracing::debug!(scroll = self.scroll, max, "card: scrolled");
    }

    /// Back to the top. Called whenever a new result is shown.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ArticlePanel<'a> {
    result: &'a SelectionResult,
    state: &'a ArticlePanelState,
    raw_query: &'a str,
    focused: bool,
    show_ids: bool,
    show_tags: bool,
    theme: &'a Theme,
}

impl<'a> ArticlePanel<'a> {
    pub fn new(
        result: &'a SelectionResult,
        state: &'a ArticlePanelState,
        raw_query: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            result,
            state,
            raw_query,
            focused,
            show_ids: true,
            show_tags: true,
            theme,
        }
    }

    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    pub fn show_tags(mut self, show: bool) -> Self {
        self.show_tags = show;
        self
    }

    fn card_text(&self, article: &'a Article) -> Text<'a> {
        let q = normalize(self.raw_query);
        let hl = self.theme.search_highlight;
        let mut lines = Vec::new();

        let mut meta = Vec::new();
        if self.show_ids {
            meta.push(Span::styled(format!("[{}]", article.id), self.theme.card_id));
        }
        if self.show_tags {
            for tag in &article.tags {
                meta.push(Span::raw(" "));
                meta.push(Span::styled(format!("#{tag}"), self.theme.tag_style(tag)));
            }
        }
        if let Some(field) = article.match_field(&q).filter(|_| !q.is_empty()) {
            meta.push(Span::styled(
                format!("  matched: {field}"),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        if !meta.is_empty() {
            lines.push(Line::from(meta));
            lines.push(Line::default());
        }

        lines.push(Line::from(highlight(&article.title, &q, self.theme.card_title, hl)));
        lines.push(Line::from(highlight(&article.summary, &q, self.theme.card_summary, hl)));
        lines.push(Line::default());
        lines.extend(
            article
                .body
                .lines()
                .map(|l| Line::from(highlight(l, &q, self.theme.card_body, hl))),
        );

        Text::from(lines)
    }
}

impl Widget for ArticlePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title("Knowledge Search")
            .border_style(border_style);

        let inner = block.inner(area);

        let paragraph = match self.result {
            SelectionResult::NoQuery => {
                self.state.max_scroll.set(0);
                Paragraph::new(Line::styled(
                    "Start typing to search knowledge...",
                    self.theme.prompt_hint,
                ))
                .alignment(Alignment::Center)
            }
            SelectionResult::NoMatch => {
                self.state.max_scroll.set(0);
                Paragraph::new(Line::from(vec![
                    Span::styled("No matching articles found for: ", self.theme.prompt_no_match),
                    Span::styled(
                        self.raw_query,
                        self.theme.prompt_no_match.add_modifier(Modifier::BOLD),
                    ),
                ]))
                .wrap(Wrap { trim: false })
            }
            SelectionResult::Match(article) => {
                let paragraph = Paragraph::new(self.card_text(article)).wrap(Wrap { trim: false });
                // Counted before the block is attached, so borders are excluded.
                let rows = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
                self.state.max_scroll.set(rows.saturating_sub(inner.height));
                paragraph.scroll((self.state.scroll, 0))
            }
        };

        paragraph.block(block).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// Split `text` into spans, styling case-insensitive occurrences of the
/// normalised query `q` with `hl`.
///
/// Falls back to a single span when lowercasing changes byte lengths, since
/// match offsets in the folded text would not line up with `text`.
fn highlight<'t>(text: &'t str, q: &str, base: Style, hl: Style) -> Vec<Span<'t>> {
    if q.is_empty() {
        return vec![Span::styled(text, base)];
    }
    let folded = text.to_lowercase();
    if folded.len() != text.len() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    let mut last = 0;
    for (start, m) in folded.match_indices(q) {
        let end = start + m.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return vec![Span::styled(text, base)];
        }
        if start > last {
            spans.push(Span::styled(&text[last..start], base));
        }
        spans.push(Span::styled(&text[start..end], hl));
        last = end;
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::styled(&text[last..], base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
