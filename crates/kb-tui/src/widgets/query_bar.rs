//! Query bar: the bordered search input at the bottom of the screen.
//!
//! [`QueryBarState::handle`] reports whether the text changed so the app
//! shell knows when to re-resolve; cursor movement alone does not count.
//! Text wider than the bar scrolls sideways to keep the cursor in view.

use super::line_edit::{Edit, LineEdit};
use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Type to search...";
const COUNT_WIDTH: u16 = 14;

#[derive(Debug, Default)]
pub struct QueryBarState {
    input: LineEdit,
}

impl QueryBarState {
    /// The raw text as typed, untrimmed.
    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Returns `true` when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        let changed = self.input.apply(event) == Edit::Changed;
        if changed {
            tracing::debug!(query = %self.input.text(), "query edited");
        }
        changed
    }

    /// Returns `true` if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        self.input.clear()
    }
}

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    /// `None` while the query is blank.
    match_count: Option<usize>,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        state: &'a QueryBarState,
        focused: bool,
        match_count: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            focused,
            match_count,
            theme,
        }
    }

    /// Terminal cell for the text cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let text_area = Self::text_area(area);
        let col = self.state.input.cursor_col() - self.offset(text_area.width);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        (text_area.x.saturating_add(col), text_area.y)
    }

    /// The inner cells left of the match counter.
    fn text_area(area: Rect) -> Rect {
        let inner = Block::bordered().inner(area);
        let [text_area, _] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(COUNT_WIDTH)])
                .areas(inner);
        text_area
    }

    /// Characters hidden off the left edge so the cursor fits in `width`
    /// columns, with the last column kept free for it.
    fn offset(&self, width: u16) -> usize {
        self.state
            .input
            .cursor_col()
            .saturating_sub(usize::from(width.saturating_sub(1)))
    }
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 match".to_string()
    } else {
        format!("{n} matches")
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Search").border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, count_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(COUNT_WIDTH)])
                .areas(inner);
        let dim = Style::default().add_modifier(Modifier::DIM);

        let text = self.state.text();
        let line = if text.is_empty() {
            Line::styled(PLACEHOLDER, dim)
        } else {
            let start = text
                .char_indices()
                .nth(self.offset(text_area.width))
                .map_or(text.len(), |(i, _)| i);
            Line::raw(&text[start..])
        };
        Paragraph::new(line).render(text_area, buf);

        if let Some(n) = self.match_count {
            Paragraph::new(Line::from(count_label(n)).right_aligned())
                .style(dim)
                .render(count_area, buf);
        }
    }
}
