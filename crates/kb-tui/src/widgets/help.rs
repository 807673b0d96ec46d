//! Keybinding reference, drawn as a centred popup. Toggled with `?`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Clear, Row, Table, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("typing", "Search (query bar focused)"),
    ("Esc", "Leave the query bar"),
    ("/", "Focus the query bar"),
    ("Tab", "Toggle focus: query ↔ article"),
    ("r, Ctrl+r", "Draw another matching article"),
    ("↑ k, ↓ j", "Scroll the article one line"),
    ("PageUp, Ctrl+u", "Scroll the article up"),
    ("PageDown, Ctrl+d", "Scroll the article down"),
    (":stable [on|off]", "Keep the article while it matches"),
    (":reroll, :rr", "Draw another matching article"),
    (":theme <name>", "Switch theme (default, gruvbox)"),
    (":clear", "Empty the query"),
    (":reload", "Re-read the catalog file"),
    ("?", "Toggle this help"),
    ("q, Ctrl+c, :q", "Quit"),
];

const WIDTH: u16 = 64;
const KEY_COLUMN: u16 = 20;

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(BINDINGS.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered(area, WIDTH, height);
        Clear.render(popup, buf);

        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let rows = BINDINGS
            .iter()
            .map(|(key, action)| Row::new([Cell::from(*key).style(key_style), Cell::from(*action)]));
        let table = Table::new(rows, [Constraint::Length(KEY_COLUMN), Constraint::Fill(1)])
            .column_spacing(1)
            .block(
                Block::bordered()
                    .title(" keybindings (? to close) ")
                    .border_style(self.theme.border_focused),
            );
        Widget::render(table, popup, buf);
    }
}

/// A `width`×`height` rect centred in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
