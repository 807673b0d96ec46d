//! The 1-line strip at the top of the screen.
//!
//! Left: catalog size and the active selection policy, or the latest status
//! message. Right: keybinding hints.

use crate::theme::Theme;
use kb_core::SelectionPolicy;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINT: &str = " Esc:browse  r:reroll  ?:help  q:quit ";

pub struct Header<'a> {
    catalog_len: usize,
    policy: SelectionPolicy,
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(catalog_len: usize, policy: SelectionPolicy, theme: &'a Theme) -> Self {
        Self {
            catalog_len,
            policy,
            status: None,
            theme,
        }
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let left = match self.status {
            Some(msg) => Line::from(Span::styled(
                format!(" {msg} "),
                self.theme.border_command_bar.add_modifier(Modifier::ITALIC),
            )),
            None => Line::from(vec![
                Span::styled(
                    " kbfind ",
                    self.theme
                        .border_focused
                        .add_modifier(Modifier::REVERSED | Modifier::BOLD),
                ),
                Span::raw(format!(
                    " {} articles · {} ",
                    self.catalog_len, self.policy
                )),
            ]),
        };
        buf.set_line(area.x, area.y, &left, area.width);

        let hint_x = area.right().saturating_sub(HINT.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            HINT,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
