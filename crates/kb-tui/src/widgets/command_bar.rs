//! Command bar: a one-row `:` prompt drawn over the bottom of the screen.
//!
//! Opened with `:` from the article card. `Enter` parses the input as a
//! [`Command`]; a parse error stays on screen until the next key.

use super::line_edit::LineEdit;
use crate::commands::{Command, CommandError};
use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

/// What the app shell should do after the command bar handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandBarOutcome {
    Pending,
    Cancelled,
    Submitted(Command),
}

#[derive(Debug, Default)]
pub struct CommandBarState {
    input: LineEdit,
    error: Option<CommandError>,
}

impl CommandBarState {
    /// Blank input, no error. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    pub fn error(&self) -> Option<&CommandError> {
        self.error.as_ref()
    }

    pub fn handle(&mut self, event: &AppEvent) -> CommandBarOutcome {
        self.error = None;
        match event {
            AppEvent::Escape => {
                self.clear();
                CommandBarOutcome::Cancelled
            }
            AppEvent::Enter => match Command::parse(self.input.text()) {
                Ok(parsed) => {
                    self.clear();
                    parsed.map_or(CommandBarOutcome::Cancelled, CommandBarOutcome::Submitted)
                }
                Err(e) => {
                    tracing::debug!(input = %self.input.text(), error = %e, "command rejected");
                    self.error = Some(e);
                    CommandBarOutcome::Pending
                }
            },
            other => {
                self.input.apply(other);
                CommandBarOutcome::Pending
            }
        }
    }

    /// Terminal column of the cursor; column 0 holds the `:`.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = u16::try_from(self.input.cursor_col() + 1).unwrap_or(u16::MAX);
        area.x.saturating_add(col).min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Clear.render(area, buf);
        let line = match &self.state.error {
            Some(err) => Line::styled(
                format!("E  {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar),
                Span::raw(self.state.input.text()),
            ]),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
