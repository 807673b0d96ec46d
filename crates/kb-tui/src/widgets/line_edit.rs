//! Single-line text editing shared by the query bar and the command bar.

use crate::event::{AppEvent, Direction};

/// What a key did to a [`LineEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The text changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    /// Nothing happened.
    Ignored,
}

/// A text buffer with a cursor kept on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineEdit {
    text: String,
    /// Byte offset into `text`.
    cursor: usize,
}

impl LineEdit {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_col(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Apply an editing key: `Char`, `Backspace`, `Nav(Left|Right)`.
    /// Every other event is [`Edit::Ignored`].
    pub fn apply(&mut self, event: &AppEvent) -> Edit {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Edit::Changed
            }
            AppEvent::Backspace => match self.before_cursor() {
                Some(prev) => {
                    self.text.remove(prev);
                    self.cursor = prev;
                    Edit::Changed
                }
                None => Edit::Ignored,
            },
            AppEvent::Nav(Direction::Left) => match self.before_cursor() {
                Some(prev) => {
                    self.cursor = prev;
                    Edit::Moved
                }
                None => Edit::Ignored,
            },
            AppEvent::Nav(Direction::Right) => match self.text[self.cursor..].chars().next() {
                Some(c) => {
                    self.cursor += c.len_utf8();
                    Edit::Moved
                }
                None => Edit::Ignored,
            },
            _ => Edit::Ignored,
        }
    }

    /// Empty the buffer. Returns `true` if there was any text.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        had_text
    }

    fn before_cursor(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(text: &str) -> LineEdit {
        let mut e = LineEdit::default();
        for c in text.chars() {
            e.apply(&AppEvent::Char(c));
        }
        e
    }

    #[test]
    fn insert_in_the_middle() {
        let mut e = typed("rfund");
        for _ in 0..4 {
            assert_eq!(e.apply(&AppEvent::Nav(Direction::Left)), Edit::Moved);
        }
        assert_eq!(e.apply(&AppEvent::Char('e')), Edit::Changed);
        assert_eq!(e.text(), "refund");
        assert_eq!(e.cursor_col(), 2);
    }

    #[test]
    fn edges_are_ignored() {
        let mut e = LineEdit::default();
        assert_eq!(e.apply(&AppEvent::Backspace), Edit::Ignored);
        assert_eq!(e.apply(&AppEvent::Nav(Direction::Left)), Edit::Ignored);
        let mut e = typed("a");
        assert_eq!(e.apply(&AppEvent::Nav(Direction::Right)), Edit::Ignored);
        assert_eq!(e.apply(&AppEvent::Enter), Edit::Ignored);
    }

    #[test]
    fn multibyte_characters() {
        let mut e = typed("5–7");
        assert_eq!(e.cursor_col(), 3);
        e.apply(&AppEvent::Nav(Direction::Left));
        e.apply(&AppEvent::Backspace);
        assert_eq!(e.text(), "57");
        assert_eq!(e.cursor_col(), 1);
        e.apply(&AppEvent::Nav(Direction::Right));
        assert_eq!(e.cursor_col(), 2);
    }

    #[test]
    fn clear_reports_whether_text_existed() {
        let mut e = typed("x");
        assert!(e.clear());
        assert!(!e.clear());
        assert_eq!(e.cursor_col(), 0);
    }
}
