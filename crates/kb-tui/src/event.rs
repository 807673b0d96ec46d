//! Key translation: crossterm events in, [`AppEvent`]s out.
//!
//! Widgets and the app shell only ever see [`AppEvent`]. Which keys mean what
//! depends on [`KeyMode`]: while a text input has focus, letters must reach it
//! as characters, so only control chords and the non-printing keys keep a
//! special meaning.
//!
//! | Key(s)               | Normal           | Insert        |
//! |----------------------|------------------|---------------|
//! | `Ctrl+c`             | `Quit`           | `Quit`        |
//! | `q`                  | `Quit`           | `Char('q')`   |
//! | `Ctrl+r`             | `Reroll`         | `Reroll`      |
//! | `r`                  | `Reroll`         | `Char('r')`   |
//! | `/`                  | `QueryFocus`     | `Char('/')`   |
//! | `Tab`                | `FocusNext`      | `FocusNext`   |
//! | `PageUp` / `Ctrl+u`  | `ScrollUp`       | `ScrollUp` (PageUp only) |
//! | `PageDown` / `Ctrl+d`| `ScrollDown`     | `ScrollDown` (PageDown only) |
//! | arrows               | `Nav`            | `Nav`         |
//! | `hjkl`               | `Nav`            | `Char`        |
//! | `Esc` / `Enter` / `Backspace` | same-named event | same-named event |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Toggle focus between the query bar and the article card.
    FocusNext,
    QueryFocus,
    /// Draw a different article from the current matches.
    Reroll,
    ScrollUp,
    ScrollDown,
    Nav(Direction),
    Char(char),
    Backspace,
    Enter,
    Resize(u16, u16),
    Escape,
}

/// How letter keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Letters are shortcuts (`q`, `r`, `hjkl`, `/`).
    Normal,
    /// A text input is focused; letters are typed.
    Insert,
}

/// Translate a raw crossterm event. `None` means the event is ignored
/// (mouse, focus changes, unbound keys).
pub fn translate(event: Event, mode: KeyMode) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => translate_key(key, mode),
        _ => None,
    }
}

fn translate_key(key: KeyEvent, mode: KeyMode) -> Option<AppEvent> {
    let ctrl = key.modifiers == KeyModifiers::CONTROL;
    let plain = key.modifiers == KeyModifiers::NONE;
    let typed = plain || key.modifiers == KeyModifiers::SHIFT;
    let normal = mode == KeyMode::Normal;

    let event = match key.code {
        KeyCode::Char('c') if ctrl => AppEvent::Quit,
        KeyCode::Char('r') if ctrl => AppEvent::Reroll,
        KeyCode::Char('u') if ctrl && normal => AppEvent::ScrollUp,
        KeyCode::Char('d') if ctrl && normal => AppEvent::ScrollDown,

        KeyCode::Char(c) if plain && normal => match c {
            'q' => AppEvent::Quit,
            'r' => AppEvent::Reroll,
            '/' => AppEvent::QueryFocus,
            'k' => AppEvent::Nav(Direction::Up),
            'j' => AppEvent::Nav(Direction::Down),
            'h' => AppEvent::Nav(Direction::Left),
            'l' => AppEvent::Nav(Direction::Right),
            c => AppEvent::Char(c),
        },
        // Shift included so `?` and `:` arrive as characters.
        KeyCode::Char(c) if typed => AppEvent::Char(c),

        KeyCode::Up => AppEvent::Nav(Direction::Up),
        KeyCode::Down => AppEvent::Nav(Direction::Down),
        KeyCode::Left => AppEvent::Nav(Direction::Left),
        KeyCode::Right => AppEvent::Nav(Direction::Right),
        KeyCode::PageUp => AppEvent::ScrollUp,
        KeyCode::PageDown => AppEvent::ScrollDown,

        KeyCode::Tab if plain => AppEvent::FocusNext,
        KeyCode::Backspace if plain => AppEvent::Backspace,
        KeyCode::Enter if plain => AppEvent::Enter,
        KeyCode::Esc => AppEvent::Escape,

        _ => return None,
    };
    Some(event)
}
