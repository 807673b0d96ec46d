//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! The app shell is the presentation driver for the resolver: every event
//! that changes the query text triggers a full re-evaluation through the
//! [`Selector`], synchronously, before the next frame is drawn. The
//! displayed result therefore always belongs to the latest query.

use crate::{
    commands::Command,
    event::{self, AppEvent, Direction, KeyMode},
    theme::Theme,
    widgets::{
        article_card::{ArticlePanel, ArticlePanelState},
        command_bar::{CommandBar, CommandBarOutcome, CommandBarState},
        header::Header,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kb_core::{
    config::Config,
    normalizer::{is_blank, normalize},
    search::count_matching,
    Catalog, RandomSource, SelectionPolicy, SelectionResult, Selector,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};

// ---------------------------------------------------------------------------
// Focus + catalog source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing goes to the query bar.
    Query,
    /// Navigation keys scroll the article card.
    Article,
    /// Vim-style `:` command line is active.
    Command,
}

impl Focus {
    /// Text inputs take letters literally; the article card treats them as
    /// shortcuts.
    fn key_mode(self) -> KeyMode {
        match self {
            Focus::Query | Focus::Command => KeyMode::Insert,
            Focus::Article => KeyMode::Normal,
        }
    }
}

/// Where the catalog came from, so `:reload` knows what to re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Catalog, kb_core::CatalogError> {
        match self {
            CatalogSource::Builtin => Ok(Catalog::builtin()),
            CatalogSource::File(path) => Catalog::load(path),
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub source: CatalogSource,
    pub selector: Selector,
    rng: Box<dyn RandomSource>,
    pub query: QueryBarState,
    pub panel: ArticlePanelState,
    /// Result of the latest evaluation. Replaced wholesale, never patched.
    pub result: SelectionResult,
    /// Size of the matching subsequence, `None` while the query is blank.
    pub match_count: Option<usize>,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// One-shot message shown in the header until the next query edit.
    pub status: Option<String>,
    pub quit: bool,
}

impl AppState {
    /// Re-run the selector for the current query under the active policy.
    fn refresh(&mut self) {
        self.result = self
            .selector
            .select(self.catalog.articles(), self.query.text(), self.rng.as_mut());
        self.after_resolve();
    }

    /// Draw again from the current matches, ignoring stable selection.
    fn reroll(&mut self) {
        self.result = self
            .selector
            .reroll(self.catalog.articles(), self.query.text(), self.rng.as_mut());
        self.after_resolve();
    }

    fn after_resolve(&mut self) {
        let raw = self.query.text();
        self.match_count = if is_blank(raw) {
            None
        } else {
            Some(count_matching(self.catalog.articles(), &normalize(raw)))
        };
        self.panel.reset();
    }

    /// Execute a parsed [`Command`] against the application state.
    fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit = true,
            Command::Help => self.show_help = !self.show_help,
            Command::Theme(name) => match Theme::named(&name) {
                Some(theme) => self.theme = theme,
                None => {
                    self.status = Some(format!(
                        "unknown theme '{name}' (available: {})",
                        Theme::NAMES.join(", ")
                    ))
                }
            },
            Command::Reroll => self.reroll(),
            Command::Stable(on) => {
                let stable = on.unwrap_or(self.selector.policy() != SelectionPolicy::Stable);
                self.selector.set_policy(SelectionPolicy::from_stable(stable));
                self.status = Some(format!("selection policy: {}", self.selector.policy()));
            }
            Command::Clear => {
                if self.query.clear() {
                    self.refresh();
                }
            }
            Command::Reload => match self.source.load() {
                Ok(catalog) => {
                    tracing::debug!(articles = catalog.len(), "catalog reloaded");
                    self.catalog = catalog;
                    self.refresh();
                    self.status = Some(format!("reloaded {} articles", self.catalog.len()));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "catalog reload failed");
                    self.status = Some(format!("reload failed: {e}"));
                }
            },
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(
        catalog: Catalog,
        source: CatalogSource,
        config: Config,
        theme: Theme,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let selector = Selector::new(config.search.policy());
        let state = AppState {
            catalog,
            source,
            selector,
            rng,
            query: QueryBarState::default(),
            panel: ArticlePanelState::default(),
            result: SelectionResult::NoQuery,
            match_count: None,
            focus: Focus::Query,
            prev_focus: Focus::Query,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            quit: false,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if !ct_event::poll(Duration::from_millis(16))? {
                continue;
            }
            let raw = ct_event::read()?;
            if matches!(&raw, Event::Key(key) if key.kind != KeyEventKind::Press) {
                continue;
            }
            if let Some(ev) = event::translate(raw, self.state.focus.key_mode()) {
                tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                self.handle(ev);
            }
        }
        Ok(())
    }

    /// Apply one semantic event. Public so drivers and tests can feed events
    /// without a terminal.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match s.focus {
            Focus::Command => handle_command_bar(s, event),
            Focus::Query => handle_query(s, event),
            Focus::Article => handle_article(s, event),
        }
    }
}

fn handle_command_bar(s: &mut AppState, event: AppEvent) {
    // Control chords act the same as in the query bar.
    match event {
        AppEvent::Quit => {
            tracing::debug!("quit from command mode");
            s.quit = true;
            return;
        }
        AppEvent::Reroll => {
            s.focus = s.prev_focus;
            s.reroll();
            return;
        }
        _ => {}
    }
    match s.command_bar.handle(&event) {
        CommandBarOutcome::Pending => {}
        CommandBarOutcome::Cancelled => s.focus = s.prev_focus,
        CommandBarOutcome::Submitted(cmd) => {
            tracing::debug!(command = ?cmd, "executing command");
            s.focus = s.prev_focus;
            s.execute(cmd);
        }
    }
}

fn handle_query(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Quit => s.quit = true,
        AppEvent::Escape | AppEvent::FocusNext => {
            tracing::debug!("focus: Query -> Article");
            s.focus = Focus::Article;
        }
        AppEvent::Reroll => s.reroll(),
        AppEvent::ScrollUp
        | AppEvent::ScrollDown
        | AppEvent::Nav(Direction::Up)
        | AppEvent::Nav(Direction::Down) => s.panel.handle(&event),
        AppEvent::Resize(_, _) => {}
        other => {
            if s.query.handle(&other) {
                s.status = None;
                s.refresh();
            }
        }
    }
}

fn handle_article(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Quit => {
            tracing::debug!("quit");
            s.quit = true;
        }
        AppEvent::Char('?') => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }
        AppEvent::Char(':') => {
            tracing::debug!(prev_focus = ?s.focus, "entering command mode");
            s.prev_focus = s.focus;
            s.command_bar.clear();
            s.focus = Focus::Command;
        }
        AppEvent::QueryFocus | AppEvent::FocusNext => {
            tracing::debug!("focus: Article -> Query");
            s.focus = Focus::Query;
        }
        AppEvent::Reroll => s.reroll(),
        // Any other printable key starts typing.
        AppEvent::Char(_) => {
            s.focus = Focus::Query;
            handle_query(s, event);
        }
        AppEvent::ScrollUp | AppEvent::ScrollDown | AppEvent::Nav(_) => s.panel.handle(&event),
        // Terminal resize is handled automatically by ratatui
        AppEvent::Escape | AppEvent::Backspace | AppEvent::Enter | AppEvent::Resize(_, _) => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | article panel | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(
        Header::new(state.catalog.len(), state.selector.policy(), &state.theme)
            .status(state.status.as_deref()),
        vert[0],
    );
    frame.render_widget(
        ArticlePanel::new(
            &state.result,
            &state.panel,
            state.query.text(),
            state.focus == Focus::Article,
            &state.theme,
        )
        .show_ids(state.config.ui.show_ids)
        .show_tags(state.config.ui.show_tags),
        vert[1],
    );
    frame.render_widget(
        QueryBar::new(
            &state.query,
            state.focus == Focus::Query,
            state.match_count,
            &state.theme,
        ),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Query {
        let qb = QueryBar::new(&state.query, true, state.match_count, &state.theme);
        frame.set_cursor_position(qb.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
