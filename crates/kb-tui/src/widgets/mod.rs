//! Ratatui widgets for the kbfind TUI.

pub mod article_card;
pub mod command_bar;
pub mod header;
pub mod help;
pub mod line_edit;
pub mod query_bar;
