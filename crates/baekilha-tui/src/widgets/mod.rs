//! Ratatui widgets for the baekilha TUI.

pub mod command_bar;
pub mod detail;
pub mod help;
pub mod record_table;
pub mod search_bar;
pub mod tab_bar;
