//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    view::{Dataset, PageView},
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::DetailPopup,
        help::HelpPopup,
        record_table::{RecordTable, RecordTableState},
        search_bar::{SearchBar, SearchBarState},
        tab_bar::TabBar,
    },
};
use baekilha_core::{config::Config, QueryState, FILTER_ALL};
use baekilha_data::Catalog;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    SearchBar,
    /// Vim-style `:` command line is active.
    Command,
}

/// One dataset tab: the records plus the query state narrowing them.
pub struct TabState {
    pub dataset: Dataset,
    pub query: QueryState,
    pub search: SearchBarState,
    pub table: RecordTableState,
}

impl TabState {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            query: QueryState::default(),
            search: SearchBarState::default(),
            table: RecordTableState::default(),
        }
    }

    /// True when a search term or a non-`all` filter is narrowing the list.
    pub fn is_narrowed(&self) -> bool {
        !self.query.search_term.is_empty() || self.query.active_filter != FILTER_ALL
    }

    fn page(&self, config: &Config) -> PageView {
        self.dataset.page(&self.query, &config.ui)
    }

    /// Advance to the next filter value in the dataset's cycle, wrapping back
    /// to `all` after the last one. Resets to page 1 like any filter change.
    fn cycle_filter(&mut self) {
        let values = self.dataset.filter_values();
        if values.len() < 2 {
            return;
        }
        let idx = values
            .iter()
            .position(|v| *v == self.query.active_filter)
            .unwrap_or(0);
        let next = values[(idx + 1) % values.len()].clone();
        tracing::debug!(filter = %next, "filter cycled");
        self.query.filter_selected(next);
        self.table.cursor = 0;
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub tabs: Vec<TabState>,
    pub active_tab: usize,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Field pairs of the record whose detail popup is open, if any.
    pub detail: Option<Vec<(String, String)>>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, theme: Theme) -> Self {
        let tabs = vec![
            TabState::new(Dataset::Bills(catalog.bills)),
            TabState::new(Dataset::Members(catalog.members)),
            TabState::new(Dataset::Announcements(catalog.announcements)),
        ];

        let state = AppState {
            tabs,
            active_tab: 0,
            focus: Focus::Table,
            prev_focus: Focus::Table,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            detail: None,
            quit: false,
        };

        App { state }
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

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key)
                        if key.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Detail popup intercepts all events; only close keys pass through.
        if s.detail.is_some() {
            match event {
                AppEvent::Enter | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("detail popup closed");
                    s.detail = None;
                }
                _ => {}
            }
            return;
        }

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

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if s.focus != Focus::SearchBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if s.focus != Focus::SearchBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // Direct tab switching with 1/2/3
            AppEvent::Char(c @ '1'..='3') if s.focus != Focus::SearchBar => {
                let idx = c as usize - '1' as usize;
                if idx < s.tabs.len() {
                    tracing::debug!(tab = idx, "tab switched");
                    s.active_tab = idx;
                }
            }

            // Cycle the active filter
            AppEvent::Char('f') if s.focus != Focus::SearchBar => {
                s.tabs[s.active_tab].cycle_filter();
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the search bar without submitting
            AppEvent::Escape => {
                if s.focus == Focus::SearchBar {
                    tracing::debug!("focus: SearchBar -> Table");
                    s.focus = Focus::Table;
                }
            }

            // Tab-cycle focus: Table → SearchBar → Table
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Table => Focus::SearchBar,
                    Focus::SearchBar | Focus::Command => Focus::Table,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to the search bar
            AppEvent::SearchFocus => {
                tracing::debug!("focus -> SearchBar");
                s.focus = Focus::SearchBar;
            }

            // Page turning works regardless of focus
            AppEvent::PageNext | AppEvent::PagePrev | AppEvent::FirstPage => {
                turn_page(s, &event);
            }

            // Submit a search, or open the detail popup for the cursor row
            AppEvent::Enter => match s.focus {
                Focus::SearchBar => {
                    let tab = &mut s.tabs[s.active_tab];
                    let term = tab.search.input.clone();
                    tracing::debug!(term = %term, "search submitted");
                    tab.query.search_submitted(term);
                    tab.table.cursor = 0;
                    s.focus = Focus::Table;
                }
                Focus::Table => {
                    let tab = &s.tabs[s.active_tab];
                    let view = tab.page(&s.config);
                    if let Some(row) = view.rows.get(tab.table.cursor) {
                        tracing::debug!("detail popup opened");
                        s.detail = Some(row.detail.clone());
                    }
                }
                Focus::Command => {}
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::SearchBar | Focus::Command)
}

/// Apply a page-turn event to the active tab. The new page is computed from
/// the engine's own clamped page numbers, so overshooting either end is
/// harmless.
fn turn_page(s: &mut AppState, event: &AppEvent) {
    let config = &s.config;
    let tab = &mut s.tabs[s.active_tab];
    let view = tab.dataset.page(&tab.query, &config.ui);

    let target = match event {
        AppEvent::PageNext => view.current_page + 1,
        AppEvent::PagePrev => view.current_page.saturating_sub(1),
        AppEvent::FirstPage => 1,
        _ => return,
    };
    if target == view.current_page || target == 0 || target > view.total_pages {
        return;
    }
    tracing::debug!(from = view.current_page, to = target, "page turn");
    tab.query.page_selected(target);
    tab.table.cursor = 0;
}

/// Execute a parsed [`Command`] against the application state.
fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = match name.to_ascii_lowercase().as_str() {
                "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                _ => Theme::load_default(),
            };
        }
        Command::Dates => {
            s.config.ui.show_dates = !s.config.ui.show_dates;
        }
        Command::Filter(value) => {
            let tab = &mut s.tabs[s.active_tab];
            tab.query.filter_selected(value);
            tab.table.cursor = 0;
        }
        Command::Page(n) => {
            // paginate() clamps, so any number is safe here
            let tab = &mut s.tabs[s.active_tab];
            tab.query.page_selected(n);
            tab.table.cursor = 0;
        }
        Command::Tab(name) => {
            if let Some(idx) = s
                .tabs
                .iter()
                .position(|t| t.dataset.label() == name.to_ascii_lowercase())
            {
                s.active_tab = idx;
            } else {
                s.command_bar.error = Some(format!("no such tab: {name}"));
            }
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    let config = &s.config;
    let tab = &mut s.tabs[s.active_tab];
    match s.focus {
        Focus::Table => {
            let row_count = tab.dataset.page(&tab.query, &config.ui).rows.len();
            tab.table.handle(&event, row_count);
        }
        Focus::SearchBar => tab.search.handle(&event),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | table | 3-line search bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let tab = &state.tabs[state.active_tab];
    let view = tab.page(&state.config);

    frame.render_widget(TabBar::new(&state.tabs, state.active_tab, &state.theme), vert[0]);
    frame.render_widget(
        RecordTable::new(&view, &tab.table, state.focus == Focus::Table, &state.theme),
        vert[1],
    );
    frame.render_widget(
        SearchBar::new(
            &tab.search,
            &tab.query.active_filter,
            state.focus == Focus::SearchBar,
            &state.theme,
        ),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if let Some(ref fields) = state.detail {
        frame.render_widget(DetailPopup::new(fields, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip search-bar cursor below
    }

    // Position the terminal cursor when the search bar is focused
    if state.focus == Focus::SearchBar {
        let sb = SearchBar::new(&tab.search, &tab.query.active_filter, true, &state.theme);
        let (cx, cy) = sb.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
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
