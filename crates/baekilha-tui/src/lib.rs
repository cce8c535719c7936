//! baekilha TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;

/// Load config, theme, and the bundled datasets, then start the TUI.
pub fn run() -> anyhow::Result<()> {
    use baekilha_data::DataSource;

    let config = baekilha_core::config::Config::load()
        .unwrap_or_else(|_| baekilha_core::config::Config::defaults());
    let theme = theme::Theme::load_default();
    let catalog = baekilha_data::SampleData.load()?;
    App::new(catalog, config, theme).run()
}
