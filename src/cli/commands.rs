//! One-shot command handlers.

use anyhow::Result;

use namecast::app::App;
use namecast::client::{Gender, GenderizeClient};
use namecast::config::Config;
use namecast::store::{FileNameStore, SavedName};
use namecast::view::TerminalView;

pub(crate) type CliApp = App<GenderizeClient, FileNameStore, TerminalView>;

/// Wire the production parts together for one invocation.
pub(crate) fn build_app(config: &Config) -> CliApp {
    App::new(
        GenderizeClient::with_base_url(config.api_base.as_str()),
        FileNameStore::open(config.store_file()),
        TerminalView::new(),
        config.notice_timeout(),
    )
}

/// Submit a name for prediction.
pub(crate) async fn cmd_lookup(config: &Config, name: &str) -> Result<()> {
    let mut app = build_app(config);
    app.submit(name).await;
    Ok(())
}

/// Save a confirmed gender for a name.
pub(crate) async fn cmd_save(config: &Config, name: &str, gender: Gender) -> Result<()> {
    let mut app = build_app(config);
    app.save(name, gender);
    Ok(())
}

/// Remove the saved answer for a name.
pub(crate) async fn cmd_clear(config: &Config, name: &str) -> Result<()> {
    let mut app = build_app(config);
    app.clear(name);
    Ok(())
}

/// Show one saved answer, or list every saved entry.
pub(crate) async fn cmd_saved(config: &Config, name: Option<&str>) -> Result<()> {
    let mut app = build_app(config);
    match name {
        Some(name) => app.show_saved(name),
        None => print_entries(&app.saved_entries()),
    }
    Ok(())
}

/// Render the saved-answer listing.
pub(crate) fn print_entries(entries: &[SavedName]) {
    if entries.is_empty() {
        println!("No saved answers.");
        return;
    }
    println!("{} saved answer(s):", entries.len());
    for entry in entries {
        println!(
            "- {} | {} | saved {}",
            entry.name,
            entry.gender,
            entry.saved_at.format("%Y-%m-%d %H:%M")
        );
    }
}
