use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use leaguedex::app::App;
use leaguedex::cache::CacheStore;
use leaguedex::config::Config;
use leaguedex::logging;
use leaguedex::sportsdb::SportsDbClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    let _log_guard = logging::init_tracing(&config.log_dir())?;
    info!(api_base = %config.api_base, cache_dir = ?config.cache_dir, "leaguedex starting");

    let client = SportsDbClient::from_config(&config)?;
    let cache = CacheStore::from_config(&config);
    let mut app = App::new(client, cache);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    info!("leaguedex shutting down");
    Ok(result?)
}
