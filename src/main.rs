use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use court_booking::config::AppConfig;
use court_booking::handlers::console::Console;
use court_booking::services::storage::sqlite::SqliteStorage;
use court_booking::services::store::Store;
use court_booking::state::AppState;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env();

    let storage = SqliteStorage::open(&config.database_url)?;
    tracing::info!("using storage at {}", config.database_url);

    let store = Store::open(Box::new(storage), config.storage_key.clone());
    let mut console = Console::new(AppState::new(store));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", console.screen())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        let today = chrono::Local::now().date_naive();
        match console.handle(&line, today) {
            Ok(screen) => writeln!(stdout, "\n{screen}")?,
            Err(e) if e.is_validation() => writeln!(stdout, "! {e}")?,
            Err(e) => {
                tracing::error!(error = %e, "action failed");
                writeln!(stdout, "! {e}")?;
            }
        }
        stdout.flush()?;
    }

    Ok(())
}
