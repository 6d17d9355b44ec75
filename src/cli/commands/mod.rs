pub mod block;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod open;
pub mod project;
pub mod settings;

use crate::config::Config;
use crate::core::App;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::Serialize;

/// Open the configured database; the schema is ensured on open.
pub(crate) fn open_app(cfg: &Config) -> AppResult<App> {
    App::open(&cfg.database)
}

/// Print a response as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Append an audit row when enabled. Failures are reported, never fatal.
pub(crate) fn record(app: &App, cfg: &Config, operation: &str, target: &str, message: &str) {
    if !cfg.log_operations {
        return;
    }
    if let Err(e) = ttlog(app.conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
