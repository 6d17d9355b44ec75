use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::App;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::record;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing ThinkTimer…");
    info(format!("Database : {}", &cfg.database));

    let app = App::open(&cfg.database)?;

    record(
        &app,
        &cfg,
        "init",
        "database",
        &format!("Database initialized at {}", &cfg.database),
    );

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
