use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

use super::{open_app, print_json};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
    } = cmd
    {
        // Opening already runs the schema manager.
        let app = open_app(cfg)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            eprintln!("{}▶ Running migrations…{}", CYAN, RESET);
            let mut applied: Vec<&str> = app.applied_migrations().to_vec();
            applied.extend(app.ensure_schema()?);
            print_json(&applied)?;
            eprintln!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(app.conn(), &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            eprintln!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                app.conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                eprintln!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                eprintln!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
