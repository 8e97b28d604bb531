use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info: show_info, check } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *show_info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            info("Running integrity check…");
            let verdict = stats::integrity_check(&pool)?;
            if verdict == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {verdict}"));
            }
        }
    }

    Ok(())
}
