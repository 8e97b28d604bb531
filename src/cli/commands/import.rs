use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::import::{insert_records, read_file};
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { files } = cmd {
        // every dump is parsed before the first insert: a bad file aborts the whole import
        let mut per_file = Vec::with_capacity(files.len());
        let mut records = Vec::new();
        for file in files {
            let path = expand_tilde(file);
            let parsed = read_file(&path)?;
            per_file.push((path, parsed.len()));
            records.extend(parsed);
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let total = insert_records(&mut pool.conn, &records)?;

        for (path, count) in &per_file {
            success(format!("{}: imported {count} plays", path.display()));

            if let Err(e) = log::ttlog(
                &pool.conn,
                "import",
                &path.display().to_string(),
                &format!("Imported {count} plays"),
            ) {
                warning(format!("Failed to write internal log: {e}"));
            }
        }

        success(format!("Import completed: {total} plays"));
    }
    Ok(())
}
