use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ensure_writable, notify_export_success};
use crate::query::fetch_all;
use crate::render::{render_html, render_text};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        sql,
        rows,
        html,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let result = fetch_all(&pool.conn, sql, [])?;
        let n_rows = rows.unwrap_or(cfg.default_rows);

        match html {
            Some(file) => {
                let path = expand_tilde(file);
                ensure_writable(&path, *force)?;
                let table = render_html(&result, n_rows);
                fs::write(&path, table.as_str())?;
                notify_export_success(&format!("HTML table ({} rows)", table.row_count()), &path);
            }
            None => {
                print!("{}", render_text(&result, n_rows));
                println!(
                    "({} of {} rows)",
                    n_rows.min(result.len()),
                    result.len()
                );
            }
        }
    }
    Ok(())
}
