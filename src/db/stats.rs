use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use ansi_term::Colour::{Cyan, Green, Yellow};
use std::fs;

/// Summary of the `history` table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub rows: i64,
    pub artists: i64,
    pub first: Option<String>,
    pub last: Option<String>,
    pub total_hours: f64,
}

pub fn history_stats(pool: &DbPool) -> AppResult<HistoryStats> {
    let (rows, artists, total_hours): (i64, i64, f64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT artistName), IFNULL(SUM(msPlayed), 0) / 3600000.0
         FROM history",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(endTime) FROM history", [], |row| row.get(0))?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(endTime) FROM history", [], |row| row.get(0))?;

    Ok(HistoryStats {
        rows,
        artists,
        first,
        last,
        total_hours,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    header("Database info");

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.2} MB", Cyan.paint("• Size:"), file_mb);

    let stats = history_stats(pool)?;

    println!(
        "{} {}",
        Cyan.paint("• Plays:"),
        Green.paint(stats.rows.to_string())
    );
    println!(
        "{} {}",
        Cyan.paint("• Artists:"),
        Green.paint(stats.artists.to_string())
    );
    println!("{}", Cyan.paint("• Date range:"));
    println!("    from: {}", stats.first.as_deref().unwrap_or("--"));
    println!("    to:   {}", stats.last.as_deref().unwrap_or("--"));
    println!(
        "{} {:.2} h",
        Cyan.paint("• Total listening:"),
        stats.total_hours
    );

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check` and return its verdict.
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(verdict)
}
