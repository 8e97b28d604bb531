use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Columns the listening-hours queries rely on.
pub const REQUIRED_HISTORY_COLUMNS: [&str; 3] = ["endTime", "msPlayed", "artistName"];

/// Bring the schema up to date, then make sure `history` can be aggregated.
///
/// A hand-built `history` table missing one of the required columns is
/// reported as `AppError::Schema` instead of failing later inside a query.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    let mut stmt = conn.prepare("PRAGMA table_info('history')")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    let missing: Vec<&str> = REQUIRED_HISTORY_COLUMNS
        .iter()
        .copied()
        .filter(|col| !present.iter().any(|p| p == col))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Schema(format!(
            "history table lacks column(s): {}",
            missing.join(", ")
        )));
    }
    Ok(())
}
