use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Run `step` once, recording `version` in the log table afterwards.
fn apply<F>(conn: &Connection, version: &str, message: &str, step: F) -> Result<()>
where
    F: FnOnce(&Connection) -> Result<()>,
{
    if is_applied(conn, version)? {
        return Ok(());
    }

    step(conn)?;
    mark_applied(conn, version, message)?;

    success(format!("Migration applied: {version} → {message}"));
    Ok(())
}

fn create_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS history (
            endTime     TEXT NOT NULL,
            artistName  TEXT NOT NULL,
            trackName   TEXT NOT NULL DEFAULT '',
            msPlayed    INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
}

/// History tables built by hand may lack `trackName`.
fn add_track_name(conn: &Connection) -> Result<()> {
    if has_column(conn, "history", "trackName")? {
        return Ok(());
    }
    conn.execute(
        "ALTER TABLE history ADD COLUMN trackName TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    Ok(())
}

fn create_history_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_history_artist_time ON history(artistName, endTime);",
    )
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let had_history = table_exists(conn, "history")?;

    apply(
        conn,
        "20190101_0001_create_history",
        "created history table",
        create_history_table,
    )?;

    if had_history {
        apply(
            conn,
            "20190101_0002_history_track_name",
            "added 'trackName' to history table",
            add_track_name,
        )?;
    }

    apply(
        conn,
        "20190101_0003_history_artist_index",
        "created index on history(artistName, endTime)",
        create_history_index,
    )?;

    Ok(())
}
