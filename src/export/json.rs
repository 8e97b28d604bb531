use crate::errors::AppResult;
use crate::stats::HoursTable;
use std::io::Write;

/// Write an hours table as pretty-printed JSON.
pub fn write_hours_json<W: Write>(mut out: W, table: &HoursTable) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, table)?;
    writeln!(out)?;
    Ok(())
}
