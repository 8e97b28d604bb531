//! Import of listening-history JSON dumps into the `history` table.
//!
//! A dump is a JSON array of objects shaped like:
//!
//! ```json
//! { "endTime": "2019-03-15 14:22", "artistName": "X", "trackName": "Y", "msPlayed": 215000 }
//! ```

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const END_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One entry of a listening-history dump.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    pub end_time: String,
    pub artist_name: String,
    #[serde(default)]
    pub track_name: String,
    pub ms_played: i64,
}

impl StreamRecord {
    fn check(&self, idx: usize) -> AppResult<()> {
        NaiveDateTime::parse_from_str(&self.end_time, END_TIME_FORMAT).map_err(|_| {
            AppError::Import(format!(
                "entry {idx}: invalid endTime '{}' (expected YYYY-MM-DD HH:MM)",
                self.end_time
            ))
        })?;
        if self.ms_played < 0 {
            return Err(AppError::Import(format!(
                "entry {idx}: negative msPlayed ({})",
                self.ms_played
            )));
        }
        Ok(())
    }
}

/// Parse a JSON dump and validate its timestamps.
pub fn parse_records(json: &str) -> AppResult<Vec<StreamRecord>> {
    let records: Vec<StreamRecord> = serde_json::from_str(json)?;
    for (idx, rec) in records.iter().enumerate() {
        rec.check(idx)?;
    }
    Ok(records)
}

/// Read a JSON dump from disk.
pub fn read_file(path: &Path) -> AppResult<Vec<StreamRecord>> {
    let content = fs::read_to_string(path)?;
    parse_records(&content).map_err(|e| match e {
        AppError::Import(msg) => AppError::Import(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Insert all records inside a single transaction. Returns the inserted count.
pub fn insert_records(conn: &mut Connection, records: &[StreamRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO history (endTime, artistName, trackName, msPlayed)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for rec in records {
            stmt.execute(params![
                rec.end_time,
                rec.artist_name,
                rec.track_name,
                rec.ms_played
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}
