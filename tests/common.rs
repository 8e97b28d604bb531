#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwr() -> Command {
    cargo_bin_cmd!("rwrapped")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rwrapped.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// In-memory database with the schema created by the migrations
pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    rwrapped::db::initialize::init_db(&conn).expect("init db");
    conn
}

/// Insert `(endTime, artistName, msPlayed)` rows into `history`
pub fn seed_history(conn: &Connection, rows: &[(&str, &str, i64)]) {
    for (end_time, artist, ms) in rows {
        conn.execute(
            "INSERT INTO history (endTime, artistName, trackName, msPlayed) VALUES (?1, ?2, 'track', ?3)",
            params![end_time, artist, ms],
        )
        .expect("insert history row");
    }
}

/// Write a small listening-history dump and return its path
pub fn write_dump(name: &str) -> String {
    let path = temp_out(name, "json");
    let json = r#"[
        {"endTime": "2019-03-15 12:00", "artistName": "X", "trackName": "A", "msPlayed": 1800000},
        {"endTime": "2019-03-20 18:30", "artistName": "X", "trackName": "B", "msPlayed": 1800000},
        {"endTime": "2019-07-01 09:00", "artistName": "Y", "trackName": "C", "msPlayed": 3600000},
        {"endTime": "2018-03-15 12:00", "artistName": "X", "trackName": "D", "msPlayed": 3600000}
    ]"#;
    fs::write(&path, json).expect("write dump");
    path
}
