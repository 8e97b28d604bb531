//! Owned query results.
//!
//! `fetch_all` runs a statement once and copies every row into a
//! `QueryResult`, so nothing downstream depends on a live statement.

use crate::errors::{AppError, AppResult};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params};
use std::fmt;

/// A single scalar value read from SQLite.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    fn from_value_ref(value: ValueRef<'_>, column: &str) -> AppResult<Self> {
        Ok(match value {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(i) => Cell::Integer(i),
            ValueRef::Real(f) => Cell::Real(f),
            ValueRef::Text(bytes) => {
                let s = std::str::from_utf8(bytes).map_err(|e| AppError::TypeConversion {
                    column: column.to_string(),
                    reason: e.to_string(),
                })?;
                Cell::Text(s.to_string())
            }
            ValueRef::Blob(bytes) => Cell::Blob(bytes.to_vec()),
        })
    }
}

/// Reals always keep a decimal part (`1.0`, not `1`).
fn format_real(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str("None"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Real(v) => f.write_str(&format_real(*v)),
            Cell::Text(s) => f.write_str(s),
            Cell::Blob(bytes) => {
                f.write_str("b'")?;
                for b in bytes {
                    write!(f, "\\x{b:02x}")?;
                }
                f.write_str("'")
            }
        }
    }
}

pub type ResultRow = Vec<Cell>;

/// Column names plus every fetched row, in fetch order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<ResultRow>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<ResultRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows, or all of them when fewer are available.
    pub fn head(&self, n: usize) -> &[ResultRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Execute `sql` with positional `params` and read all rows.
///
/// Fails with `AppError::NoResultSet` when the statement returns no columns
/// (INSERT, UPDATE, DDL...).
pub fn fetch_all<P: Params>(conn: &Connection, sql: &str, params: P) -> AppResult<QueryResult> {
    let mut stmt = conn.prepare(sql)?;

    if stmt.column_count() == 0 {
        return Err(AppError::NoResultSet(sql.trim().to_string()));
    }

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            cells.push(Cell::from_value_ref(row.get_ref(i)?, name)?);
        }
        out.push(cells);
    }

    Ok(QueryResult::new(columns, out))
}
