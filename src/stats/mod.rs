//! Listening-time aggregation over the `history` table.

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: f64 = 3_600_000.0;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Calendar bucket used to group plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// 12 buckets, labelled 1..=12
    #[default]
    Month,
    /// 7 buckets, labelled 0..=6 (Sunday = 0)
    Weekday,
    /// 24 buckets, labelled 0..=23
    Hour,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Weekday => "weekday",
            Granularity::Hour => "hour",
        }
    }

    pub fn slots(&self) -> usize {
        match self {
            Granularity::Month => 12,
            Granularity::Weekday => 7,
            Granularity::Hour => 24,
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            Granularity::Month => "%m",
            Granularity::Weekday => "%w",
            Granularity::Hour => "%H",
        }
    }

    fn first_label(&self) -> u32 {
        match self {
            Granularity::Month => 1,
            Granularity::Weekday | Granularity::Hour => 0,
        }
    }

    pub fn labels(&self) -> Vec<u32> {
        let first = self.first_label();
        (first..first + self.slots() as u32).collect()
    }

    /// Slot index for a bucket value returned by SQLite.
    fn slot(&self, bucket: i64) -> Option<usize> {
        let idx = bucket - i64::from(self.first_label());
        (0..self.slots() as i64).contains(&idx).then_some(idx as usize)
    }

    /// Human readable name of a label (`Mar`, `Sun`, `07`).
    pub fn label_name(&self, label: u32) -> String {
        match self {
            Granularity::Month => MONTH_NAMES
                .get(label.wrapping_sub(1) as usize)
                .map(|s| s.to_string())
                .unwrap_or_else(|| label.to_string()),
            Granularity::Weekday => WEEKDAY_NAMES
                .get(label as usize)
                .map(|s| s.to_string())
                .unwrap_or_else(|| label.to_string()),
            Granularity::Hour => format!("{label:02}"),
        }
    }
}

/// Filter and grouping of an hours query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursQuery {
    pub year: i32,
    pub granularity: Granularity,
}

impl HoursQuery {
    pub fn new(year: i32, granularity: Granularity) -> AppResult<Self> {
        if !(0..=9999).contains(&year) {
            return Err(AppError::InvalidYear(year.to_string()));
        }
        Ok(Self { year, granularity })
    }

    pub fn monthly(year: i32) -> AppResult<Self> {
        Self::new(year, Granularity::Month)
    }
}

/// Hours played per bucket; `labels` and `hours` are aligned by position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursTable {
    pub artist: String,
    pub year: i32,
    pub granularity: Granularity,
    pub labels: Vec<u32>,
    pub hours: Vec<f64>,
}

impl HoursTable {
    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }

    /// `(label, name, hours)` triples in bucket order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, String, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.hours)
            .map(|(l, h)| (*l, self.granularity.label_name(*l), *h))
    }
}

/// Months `1..=12` and the hours played in each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyHours {
    pub months: [u32; 12],
    pub hours: [f64; 12],
}

pub const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Sum `msPlayed` for `artist` in `query.year`, grouped by `query.granularity`.
///
/// Buckets without plays stay at 0.0. An unknown artist yields all zeros.
pub fn hours_by(conn: &Connection, artist: &str, query: &HoursQuery) -> AppResult<HoursTable> {
    let sql = format!(
        "SELECT CAST(STRFTIME('{}', endTime) AS INTEGER) AS bucket,
                SUM(msPlayed) / {MS_PER_HOUR:.1}
         FROM history
         WHERE artistName = ?1
           AND STRFTIME('%Y', endTime) = ?2
         GROUP BY bucket
         ORDER BY bucket",
        query.granularity.strftime()
    );

    let mut stmt = conn.prepare(&sql)?;
    let year = format!("{:04}", query.year);

    let rows = stmt.query_map(params![artist, year], |row| {
        Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, Option<f64>>(1)?))
    })?;

    let mut hours = vec![0.0; query.granularity.slots()];
    for r in rows {
        let (bucket, value) = r?;
        if let Some(slot) = bucket.and_then(|b| query.granularity.slot(b)) {
            hours[slot] = value.unwrap_or(0.0);
        }
    }

    Ok(HoursTable {
        artist: artist.to_string(),
        year: query.year,
        granularity: query.granularity,
        labels: query.granularity.labels(),
        hours,
    })
}

/// Hours played by `artist` in each calendar month of `year`.
pub fn monthly_hours(conn: &Connection, artist: &str, year: i32) -> AppResult<MonthlyHours> {
    let table = hours_by(conn, artist, &HoursQuery::monthly(year)?)?;

    let mut hours = [0.0; 12];
    hours.copy_from_slice(&table.hours);

    Ok(MonthlyHours {
        months: MONTHS,
        hours,
    })
}
