//! Writers for CLI outputs: hours tables (text/CSV/JSON) and HTML files.

mod csv;
mod fs_utils;
mod json;

pub use self::csv::write_hours_csv;
pub use fs_utils::{confirm_overwrite, ensure_writable};
pub use json::write_hours_json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for file outputs.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written to {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}
