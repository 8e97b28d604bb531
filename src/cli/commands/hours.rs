use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{
    OutputFormat, ensure_writable, notify_export_success, write_hours_csv, write_hours_json,
};
use crate::stats::{HoursQuery, HoursTable, hours_by};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use std::fs::File;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        artist,
        year,
        by,
        format,
        file,
        force,
    } = cmd
    {
        let query = HoursQuery::new(
            year.unwrap_or(cfg.year),
            by.unwrap_or(cfg.granularity),
        )?;

        let pool = DbPool::new(&cfg.database)?;
        let table = hours_by(&pool.conn, artist, &query)?;

        match file {
            Some(f) => {
                let path = expand_tilde(f);
                ensure_writable(&path, *force)?;
                write_output(File::create(&path)?, &table, *format)?;
                notify_export_success(&format!("Hours {}", format.as_str()), &path);
            }
            None => write_output(io::stdout().lock(), &table, *format)?,
        }
    }
    Ok(())
}

fn write_output<W: Write>(out: W, table: &HoursTable, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Csv => write_hours_csv(out, table),
        OutputFormat::Json => write_hours_json(out, table),
        OutputFormat::Table => write_text(out, table),
    }
}

fn write_text<W: Write>(mut out: W, table: &HoursTable) -> AppResult<()> {
    writeln!(
        out,
        "{} - {} (by {})\n",
        table.artist,
        table.year,
        table.granularity.as_str()
    )?;

    let headers = vec![
        table.granularity.as_str().to_string(),
        "name".to_string(),
        "hours".to_string(),
    ];
    let mut text = Table::new(&headers);
    for (label, name, hours) in table.entries() {
        text.add_row(vec![label.to_string(), name, format!("{hours:.2}")]);
    }

    write!(out, "{}", text.render())?;
    writeln!(out, "\nTotal: {:.2} h", table.total())?;
    Ok(())
}
