use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use ansi_term::Colour;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "import" => Colour::Green,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        print_entries(&entries);
    }

    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let op_w = entries
        .iter()
        .map(|e| e.operation.len())
        .max()
        .unwrap_or(4);

    for e in entries {
        // pad before painting: escape codes would break the width
        let op = format!("{:<op_w$}", e.operation);
        let target = if e.target.chars().count() > 60 {
            let mut s: String = e.target.chars().take(57).collect();
            s.push_str("...");
            s
        } else {
            e.target.clone()
        };

        println!(
            "{:>id_w$}: {} | {} {} => {}",
            e.id,
            e.date,
            color_for_operation(&e.operation).paint(op),
            target,
            e.message,
        );
    }
}
