use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Gate an output file: missing files and `force` pass straight through,
/// an existing file needs a `y`/`yes` answer on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    confirm_overwrite(path, force, &mut io::stdin().lock())
}

/// Same gate as `ensure_writable`, reading the answer from `answers`.
pub fn confirm_overwrite<R: BufRead>(path: &Path, force: bool, answers: &mut R) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Overwriting {}", path.display()));
            Ok(())
        }
        _ => Err(AppError::from(io::Error::other(format!(
            "Cancelled: '{}' was left untouched",
            path.display()
        )))),
    }
}
