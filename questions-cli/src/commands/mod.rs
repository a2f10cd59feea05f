pub(crate) mod init;
pub(crate) mod question;
pub(crate) mod rename;
pub(crate) mod reply;
pub(crate) mod seed;
pub(crate) mod stats;
pub(crate) mod user;

use std::path::Path;

use questions_db::Store;
use serde::Serialize;

use crate::CliError;

/// Open an existing database, pointing at `questions init` when it is missing.
pub(crate) fn open_store(db_path: &Path) -> Result<Store, CliError> {
    if !db_path.exists() {
        return Err(CliError::database(format!(
            "No database found at {} (run 'questions init' to create one)",
            db_path.display()
        )));
    }
    Store::open(db_path)
        .map_err(|e| CliError::database(format!("Failed to open {}: {}", db_path.display(), e)))
}

/// Write `value` to stdout as pretty-printed JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}
