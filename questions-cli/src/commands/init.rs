use std::path::Path;

use questions_db::Store;

use crate::CliError;

pub(crate) fn run_init(db_path: &Path) -> Result<(), CliError> {
    Store::create(db_path).map_err(|e| {
        CliError::database(format!("Failed to create schema in {}: {}", db_path.display(), e))
    })?;
    log::info!("Database ready at {}", db_path.display());
    Ok(())
}
