use std::path::Path;

use questions_db::{Record, User, UserField};

use crate::CliError;

use super::open_store;

pub(crate) fn run_rename_all(
    db_path: &Path,
    fname: Option<String>,
    lname: Option<String>,
) -> Result<(), CliError> {
    let field = match (fname, lname) {
        (Some(f), None) => UserField::Fname(f),
        (None, Some(l)) => UserField::Lname(l),
        _ => return Err(CliError::other("pass exactly one of --fname or --lname")),
    };

    let store = open_store(db_path)?;
    let changed = User::change_all(&store, field)?;
    log::info!("Updated {} users", changed);
    Ok(())
}
