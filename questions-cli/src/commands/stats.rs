use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_store, print_json};

pub(crate) fn run_stats(db_path: &Path, json: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let stats = questions_db::store_stats(&store)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    if json {
        return print_json(&stats);
    }

    log::info!(
        "{}",
        "Questions Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Users:          {:>8}", stats.users);
    log::info!("  Questions:      {:>8}", stats.questions);
    log::info!(
        "  Replies:        {:>8} ({} top-level)",
        stats.replies,
        stats.top_level_replies,
    );
    log::info!("  Follows:        {:>8}", stats.follows);
    log::info!("  Likes:          {:>8}", stats.likes);

    Ok(())
}
