//! Database path resolution.
//!
//! The settings file lives at `~/.config/questions/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/home/me/questions.db"
//! ```

use std::path::{Path, PathBuf};

use crate::CliError;

/// Environment variable overriding the settings file.
pub(crate) const DB_ENV_VAR: &str = "QUESTIONS_DB";

/// Used when nothing else names a database.
pub(crate) const DEFAULT_DB_FILE: &str = "questions.db";

/// Canonical path to the settings file: `~/.config/questions/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("questions").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$QUESTIONS_DB`
/// 3. `database.path` in `settings.toml`
/// 4. `questions.db` in the current directory
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(p) = cli_override {
        return Ok(p);
    }
    if let Some(p) = std::env::var_os(DB_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    if let Some(p) = load_db_path(&settings_path())? {
        return Ok(p);
    }
    Ok(PathBuf::from(DEFAULT_DB_FILE))
}

/// Read `database.path` from the settings file. A missing file is not an error.
fn load_db_path(settings: &Path) -> Result<Option<PathBuf>, CliError> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    parse_db_path(&contents)
        .map_err(|e| CliError::config(format!("{}: {e}", settings.display())))
}

fn parse_db_path(contents: &str) -> Result<Option<PathBuf>, toml::de::Error> {
    let doc: toml::Value = contents.parse()?;
    let path = doc
        .get("database")
        .and_then(|db| db.get("path"))
        .and_then(|p| p.as_str())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_path() {
        let path = parse_db_path("[database]\npath = \"/tmp/q.db\"\n").unwrap();
        assert_eq!(path, Some(PathBuf::from("/tmp/q.db")));
    }

    #[test]
    fn ignores_missing_or_empty_path() {
        assert_eq!(parse_db_path("").unwrap(), None);
        assert_eq!(parse_db_path("[database]\n").unwrap(), None);
        assert_eq!(parse_db_path("[database]\npath = \"\"\n").unwrap(), None);
        assert_eq!(parse_db_path("[other]\npath = \"x\"\n").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_db_path("[database\npath = ").is_err());
    }

    #[test]
    fn missing_settings_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = load_db_path(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(path, None);
    }

    #[test]
    fn malformed_settings_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.toml");
        std::fs::write(&settings, "[database\n").unwrap();
        assert!(matches!(load_db_path(&settings), Err(CliError::Config(_))));
    }

    #[test]
    fn unreadable_settings_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text
        let settings = dir.path().join("settings.toml");
        std::fs::create_dir(&settings).unwrap();
        assert!(matches!(load_db_path(&settings), Err(CliError::Io(_))));
    }

    #[test]
    fn cli_override_wins() {
        let path = resolve_db_path(Some(PathBuf::from("explicit.db"))).unwrap();
        assert_eq!(path, PathBuf::from("explicit.db"));
    }
}
