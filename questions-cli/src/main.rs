//! questions CLI
//!
//! Command-line interface for creating, seeding and browsing a questions
//! database.

mod cli_types;
mod commands;
mod error;
mod settings;
mod spinner;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, QuestionAction, ReplyAction, UserAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db_path = settings::resolve_db_path(cli.db)?;
    log::debug!("using database {}", db_path.display());
    let json = cli.json;

    match cli.command {
        Commands::Init => commands::init::run_init(&db_path),
        Commands::Seed(args) => {
            let output = commands::seed::SeedOutput {
                quiet: cli.quiet,
                verbose: cli.verbose,
                json,
            };
            commands::seed::run_seed(&db_path, &args, output)
        }
        Commands::Stats => commands::stats::run_stats(&db_path, json),
        Commands::User { action } => match action {
            UserAction::Show { id } => commands::user::run_user_show(&db_path, id, json),
            UserAction::Find { fname, lname } => {
                commands::user::run_user_find(&db_path, &fname, &lname, json)
            }
        },
        Commands::Question { action } => match action {
            QuestionAction::Show { id } => {
                commands::question::run_question_show(&db_path, id, json)
            }
            QuestionAction::Top { by, n } => {
                commands::question::run_question_top(&db_path, by, n, json)
            }
        },
        Commands::Reply { action } => match action {
            ReplyAction::Show { id } => commands::reply::run_reply_show(&db_path, id, json),
        },
        Commands::RenameAll { fname, lname } => {
            commands::rename::run_rename_all(&db_path, fname, lname)
        }
    }
}

/// Route `log` output to stdout: info as plain text, warnings and errors
/// prefixed, debug and trace tagged with their target.
fn init_logger(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(buf, "[{} {}] {}", level, record.target(), record.args()),
        })
        .init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
