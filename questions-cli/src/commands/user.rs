use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use questions_db::{Question, Record, User};
use serde::Serialize;

use crate::CliError;

use super::{open_store, print_json, truncate_str};

#[derive(Serialize)]
struct UserReport {
    user: User,
    questions: Vec<Question>,
    replies: usize,
    followed: usize,
    liked: usize,
    average_karma: f64,
}

pub(crate) fn run_user_show(db_path: &Path, id: i64, json: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let user = User::find_by_id(&store, id)?;

    let report = UserReport {
        questions: user.authored_questions(&store)?,
        replies: user.authored_replies(&store)?.len(),
        followed: user.followed_questions(&store)?.len(),
        liked: user.liked_questions(&store)?.len(),
        average_karma: user.average_karma(&store)?,
        user,
    };

    if json {
        return print_json(&report);
    }

    log::info!(
        "{} {}",
        report.user.full_name().if_supports_color(Stdout, |t| t.bold()),
        format!("(user #{id})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Karma:     {:.2}", report.average_karma);
    log::info!("  Replies:   {}", report.replies);
    log::info!("  Following: {}", report.followed);
    log::info!("  Liked:     {}", report.liked);
    crate::log_blank();

    if report.questions.is_empty() {
        log::info!("  No questions asked.");
        return Ok(());
    }
    log::info!("  Questions ({}):", report.questions.len());
    for q in &report.questions {
        log::info!(
            "    #{:<6} {}",
            q.id().unwrap_or_default(),
            truncate_str(&q.title, 70),
        );
    }
    Ok(())
}

pub(crate) fn run_user_find(
    db_path: &Path,
    fname: &str,
    lname: &str,
    json: bool,
) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let found = User::find_by_name(&store, fname, lname)?;

    if json {
        return print_json(&found);
    }

    match found {
        Some(user) => log::info!(
            "#{} {}",
            user.id().unwrap_or_default(),
            user.full_name().if_supports_color(Stdout, |t| t.bold()),
        ),
        None => log::warn!("No user named {} {}", fname, lname),
    }
    Ok(())
}
