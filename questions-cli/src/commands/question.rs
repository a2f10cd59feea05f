use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use questions_db::{Question, Record, Reply, User};
use serde::Serialize;

use crate::CliError;
use crate::cli_types::RankBy;

use super::{open_store, print_json, truncate_str};

#[derive(Serialize)]
struct QuestionReport {
    question: Question,
    author: User,
    likes: i64,
    followers: Vec<User>,
    replies: Vec<Reply>,
}

pub(crate) fn run_question_show(db_path: &Path, id: i64, json: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let question = Question::find_by_id(&store, id)?;

    let report = QuestionReport {
        author: question.author(&store)?,
        likes: question.num_likes(&store)?,
        followers: question.followers(&store)?,
        replies: question.replies(&store)?,
        question,
    };

    if json {
        return print_json(&report);
    }

    log::info!(
        "{} {}",
        report.question.title.if_supports_color(Stdout, |t| t.bold()),
        format!("(question #{id})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  asked by {} (#{})",
        report.author.full_name().if_supports_color(Stdout, |t| t.cyan()),
        report.question.user_id,
    );
    log::info!(
        "  {} likes, {} followers",
        report.likes,
        report.followers.len(),
    );
    crate::log_blank();
    log::info!("  {}", report.question.body);
    crate::log_blank();

    let top_level: Vec<&Reply> = report.replies.iter().filter(|r| r.is_top_level()).collect();
    log::info!(
        "  Replies: {} ({} top-level)",
        report.replies.len(),
        top_level.len(),
    );
    for reply in top_level {
        log::info!(
            "    #{:<6} {}",
            reply.id().unwrap_or_default(),
            truncate_str(&reply.body, 70),
        );
    }
    Ok(())
}

pub(crate) fn run_question_top(
    db_path: &Path,
    by: RankBy,
    n: usize,
    json: bool,
) -> Result<(), CliError> {
    let store = open_store(db_path)?;

    let questions = match by {
        RankBy::Likes => Question::most_liked(&store, n)?,
        RankBy::Follows => Question::most_followed(&store, n)?,
    };

    if json {
        return print_json(&questions);
    }

    let label = match by {
        RankBy::Likes => "Most liked questions",
        RankBy::Follows => "Most followed questions",
    };
    log::info!("{}", label.if_supports_color(Stdout, |t| t.bold()));

    if questions.is_empty() {
        log::info!("  (none)");
        return Ok(());
    }
    for (rank, q) in questions.iter().enumerate() {
        let count = match by {
            RankBy::Likes => q.num_likes(&store)?,
            RankBy::Follows => q.num_follows(&store)?,
        };
        log::info!(
            "  {:>3}. #{:<6} {:>4}  {}",
            rank + 1,
            q.id().unwrap_or_default(),
            count,
            truncate_str(&q.title, 60),
        );
    }
    Ok(())
}
