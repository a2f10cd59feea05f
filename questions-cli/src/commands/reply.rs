use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use questions_db::{Record, Reply};
use serde::Serialize;

use crate::CliError;

use super::{open_store, print_json, truncate_str};

#[derive(Serialize)]
struct ReplyReport {
    reply: Reply,
    parent: Option<Reply>,
    children: Vec<Reply>,
}

pub(crate) fn run_reply_show(db_path: &Path, id: i64, json: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let reply = Reply::find_by_id(&store, id)?;

    let parent = if reply.is_top_level() {
        None
    } else {
        Some(reply.parent_reply(&store)?)
    };
    let report = ReplyReport {
        children: reply.child_replies(&store)?,
        parent,
        reply,
    };

    if json {
        return print_json(&report);
    }

    let author = report.reply.author(&store)?;
    let question = report.reply.question(&store)?;

    log::info!(
        "{} by {}",
        format!("Reply #{id}").if_supports_color(Stdout, |t| t.bold()),
        author.full_name().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  on question #{}: {}",
        report.reply.question_id,
        truncate_str(&question.title, 60),
    );
    match &report.parent {
        Some(parent) => log::info!(
            "  in reply to #{}: {}",
            parent.id().unwrap_or_default(),
            truncate_str(&parent.body, 60),
        ),
        None => log::info!("  top-level reply"),
    }
    crate::log_blank();
    log::info!("  {}", report.reply.body);
    crate::log_blank();

    log::info!("  Children: {}", report.children.len());
    for child in &report.children {
        log::info!(
            "    #{:<6} {}",
            child.id().unwrap_or_default(),
            truncate_str(&child.body, 70),
        );
    }
    Ok(())
}
