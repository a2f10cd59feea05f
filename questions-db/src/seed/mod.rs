//! Synthetic fixture data for development and tests.
//!
//! Rows are generated in layers: users, questions by random users, follows
//! and likes with independent random references (duplicates allowed), then a
//! three-level reply tree where every nested reply inherits the question of
//! the reply it is attached to.

mod progress;
pub mod text;

pub use progress::{LogProgress, SeedProgress, SilentProgress};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::RecordError;
use crate::models::{Question, QuestionFollow, QuestionLike, Reply, User};
use crate::record::Record;
use crate::store::Store;

/// How many rows of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub users: usize,
    pub questions: usize,
    pub follows: usize,
    pub likes: usize,
    pub top_level_replies: usize,
    pub child_replies: usize,
    pub grandchild_replies: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: 1000,
            questions: 1000,
            follows: 1000,
            likes: 1000,
            top_level_replies: 500,
            child_replies: 1000,
            grandchild_replies: 1000,
        }
    }
}

/// Statistics from seeding the database.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SeedStats {
    pub users: usize,
    pub questions: usize,
    pub follows: usize,
    pub likes: usize,
    pub replies: usize,
}

/// Populate `store` according to `plan`.
///
/// A layer whose references would have nothing to point at (questions with
/// no users, replies with no questions, nested replies with no parents) is
/// skipped with a warning.
pub fn seed<R: Rng + ?Sized>(
    store: &Store,
    plan: &SeedPlan,
    rng: &mut R,
    progress: &dyn SeedProgress,
) -> Result<SeedStats, RecordError> {
    let mut stats = SeedStats::default();

    progress.on_phase("Seeding users");
    let mut user_ids = Vec::with_capacity(plan.users);
    for i in 0..plan.users {
        let mut user = User::new(text::first_name(rng), text::last_name(rng));
        user_ids.push(user.save(store)?);
        progress.on_row(i + 1, plan.users);
    }
    stats.users = user_ids.len();

    let question_ids = if plan.questions > 0 && user_ids.is_empty() {
        log::warn!("No users to author questions, skipping questions");
        Vec::new()
    } else {
        progress.on_phase("Seeding questions");
        let mut ids = Vec::with_capacity(plan.questions);
        for i in 0..plan.questions {
            let mut question = Question::new(
                text::sentence(rng),
                text::paragraph(rng),
                choose_id(rng, &user_ids),
            );
            ids.push(question.save(store)?);
            progress.on_row(i + 1, plan.questions);
        }
        ids
    };
    stats.questions = question_ids.len();

    let can_relate = !user_ids.is_empty() && !question_ids.is_empty();

    if can_relate {
        progress.on_phase("Seeding follows");
        for i in 0..plan.follows {
            QuestionFollow::new(choose_id(rng, &question_ids), choose_id(rng, &user_ids))
                .save(store)?;
            stats.follows += 1;
            progress.on_row(i + 1, plan.follows);
        }

        progress.on_phase("Seeding likes");
        for i in 0..plan.likes {
            QuestionLike::new(choose_id(rng, &question_ids), choose_id(rng, &user_ids))
                .save(store)?;
            stats.likes += 1;
            progress.on_row(i + 1, plan.likes);
        }
    } else if plan.follows + plan.likes > 0 {
        log::warn!("No users or questions to relate, skipping follows and likes");
    }

    if !can_relate {
        if plan.top_level_replies + plan.child_replies + plan.grandchild_replies > 0 {
            log::warn!("No users or questions to reply to, skipping replies");
        }
        progress.on_complete(&summary(&stats));
        return Ok(stats);
    }

    progress.on_phase("Seeding top-level replies");
    let mut top_level = Vec::with_capacity(plan.top_level_replies);
    for i in 0..plan.top_level_replies {
        let mut reply = Reply::new(
            text::paragraph(rng),
            choose_id(rng, &question_ids),
            choose_id(rng, &user_ids),
        );
        reply.save(store)?;
        top_level.push(reply);
        progress.on_row(i + 1, plan.top_level_replies);
    }
    stats.replies += top_level.len();

    progress.on_phase("Seeding child replies");
    let children = seed_nested(store, rng, &top_level, plan.child_replies, &user_ids, progress)?;
    stats.replies += children.len();

    progress.on_phase("Seeding grandchild replies");
    let grandchildren =
        seed_nested(store, rng, &children, plan.grandchild_replies, &user_ids, progress)?;
    stats.replies += grandchildren.len();

    progress.on_complete(&summary(&stats));
    Ok(stats)
}

/// Attach `count` replies to parents picked at random from `parents`.
fn seed_nested<R: Rng + ?Sized>(
    store: &Store,
    rng: &mut R,
    parents: &[Reply],
    count: usize,
    user_ids: &[i64],
    progress: &dyn SeedProgress,
) -> Result<Vec<Reply>, RecordError> {
    if parents.is_empty() {
        if count > 0 {
            log::warn!("No parent replies to attach to, skipping {count} replies");
        }
        return Ok(Vec::new());
    }

    let mut replies = Vec::with_capacity(count);
    for i in 0..count {
        let Some(parent) = parents.choose(rng) else {
            break;
        };
        let mut reply = Reply::child_of(parent, text::paragraph(rng), choose_id(rng, user_ids))?;
        reply.save(store)?;
        replies.push(reply);
        progress.on_row(i + 1, count);
    }
    Ok(replies)
}

/// A uniformly random element of a non-empty id list.
fn choose_id<R: Rng + ?Sized>(rng: &mut R, ids: &[i64]) -> i64 {
    ids[rng.gen_range(0..ids.len())]
}

fn summary(stats: &SeedStats) -> String {
    format!(
        "Seeded {} users, {} questions, {} follows, {} likes, {} replies",
        stats.users, stats.questions, stats.follows, stats.likes, stats.replies,
    )
}
