//! The five entity types and their association accessors.

mod question;
pub(crate) mod question_follow;
mod question_like;
mod reply;
mod user;

pub use question::{Question, QuestionField};
pub use question_follow::{FollowField, QuestionFollow};
pub use question_like::{LikeField, QuestionLike};
pub use reply::{Reply, ReplyField};
pub use user::{User, UserField};
