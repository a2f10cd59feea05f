//! SQLite persistence for a question/answer site.
//!
//! Users ask questions, reply to them (replies nest under other replies),
//! and follow or like questions. Every entity shares one persistence
//! pattern, the [`Record`] trait, run against an explicitly passed
//! [`Store`] (via rusqlite with bundled feature).

pub mod error;
pub mod models;
pub mod queries;
pub mod record;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::{DecodeError, RecordError};
pub use models::{
    FollowField, LikeField, Question, QuestionField, QuestionFollow, QuestionLike, Reply,
    ReplyField, User, UserField,
};
pub use queries::{StoreStats, store_stats};
pub use record::Record;
pub use schema::SchemaError;
pub use seed::{SeedPlan, SeedStats, seed};
pub use store::Store;
