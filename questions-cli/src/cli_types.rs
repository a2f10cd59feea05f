//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Inspect and seed a questions database", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to $QUESTIONS_DB, then settings.toml, then ./questions.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the tables in the database file
    Init,

    /// Fill the database with random users, questions, follows, likes and replies
    Seed(SeedArgs),

    /// Show row counts for every table
    Stats,

    /// Look up users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Look up questions
    Question {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Look up replies
    Reply {
        #[command(subcommand)]
        action: ReplyAction,
    },

    /// Set a name field on every user
    RenameAll {
        /// New first name for every user
        #[arg(long, conflicts_with = "lname", required_unless_present = "lname")]
        fname: Option<String>,

        /// New last name for every user
        #[arg(long)]
        lname: Option<String>,
    },
}

/// Row counts for the seeding routine.
#[derive(Args, Clone)]
pub(crate) struct SeedArgs {
    #[arg(long, default_value_t = 1000)]
    pub users: usize,

    #[arg(long, default_value_t = 1000)]
    pub questions: usize,

    #[arg(long, default_value_t = 1000)]
    pub follows: usize,

    #[arg(long, default_value_t = 1000)]
    pub likes: usize,

    /// Replies attached directly to questions
    #[arg(long, default_value_t = 500)]
    pub top_replies: usize,

    /// Replies attached to a random top-level reply
    #[arg(long, default_value_t = 1000)]
    pub child_replies: usize,

    /// Replies attached to a random child reply
    #[arg(long, default_value_t = 1000)]
    pub grandchild_replies: usize,

    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

#[derive(Subcommand)]
pub(crate) enum UserAction {
    /// Show a user with their questions, reply count and karma
    Show { id: i64 },

    /// Find a user by first and last name
    Find { fname: String, lname: String },
}

#[derive(Subcommand)]
pub(crate) enum QuestionAction {
    /// Show a question with its author, likes, followers and replies
    Show { id: i64 },

    /// List the most liked or most followed questions
    Top {
        /// Ranking criterion
        #[arg(long, value_enum, default_value = "likes")]
        by: RankBy,

        /// Number of questions to list
        #[arg(short, default_value_t = 10)]
        n: usize,
    },
}

#[derive(Subcommand)]
pub(crate) enum ReplyAction {
    /// Show a reply with its parent and children
    Show { id: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum RankBy {
    Likes,
    Follows,
}
