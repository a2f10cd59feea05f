use std::path::Path;
use std::time::Instant;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use questions_db::SeedPlan;
use questions_db::seed::{LogProgress, SeedProgress};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::CliError;
use crate::cli_types::SeedArgs;
use crate::spinner::SeedSpinner;

use super::{open_store, print_json};

/// How the seed command reports what it is doing.
#[derive(Clone, Copy)]
pub(crate) struct SeedOutput {
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
}

pub(crate) fn run_seed(
    db_path: &Path,
    args: &SeedArgs,
    output: SeedOutput,
) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let plan = plan_from_args(args);
    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !output.json {
        log::info!(
            "Seeding {}",
            db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    let start = Instant::now();

    // Verbose runs log each phase instead; a spinner would garble the debug lines.
    let spinner = (!output.verbose).then(|| SeedSpinner::new(output.quiet || output.json));
    let progress: &dyn SeedProgress = match &spinner {
        Some(s) => s,
        None => &LogProgress,
    };
    let result = questions_db::seed(&store, &plan, &mut rng, progress);
    if let Some(s) = &spinner {
        s.finish();
    }
    let stats = result?;

    if output.json {
        return print_json(&stats);
    }

    log::info!(
        "{} {} users, {} questions, {} follows, {} likes, {} replies in {:.1}s",
        "Seeded".if_supports_color(Stdout, |t| t.green()),
        stats.users,
        stats.questions,
        stats.follows,
        stats.likes,
        stats.replies,
        start.elapsed().as_secs_f64(),
    );
    Ok(())
}

fn plan_from_args(args: &SeedArgs) -> SeedPlan {
    SeedPlan {
        users: args.users,
        questions: args.questions,
        follows: args.follows,
        likes: args.likes,
        top_level_replies: args.top_replies,
        child_replies: args.child_replies,
        grandchild_replies: args.grandchild_replies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_match_default_plan() {
        let args = SeedArgs {
            users: 1000,
            questions: 1000,
            follows: 1000,
            likes: 1000,
            top_replies: 500,
            child_replies: 1000,
            grandchild_replies: 1000,
            rng_seed: None,
        };
        assert_eq!(plan_from_args(&args), SeedPlan::default());
    }
}
