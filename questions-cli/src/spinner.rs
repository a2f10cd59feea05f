//! Spinner display for long-running database work.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use questions_db::seed::SeedProgress;

/// Shows the current seeding phase and row counter on a single spinner line.
pub(crate) struct SeedSpinner {
    pb: ProgressBar,
}

impl SeedSpinner {
    /// When `quiet` is true the spinner is hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let pb = ProgressBar::new_spinner();
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {prefix} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub(crate) fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl SeedProgress for SeedSpinner {
    fn on_phase(&self, message: &str) {
        self.pb.set_prefix(message.to_string());
        self.pb.set_message("");
    }

    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(25) || current == total {
            self.pb.set_message(format!("[{current}/{total}]"));
        }
    }

    fn on_complete(&self, message: &str) {
        self.pb.finish_and_clear();
        log::debug!("{message}");
    }
}
