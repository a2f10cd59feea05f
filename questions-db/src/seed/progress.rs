//! Seeding progress reporting.

/// Trait for receiving seeding progress updates.
pub trait SeedProgress {
    /// Called when a layer of rows starts (e.g. "Seeding users").
    fn on_phase(&self, message: &str);

    /// Called after each row is inserted within the current phase.
    fn on_row(&self, current: usize, total: usize);

    /// Called once every layer has been written.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl SeedProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_row(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl SeedProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(250) || current == total {
            log::debug!("  [{}/{}]", current, total);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
