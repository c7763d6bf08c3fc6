//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// Progress reporter for files and chunks
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize a progress bar over `total` items
    pub fn init(&mut self, total: u64, unit: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        let style = match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            Ok(style) => style.progress_chars("##-"),
            Err(_) => ProgressStyle::default_bar(),
        };
        pb.set_style(style);
        pb.set_message(unit.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Move the bar to `done` out of `total`, creating it on first use
    pub fn update(&mut self, done: usize, total: usize, unit: &str) {
        if self.quiet {
            return;
        }
        if self.progress_bar.is_none() {
            self.init(total as u64, unit);
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        }
    }

    /// Advance by one completed item
    pub fn item_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", name));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Current position, if a bar is shown
    pub fn position(&self) -> Option<u64> {
        self.progress_bar.as_ref().map(ProgressBar::position)
    }
}
