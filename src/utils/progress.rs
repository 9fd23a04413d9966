//! Console progress for long raster scans

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar over rows scanned or regions composited
///
/// Drawn on stderr so command output on stdout stays clean.
pub struct ProgressTracker {
    bar: ProgressBar,
    label: String,
}

impl ProgressTracker {
    pub fn new(total: u64, label: &str) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(label.to_string());

        ProgressTracker {
            bar,
            label: label.to_string(),
        }
    }

    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Show which item is being worked on
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(format!("{}: {}", self.label, msg));
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(format!("{}: done", self.label));
    }
}
