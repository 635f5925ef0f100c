// src/progress.rs

//! A console progress bar driven by the rewrite passes.
#[cfg(feature = "progress")]
use crate::report::{Pass, ReportSink};
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// An implementation of `ReportSink` using the `indicatif` crate.
///
/// Report lines are not printed here; the console adapter prints the full
/// report once the run is over. The bar only shows which pass is running.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        Self { bar: pb }
    }

    /// Returns `true` if stderr is a terminal, i.e. a bar would be visible.
    pub fn is_visible() -> bool {
        atty::is(atty::Stream::Stderr)
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ReportSink for IndicatifProgress {
    fn message(&self, msg: &str) {
        if msg.starts_with("Failed") {
            // Hide the bar while the warning is written to the same stream.
            self.bar.suspend(|| log::warn!("{}", msg));
        }
        self.bar.tick();
    }

    fn begin_pass(&self, pass: Pass, total: Option<u64>) {
        self.bar.set_length(total.unwrap_or(0));
        self.bar.set_position(0);
        self.bar.set_message(pass.label());
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
