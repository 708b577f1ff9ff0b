//! Progress display for replaying recorded panel requests

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static REPLAY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Requests: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many requests of a replay have been handled
///
/// Failed requests are counted separately so the final message can report them.
pub struct ReplayProgress {
    bar: ProgressBar,
    failures: usize,
}

impl ReplayProgress {
    /// Create a progress bar for `total` requests
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(REPLAY_STYLE.clone());
        Self { bar, failures: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar, failures: 0 }
    }

    /// Record one handled request and whether it succeeded
    pub fn record(&mut self, kind: &str, succeeded: bool) {
        if !succeeded {
            self.failures += 1;
        }
        self.bar.set_message(kind.to_string());
        self.bar.inc(1);
    }

    /// Number of requests handled so far
    pub fn handled(&self) -> u64 {
        self.bar.position()
    }

    /// Number of failed requests so far
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Finish the bar with a summary
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("done, {} failed", self.failures));
    }
}
