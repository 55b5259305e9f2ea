//! Progress display for batch generation

use crate::io::configuration::{MIN_PROGRESS_BATCH, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Sets: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generated path sets in a batch
///
/// Single-set runs show no bar. Sets that end short of their requested
/// length are counted and reported in the bar message.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
    completed: usize,
    partial: usize,
}

impl ProgressManager {
    /// Create a tracker for `total` sets, drawing a bar when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = (visible && total >= MIN_PROGRESS_BATCH).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });

        Self {
            bar,
            total,
            completed: 0,
            partial: 0,
        }
    }

    /// Record one finished set
    pub fn record_set(&mut self, complete: bool) {
        self.completed += 1;
        if !complete {
            self.partial += 1;
        }

        if let Some(ref bar) = self.bar {
            bar.inc(1);
            if self.partial > 0 {
                bar.set_message(format!("({} partial)", self.partial));
            }
        }
    }

    /// Number of sets recorded so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of sets that ended short
    pub const fn partial(&self) -> usize {
        self.partial
    }

    /// Whether a bar is drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        log::info!(
            "generated {}/{} sets ({} partial)",
            self.completed,
            self.total,
            self.partial
        );
    }
}
