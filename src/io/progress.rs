//! Progress display for concurrent route searches
//!
//! Each route gets its own expansion bar while the batch is small. Larger
//! batches collapse into one bar counting finished routes.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROUTE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>12} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Routes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress bars for a batch of route searches
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    route_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            route_bars: Vec::new(),
        }
    }

    /// Create bars for `route_count` searches of at most `max_expansions` each
    pub fn initialize(&mut self, route_count: usize, max_expansions: usize) {
        if route_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(route_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for index in 0..route_count {
            let bar = ProgressBar::new(max_expansions as u64);
            bar.set_style(ROUTE_STYLE.clone());
            bar.set_prefix(format!("route {index}"));
            self.route_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Handle for reporting on one route, usable from another thread
    pub fn tracker(&self, index: usize) -> RouteTracker {
        RouteTracker {
            route_bar: self.route_bars.get(index).cloned(),
            batch_bar: self.batch_bar.clone(),
        }
    }

    /// Number of per-route bars in use
    pub fn route_bar_count(&self) -> usize {
        self.route_bars.len()
    }

    /// Test whether the batch bar replaced per-route bars
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All routes searched");
        }
        let _ = self.multi_progress.clear();
    }
}

/// Per-route progress handle
///
/// A tracker without bars is silent, which is what quiet mode hands out.
#[derive(Clone, Default)]
pub struct RouteTracker {
    route_bar: Option<ProgressBar>,
    batch_bar: Option<ProgressBar>,
}

impl RouteTracker {
    /// Tracker that reports nothing
    pub fn silent() -> Self {
        Self::default()
    }

    /// Report expansions performed so far
    pub fn update(&self, expansions: usize) {
        if let Some(ref bar) = self.route_bar {
            bar.set_position(expansions as u64);
        }
    }

    /// Mark the route finished with a short summary
    ///
    /// The bar shrinks to the expansions actually used, since finishing moves
    /// the position to the bar length.
    pub fn complete(&self, expansions: usize, summary: &str) {
        if let Some(ref bar) = self.route_bar {
            bar.set_length(expansions as u64);
            bar.finish_with_message(summary.to_string());
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Current position of the route bar, if any
    pub fn position(&self) -> Option<u64> {
        self.route_bar.as_ref().map(ProgressBar::position)
    }
}
