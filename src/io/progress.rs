//! Multi-script progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display while scripts run
///
/// Shows one bar per script for small batches and adds a single batch bar
/// once the number of scripts exceeds what fits on screen
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    script_bars: Vec<ProgressBar>,
    script_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STATEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            script_bars: Vec::new(),
            script_count: 0,
        }
    }

    /// Create a manager that draws nothing, for quiet runs and tests
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(
                indicatif::ProgressDrawTarget::hidden(),
            ),
            ..Self::new()
        }
    }

    /// Prepare for `script_count` scripts
    pub fn initialize(&mut self, script_count: usize) {
        self.script_count = script_count;

        // Switch to batch mode for large sets to avoid terminal spam
        if script_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Add a bar for a script with `statement_count` statements
    ///
    /// Returns the index to pass to the other methods.
    pub fn start_script(&mut self, path: &Path, statement_count: usize) -> usize {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        // Only the most recent scripts keep a visible bar
        if let Some(stale) = self
            .script_bars
            .len()
            .checked_sub(MAX_INDIVIDUAL_PROGRESS_BARS)
            .and_then(|index| self.script_bars.get(index))
        {
            self.multi_progress.remove(stale);
        }

        let bar = ProgressBar::new(statement_count as u64);
        bar.set_style(STATEMENT_STYLE.clone());
        bar.set_prefix(display_name);
        self.script_bars.push(self.multi_progress.add(bar));
        self.script_bars.len() - 1
    }

    /// Report that statement `statement` has finished
    pub fn advance(&self, script: usize, statement: &str) {
        if let Some(bar) = self.script_bars.get(script) {
            bar.inc(1);
            bar.set_message(statement.to_string());
        }
    }

    /// Mark a script as completed and update batch progress
    pub fn complete_script(&self, script: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.script_bars.get(script) {
            bar.finish_with_message("✓");
        }
    }

    /// Number of scripts announced by [`ProgressManager::initialize`]
    pub const fn script_count(&self) -> usize {
        self.script_count
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All scripts processed");
        }
        let _ = self.multi_progress.clear();
    }
}
