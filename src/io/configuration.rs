//! Runtime configuration defaults and script syntax constants

// Default values for configurable parameters
/// Fixed seed for reproducible mosaics
pub const DEFAULT_SEED: u64 = 42;

/// Seed count used by `apply mosaic` when `--seeds` is omitted
pub const DEFAULT_MOSAIC_SEEDS: i64 = 1000;

// Batch script syntax
/// Starts a comment that runs to the end of the line
pub const COMMENT_MARKER: char = '#';

/// Commands a script may begin with
pub const SCRIPT_OPENING_COMMANDS: [&str; 2] = ["load", "generate"];

// Progress bar display settings
/// Threshold for switching to a single batch progress bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
