/// Command-line parsing and subcommand execution
pub mod cli;
/// Defaults and script syntax constants
pub mod configuration;
/// Crate error type and helpers
pub mod error;
/// Undo and redo stacks
pub mod history;
/// Pixel grid conversion to and from image files
pub mod image;
/// Terminal progress display
pub mod progress;
/// Batch script parser and runner
pub mod script;
