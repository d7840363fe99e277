//! Command-line interface for running scripts, generating patterns and applying transforms

use crate::algorithm::Operation;
use crate::io::configuration::{DEFAULT_MOSAIC_SEEDS, DEFAULT_SEED};
use crate::io::error::{ImagingError, Result};
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::io::script::{ScriptRunner, read_script};
use crate::patterns::{Pattern, StripeDirection};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pixelmill")]
#[command(
    author,
    version,
    about = "Filter, dither, mosaic and generate RGB images"
)]
/// Command-line arguments for the image tool
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub action: Action,

    /// Random seed for reproducible mosaics
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress and status output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Run one or more batch scripts in order
    Run {
        /// Script files to run
        #[arg(value_name = "SCRIPT", required = true)]
        scripts: Vec<PathBuf>,
    },
    /// Generate a pattern image
    Generate {
        /// Output image path, `<pattern>.png` when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pattern to draw
        #[command(subcommand)]
        pattern: PatternArgs,
    },
    /// Apply one transform to an image file
    Apply {
        /// Transform to apply
        #[arg(value_enum)]
        operation: OperationArg,

        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path, `<input>_<operation>` next to the input when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of seeds for the mosaic transform
        #[arg(long, default_value_t = DEFAULT_MOSAIC_SEEDS, allow_negative_numbers = true)]
        seeds: i64,
    },
}

/// Pattern selection and sizes for `generate`
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum PatternArgs {
    /// Seven-stripe rainbow flag
    Rainbow {
        /// Image height in pixels
        #[arg(long)]
        height: usize,
        /// Image width in pixels
        #[arg(long)]
        width: usize,
        /// Stripe stacking: 'h' for horizontal, 'v' for vertical
        #[arg(long, default_value = "h", value_parser = parse_direction)]
        direction: StripeDirection,
    },
    /// 8x8 checkerboard
    Checkerboard {
        /// Side of one square in pixels
        #[arg(long)]
        square_size: usize,
    },
    /// French tricolour
    French {
        /// Image height in pixels
        #[arg(long)]
        height: usize,
        /// Image width in pixels
        #[arg(long)]
        width: usize,
    },
    /// Swiss cross
    Swiss {
        /// Image height in pixels
        #[arg(long)]
        height: usize,
        /// Image width in pixels
        #[arg(long)]
        width: usize,
    },
    /// Greek stripes with canton cross
    Greek {
        /// Image height in pixels
        #[arg(long)]
        height: usize,
        /// Image width in pixels
        #[arg(long)]
        width: usize,
    },
}

impl PatternArgs {
    /// Engine description of the selected pattern
    pub const fn pattern(&self) -> Pattern {
        match *self {
            Self::Rainbow {
                height,
                width,
                direction,
            } => Pattern::RainbowFlag {
                height,
                width,
                direction,
            },
            Self::Checkerboard { square_size } => Pattern::Checkerboard { square_size },
            Self::French { height, width } => Pattern::FrenchFlag { height, width },
            Self::Swiss { height, width } => Pattern::SwissFlag { height, width },
            Self::Greek { height, width } => Pattern::GreekFlag { height, width },
        }
    }

    /// File stem used when no output path is given
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rainbow { .. } => "rainbow",
            Self::Checkerboard { .. } => "checkerboard",
            Self::French { .. } => "french",
            Self::Swiss { .. } => "swiss",
            Self::Greek { .. } => "greek",
        }
    }
}

/// Transforms selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationArg {
    /// 3x3 smoothing
    Blur,
    /// 5x5 sharpening
    Sharpen,
    /// Luma greyscale
    Greyscale,
    /// Sepia tone
    Sepia,
    /// Black and white error diffusion
    Dither,
    /// Voronoi mosaic
    Mosaic,
}

impl OperationArg {
    /// Engine description of the selected transform
    pub const fn operation(self, seeds: i64) -> Operation {
        match self {
            Self::Blur => Operation::Blur,
            Self::Sharpen => Operation::Sharpen,
            Self::Greyscale => Operation::Greyscale,
            Self::Sepia => Operation::Sepia,
            Self::Dither => Operation::Dither,
            Self::Mosaic => Operation::Mosaic { seeds },
        }
    }
}

fn parse_direction(value: &str) -> std::result::Result<StripeDirection, String> {
    value
        .parse::<StripeDirection>()
        .map_err(|e: ImagingError| e.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes the parsed command line
pub struct Processor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl Processor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns the first script, engine, or file error encountered
    pub fn process(&mut self) -> Result<()> {
        match self.cli.action.clone() {
            Action::Run { scripts } => self.run_scripts(&scripts),
            Action::Generate { output, pattern } => {
                let grid = pattern.pattern().render()?;
                let output =
                    output.unwrap_or_else(|| PathBuf::from(format!("{}.png", pattern.name())));
                save_image(&grid, &output)?;
                self.report(&output);
                Ok(())
            }
            Action::Apply {
                operation,
                input,
                output,
                seeds,
            } => {
                let operation = operation.operation(seeds);
                let grid = load_image(&input)?;
                let mut rng = StdRng::seed_from_u64(self.cli.seed);
                let result = operation.apply(&grid, &mut rng)?;
                let output =
                    output.unwrap_or_else(|| derived_output_path(&input, operation.name()));
                save_image(&result, &output)?;
                self.report(&output);
                Ok(())
            }
        }
    }

    fn run_scripts(&mut self, scripts: &[PathBuf]) -> Result<()> {
        self.progress_manager.initialize(scripts.len());

        for path in scripts {
            // Parse up front so a syntax error costs no work
            let statements = read_script(path)?;
            let bar = self.progress_manager.start_script(path, statements.len());

            let mut runner = ScriptRunner::new(self.cli.seed);
            let progress = &self.progress_manager;
            runner.run_statements(&statements, |_, statement| {
                progress.advance(bar, &statement.command.to_string());
            })?;
            self.progress_manager.complete_script(bar);
        }

        self.progress_manager.finish();
        Ok(())
    }

    // Allow print for user feedback on written files
    #[allow(clippy::print_stderr)]
    fn report(&self, output: &Path) {
        if !self.cli.quiet {
            eprintln!("Wrote {}", output.display());
        }
    }
}

/// Path next to `input` with `_<suffix>` appended to the file stem
///
/// The extension is kept, so the output is encoded in the input's format.
pub fn derived_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let output_name = match input.extension() {
        Some(extension) => format!(
            "{}_{suffix}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        None => format!("{}_{suffix}.png", stem.to_string_lossy()),
    };

    if let Some(parent) = input.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
