//! CLI entry point for the pixel-grid image tool

use clap::Parser;
use pixelmill::io::cli::{Cli, Processor};

fn main() -> pixelmill::Result<()> {
    let cli = Cli::parse();
    let mut processor = Processor::new(cli);
    processor.process()
}
