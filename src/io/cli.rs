//! Command-line interface for generating batches of path sets

use crate::algorithm::executor::PathGenerator;
use crate::algorithm::walk::WalkConfig;
use crate::io::configuration::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_DH_RATIO, DEFAULT_HEIGHT, DEFAULT_MAX_STEP,
    DEFAULT_SEED, DEFAULT_SHAPE_COUNT, DEFAULT_WIDTH, MAX_SHAPE_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{ExportDocument, OutputFormat, write_document};
use crate::io::progress::ProgressManager;
use crate::spatial::Grid;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(
    author,
    version,
    about = "Generate non-crossing random polylines on a cell grid"
)]
/// Command-line arguments for the path generator
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Points per group (each set holds three groups)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SHAPE_COUNT)]
    pub shapes: usize,

    /// Probability of a diagonal step, between 0 and 1
    #[arg(short, long, default_value_t = DEFAULT_DH_RATIO)]
    pub dh_ratio: f64,

    /// Largest step in cells
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEP)]
    pub max_step: u32,

    /// Plane width
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Plane height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Cell width
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u32,

    /// Cell height
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u32,

    /// Number of path sets to generate (seeds increase by one per set)
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log exhaustion and retry events
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter implied by the flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    /// Validate the walk parameters and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the shape count, diagonal ratio, step size or
    /// batch count is out of range
    pub fn walk_config(&self) -> Result<WalkConfig> {
        if self.shapes > MAX_SHAPE_COUNT {
            return Err(invalid_parameter(
                "shapes",
                &self.shapes,
                &format!("must be at most {MAX_SHAPE_COUNT}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.dh_ratio) {
            return Err(invalid_parameter(
                "dh-ratio",
                &self.dh_ratio,
                &"must be between 0 and 1",
            ));
        }
        if self.max_step == 0 {
            return Err(invalid_parameter(
                "max-step",
                &self.max_step,
                &"must be at least 1",
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be at least 1"));
        }

        Ok(WalkConfig::new(self.max_step, self.dh_ratio, self.shapes))
    }

    /// Build the grid from the size arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not form a whole number of cells
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height, self.cell_width, self.cell_height)
    }
}

/// Runs a batch of generations and writes the result
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate every requested set into one document
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or walk parameters are invalid
    pub fn build_document(&self) -> Result<ExportDocument> {
        let grid = self.cli.grid()?;
        let config = self.cli.walk_config()?;
        let mut document = ExportDocument::new(&grid, config);
        let mut progress = ProgressManager::new(self.cli.count, self.cli.should_show_progress());

        for offset in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(offset as u64);
            let generator = PathGenerator::with_seed(grid, config, seed);
            let path_set = generator.current();

            if !path_set.is_complete() {
                log::debug!(
                    "seed {seed}: produced {} of {} points",
                    path_set.len(),
                    path_set.requested()
                );
            }

            progress.record_set(path_set.is_complete());
            document.push_set(seed, path_set, &grid);
        }

        progress.finish();
        Ok(document)
    }

    /// Generate and write the output
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the output cannot be written
    pub fn run(&self) -> Result<()> {
        let document = self.build_document()?;
        write_document(&document, self.cli.format, self.cli.output.as_deref())
    }
}
