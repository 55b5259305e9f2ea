//! Serializable output of generated path sets for a rendering host
//!
//! The document carries both cell coordinates and plane positions of every
//! group so the host can draw markers and polylines without knowing the
//! grid mapping.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::algorithm::executor::PathSet;
use crate::algorithm::walk::WalkConfig;
use crate::io::error::{Result, WithContext};
use crate::spatial::Grid;

/// Output encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,
    /// One line per group of plane positions
    Text,
}

/// Grid dimensions as exported
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridSummary {
    /// Plane width
    pub width: u32,
    /// Plane height
    pub height: u32,
    /// Cell width
    pub cell_width: u32,
    /// Cell height
    pub cell_height: u32,
    /// Number of columns
    pub cols: i32,
    /// Number of rows
    pub rows: i32,
}

impl From<&Grid> for GridSummary {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cell_width: grid.cell_width(),
            cell_height: grid.cell_height(),
            cols: grid.cols(),
            rows: grid.rows(),
        }
    }
}

/// Walk configuration as exported
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigSummary {
    /// Points per group
    pub shape_count: usize,
    /// Probability of a diagonal step
    pub dh_ratio: f64,
    /// Largest step magnitude
    pub max_step: u32,
}

impl From<WalkConfig> for ConfigSummary {
    fn from(config: WalkConfig) -> Self {
        Self {
            shape_count: config.shape_count(),
            dh_ratio: config.dh_ratio(),
            max_step: config.max_step(),
        }
    }
}

/// One group of a path set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportGroup {
    /// Group name (`circle`, `diamond` or `triangle`)
    pub shape: &'static str,
    /// Cell coordinates as `[x, y]`
    pub cells: Vec<[i32; 2]>,
    /// Cell centers as `[x, y]` in plane units
    pub points: Vec<[f64; 2]>,
}

/// One generated path set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportSet {
    /// Seed the set was generated from
    pub seed: u64,
    /// Number of points requested
    pub requested: usize,
    /// Number of points produced
    pub produced: usize,
    /// Whether the requested length was reached
    pub complete: bool,
    /// The three groups in order
    pub groups: Vec<ExportGroup>,
}

impl ExportSet {
    /// Convert a path set using the grid mapping
    pub fn new(seed: u64, path_set: &PathSet, grid: &Grid) -> Self {
        let groups = path_set
            .groups()
            .map(|(kind, cells)| ExportGroup {
                shape: kind.name(),
                cells: cells
                    .iter()
                    .map(|&cell| {
                        let coord = grid.idx_to_xy(cell);
                        [coord.x, coord.y]
                    })
                    .collect(),
                points: cells
                    .iter()
                    .map(|&cell| {
                        let point = grid.idx_to_cart(cell);
                        [point.x, point.y]
                    })
                    .collect(),
            })
            .collect();

        Self {
            seed,
            requested: path_set.requested(),
            produced: path_set.len(),
            complete: path_set.is_complete(),
            groups,
        }
    }
}

/// Complete output of one run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportDocument {
    /// Grid the sets were generated on
    pub grid: GridSummary,
    /// Walk configuration used for every set
    pub config: ConfigSummary,
    /// Generated sets in order
    pub sets: Vec<ExportSet>,
}

impl ExportDocument {
    /// Create an empty document
    pub fn new(grid: &Grid, config: WalkConfig) -> Self {
        Self {
            grid: GridSummary::from(grid),
            config: ConfigSummary::from(config),
            sets: Vec::new(),
        }
    }

    /// Append a generated set
    pub fn push_set(&mut self, seed: u64, path_set: &PathSet, grid: &Grid) {
        self.sets.push(ExportSet::new(seed, path_set, grid));
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as plain text, one line per group
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        for set in &self.sets {
            lines.push(format!(
                "# seed {} ({}/{} points)",
                set.seed, set.produced, set.requested
            ));
            for group in &set.groups {
                let mut line = vec![format!("{}:", group.shape)];
                line.extend(group.points.iter().map(|[x, y]| format!("({x:.1}, {y:.1})")));
                lines.push(line.join(" "));
            }
        }

        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Render in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json().map(|mut json| {
                json.push('\n');
                json
            }),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }
}

/// Write a rendered document to `output`, or to stdout when `None`
///
/// Parent directories of `output` are created as needed.
///
/// # Errors
///
/// Returns an error if rendering fails or the destination cannot be written
pub fn write_document(
    document: &ExportDocument,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = document.render(format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent, "create directory")?;
            }
            fs::write(path, rendered).with_path(path, "write")
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
