//! Random walk steps on the cell grid

use rand::Rng;

use crate::io::configuration::{
    DEFAULT_DH_RATIO, DEFAULT_MAX_STEP, DEFAULT_SHAPE_COUNT, GROUP_COUNT,
};
use crate::spatial::{CellCoord, CellIndex, Grid};

const ORTHOGONAL_UNITS: [[i32; 2]; 4] = [[0, 1], [1, 0], [0, -1], [-1, 0]];
const DIAGONAL_UNITS: [[i32; 2]; 4] = [[-1, 1], [1, 1], [1, -1], [-1, -1]];

/// Walk parameters supplied by the caller
///
/// Values are clamped on construction: `max_step >= 1` and
/// `dh_ratio` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkConfig {
    max_step: u32,
    dh_ratio: f64,
    shape_count: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STEP, DEFAULT_DH_RATIO, DEFAULT_SHAPE_COUNT)
    }
}

impl WalkConfig {
    /// Create a configuration, clamping out-of-range values
    pub fn new(max_step: u32, dh_ratio: f64, shape_count: usize) -> Self {
        Self {
            max_step: max_step.max(1),
            dh_ratio: clamp_ratio(dh_ratio),
            shape_count,
        }
    }

    /// Largest step magnitude in cells
    pub const fn max_step(&self) -> u32 {
        self.max_step
    }

    /// Probability that a step is diagonal
    pub const fn dh_ratio(&self) -> f64 {
        self.dh_ratio
    }

    /// Number of points in each of the three groups
    pub const fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Length of the full point sequence (`shape_count * 3`)
    pub const fn total_points(&self) -> usize {
        self.shape_count * GROUP_COUNT
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// A single unclamped move: direction times magnitude
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Whether both axes move together
    pub diagonal: bool,
    /// Signed offset in cells along x and y
    pub offset: [i32; 2],
}

impl Step {
    /// Draw a step: diagonal with probability `dh_ratio`, one of four
    /// directions, magnitude uniform in `[1, max_step]`
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, max_step: u32, dh_ratio: f64) -> Self {
        let diagonal = rng.random_bool(clamp_ratio(dh_ratio));
        let direction = rng.random_range(0..4);
        let magnitude = i32::try_from(rng.random_range(1..=max_step.max(1))).unwrap_or(i32::MAX);

        let units = if diagonal {
            DIAGONAL_UNITS
        } else {
            ORTHOGONAL_UNITS
        };
        let unit = units.get(direction).copied().unwrap_or([0, 1]);

        Self {
            diagonal,
            offset: [
                unit[0].saturating_mul(magnitude),
                unit[1].saturating_mul(magnitude),
            ],
        }
    }

    /// Apply the step to `index`, keeping the result inside the grid
    ///
    /// Each axis is clamped independently. A diagonal step is then shortened
    /// to the smaller clamped extent on both axes, so it stays diagonal at
    /// the border instead of sliding along it.
    pub fn apply(self, grid: &Grid, index: CellIndex) -> CellIndex {
        let origin = grid.idx_to_xy(index);
        let target = grid.bounds().clamp(CellCoord::new(
            origin.x.saturating_add(self.offset[0]),
            origin.y.saturating_add(self.offset[1]),
        ));

        let target = if self.diagonal {
            let reach = (target.x - origin.x)
                .abs()
                .min((target.y - origin.y).abs());
            CellCoord::new(
                origin.x + reach * self.offset[0].signum(),
                origin.y + reach * self.offset[1].signum(),
            )
        } else {
            target
        };

        grid.xy_to_idx(target)
    }
}

/// Take one random step from `index`
pub fn random_walk<R: Rng + ?Sized>(
    grid: &Grid,
    index: CellIndex,
    max_step: u32,
    dh_ratio: f64,
    rng: &mut R,
) -> CellIndex {
    Step::sample(rng, max_step, dh_ratio).apply(grid, index)
}
