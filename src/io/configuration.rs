//! Generation constants and runtime configuration defaults

// Host plane and cell size
/// Default plane width
pub const DEFAULT_WIDTH: u32 = 400;
/// Default plane height
pub const DEFAULT_HEIGHT: u32 = 240;
/// Default cell width (`dx`)
pub const DEFAULT_CELL_WIDTH: u32 = 20;
/// Default cell height (`dy`)
pub const DEFAULT_CELL_HEIGHT: u32 = 20;

// Safety limit to prevent excessive memory allocation
/// Maximum number of cells a grid may hold
pub const MAX_GRID_CELLS: usize = 1_000_000;

// Walk parameters
/// Default number of shapes per group
pub const DEFAULT_SHAPE_COUNT: usize = 3;
/// Largest shape count accepted from the command line
pub const MAX_SHAPE_COUNT: usize = 15;
/// Default probability of a diagonal step
pub const DEFAULT_DH_RATIO: f64 = 0.5;
/// Default maximum step magnitude in cells
pub const DEFAULT_MAX_STEP: u32 = 10;

/// Number of point groups in a path set (circles, diamonds, triangles)
pub const GROUP_COUNT: usize = 3;

// Retry budgets
/// Walk steps tried per point before the point search gives up
pub const WALK_ATTEMPTS: usize = 1000;
/// Rejections tolerated across one whole sequence build
pub const SEQUENCE_BUDGET: usize = 1000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Minimum batch size that shows a progress bar
pub const MIN_PROGRESS_BATCH: usize = 2;
