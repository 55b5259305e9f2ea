//! Grid geometry with row-major cell indexing
//!
//! A grid is a `width x height` plane split into `cell_width x cell_height`
//! cells. Cells are addressed either by a row-major [`CellIndex`] or by a
//! [`CellCoord`], and every cell maps to the [`PlanePoint`] at its center.

use crate::io::configuration::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_CELLS,
};
use crate::io::error::{Result, invalid_grid};

/// Row-major identifier of a grid cell (`y * cols + x`)
pub type CellIndex = usize;

/// Integer cell coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl CellCoord {
    /// Create a coordinate from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Continuous position of a cell center in plane units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

/// Axis-aligned cell rectangle with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: CellCoord,
    /// Maximum coordinates (inclusive)
    pub max: CellCoord,
}

impl BoundingBox {
    /// Check if a coordinate is within the bounds
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Clamp each axis of a coordinate independently into the bounds
    pub fn clamp(&self, coord: CellCoord) -> CellCoord {
        CellCoord {
            x: coord.x.clamp(self.min.x, self.max.x),
            y: coord.y.clamp(self.min.y, self.max.y),
        }
    }
}

/// Immutable grid configuration
///
/// Invariant: `width % cell_width == 0` and `height % cell_height == 0`, so the
/// grid holds exactly `cols * rows` whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
    cols: i32,
    rows: i32,
}

impl Default for Grid {
    /// The 400x240 plane with 20x20 cells (20 columns, 12 rows)
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            cols: (DEFAULT_WIDTH / DEFAULT_CELL_WIDTH) as i32,
            rows: (DEFAULT_HEIGHT / DEFAULT_CELL_HEIGHT) as i32,
        }
    }
}

impl Grid {
    /// Create a grid from plane size and cell size
    ///
    /// # Errors
    ///
    /// Returns an error if any size is zero, if the plane is not an exact
    /// multiple of the cell size, or if the cell count exceeds
    /// [`MAX_GRID_CELLS`]
    pub fn new(width: u32, height: u32, cell_width: u32, cell_height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_grid(&format!(
                "plane size {width}x{height} must be non-zero"
            )));
        }
        if cell_width == 0 || cell_height == 0 {
            return Err(invalid_grid(&format!(
                "cell size {cell_width}x{cell_height} must be non-zero"
            )));
        }
        if width % cell_width != 0 {
            return Err(invalid_grid(&format!(
                "width {width} is not a multiple of cell width {cell_width}"
            )));
        }
        if height % cell_height != 0 {
            return Err(invalid_grid(&format!(
                "height {height} is not a multiple of cell height {cell_height}"
            )));
        }

        let cols = width / cell_width;
        let rows = height / cell_height;
        let cell_count = u64::from(cols) * u64::from(rows);
        if cell_count > MAX_GRID_CELLS as u64 {
            return Err(invalid_grid(&format!(
                "{cols}x{rows} cells exceeds the limit of {MAX_GRID_CELLS}"
            )));
        }

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            cols: cols as i32,
            rows: rows as i32,
        })
    }

    /// Plane width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Plane height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cell width (`dx`)
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cell height (`dy`)
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Number of columns
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Cell-coordinate bounds `[0, cols) x [0, rows)` as an inclusive box
    pub const fn bounds(&self) -> BoundingBox {
        BoundingBox {
            min: CellCoord::new(0, 0),
            max: CellCoord::new(self.cols - 1, self.rows - 1),
        }
    }

    /// Check whether an index addresses a cell of this grid
    pub const fn contains_index(&self, index: CellIndex) -> bool {
        index < self.cell_count()
    }

    /// Convert a row-major index into its cell coordinate
    ///
    /// Defined for `0 <= index < cell_count()`.
    pub fn idx_to_xy(&self, index: CellIndex) -> CellCoord {
        debug_assert!(
            self.contains_index(index),
            "cell index {index} outside {}x{} grid",
            self.cols,
            self.rows
        );
        let cols = self.cols as usize;
        CellCoord::new((index % cols) as i32, (index / cols) as i32)
    }

    /// Convert a cell coordinate into its row-major index
    ///
    /// The coordinate is not clamped; passing one outside the grid is a
    /// contract violation caught only by the debug assertion.
    pub fn xy_to_idx(&self, coord: CellCoord) -> CellIndex {
        debug_assert!(
            self.bounds().contains(coord),
            "cell coordinate ({}, {}) outside {}x{} grid",
            coord.x,
            coord.y,
            self.cols,
            self.rows
        );
        coord.y as usize * self.cols as usize + coord.x as usize
    }

    /// Center of a cell in plane units: `((x + 0.5) * dx, (y + 0.5) * dy)`
    pub fn xy_to_cart(&self, coord: CellCoord) -> PlanePoint {
        PlanePoint {
            x: (f64::from(coord.x) + 0.5) * f64::from(self.cell_width),
            y: (f64::from(coord.y) + 0.5) * f64::from(self.cell_height),
        }
    }

    /// Center of the cell at `index` in plane units
    pub fn idx_to_cart(&self, index: CellIndex) -> PlanePoint {
        self.xy_to_cart(self.idx_to_xy(index))
    }
}
