//! Spatial data structures for the cell grid
//!
//! This module contains the grid configuration and the mappings between
//! row-major cell indices, cell coordinates and plane positions.

/// Grid configuration and index/coordinate/plane mappings
pub mod grid;

pub use grid::{BoundingBox, CellCoord, CellIndex, Grid, PlanePoint};
