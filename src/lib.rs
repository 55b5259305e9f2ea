//! Constrained random polyline generation on a discrete grid
//!
//! A random walk from a random seed cell places a fixed number of unique
//! cells. Every step respects a step-size and diagonal-ratio policy and may
//! neither cross earlier segments nor fold back along the previous one. The
//! result is split into three groups for a host to draw as markers and
//! polylines.

#![forbid(unsafe_code)]

/// Random walk, placement constraint and sequence sampling
pub mod algorithm;
/// Command line, configuration, output and error handling
pub mod io;
/// Exact segment predicates
pub mod math;
/// Grid configuration and coordinate mappings
pub mod spatial;

pub use algorithm::executor::{PathGenerator, PathSet, ShapeKind, generate};
pub use algorithm::walk::WalkConfig;
pub use io::error::{GenerationError, Result};
pub use spatial::Grid;
