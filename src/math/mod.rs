//! Mathematical utilities for the generator

/// Exact segment predicates over grid cell indices
pub mod geometry;
