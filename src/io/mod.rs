/// Command-line parsing and batch runner
pub mod cli;
/// Constants and default parameters
pub mod configuration;
/// Error types
pub mod error;
/// Serializable output for rendering hosts
pub mod export;
/// Batch progress display
pub mod progress;
