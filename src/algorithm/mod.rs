/// Path generation entry points and the refreshable generator
pub mod executor;
/// Growable bitset over cell indices for uniqueness checks
pub mod occupancy;
/// Legality of appending a point to a path
pub mod placement;
/// Bounded unique-sequence sampler and point source strategy
pub mod sampler;
/// Random walk steps and walk configuration
pub mod walk;
