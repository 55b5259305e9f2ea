use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::placement::{can_insert, committed_segments},
    algorithm::sampler::{Exhausted, PointSource, random_uniq_arr},
    algorithm::walk::{WalkConfig, random_walk},
    io::configuration::{GROUP_COUNT, WALK_ATTEMPTS},
    math::geometry::Segment,
    spatial::{CellCoord, CellIndex, Grid, PlanePoint},
};

/// Point source driving the constrained random walk
///
/// The first point is uniform over the grid. Every later point is a walk
/// step from the previous one that passes [`can_insert`]; after
/// `attempts` failed steps the source reports [`Exhausted`].
pub struct WalkPointSource<'a, R: Rng + ?Sized> {
    grid: &'a Grid,
    config: WalkConfig,
    attempts: usize,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> WalkPointSource<'a, R> {
    /// Create a source with the default per-point attempt limit
    pub fn new(grid: &'a Grid, config: WalkConfig, rng: &'a mut R) -> Self {
        Self {
            grid,
            config,
            attempts: WALK_ATTEMPTS,
            rng,
        }
    }

    /// Override the number of walk steps tried per point
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }
}

impl<R: Rng + ?Sized> PointSource for WalkPointSource<'_, R> {
    fn next_point(
        &mut self,
        previous: Option<CellIndex>,
        committed: &[CellIndex],
    ) -> Result<CellIndex, Exhausted> {
        let Some(previous) = previous else {
            return Ok(self.rng.random_range(0..self.grid.cell_count()));
        };

        for _ in 0..self.attempts {
            let candidate = random_walk(
                self.grid,
                previous,
                self.config.max_step(),
                self.config.dh_ratio(),
                &mut *self.rng,
            );
            if can_insert(self.grid, candidate, committed) {
                return Ok(candidate);
            }
        }

        debug!(
            "no legal step from cell {previous} after {} attempts",
            self.attempts
        );
        Err(Exhausted)
    }
}

/// Role of each third of a path set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// First group: circle markers
    Circle,
    /// Second group: diamond markers
    Diamond,
    /// Third group: triangle markers
    Triangle,
}

impl ShapeKind {
    /// All groups in sequence order
    pub const ALL: [Self; GROUP_COUNT] = [Self::Circle, Self::Diamond, Self::Triangle];

    /// Position of the group within the sequence
    pub const fn group_index(self) -> usize {
        match self {
            Self::Circle => 0,
            Self::Diamond => 1,
            Self::Triangle => 2,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
        }
    }
}

/// Ordered unique cells from one generation, split into three groups
///
/// May hold fewer than `shape_count * 3` cells when the retry budget ran
/// out; trailing groups are then short or empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSet {
    cells: Vec<CellIndex>,
    shape_count: usize,
}

impl PathSet {
    /// Wrap a generated sequence
    pub const fn new(cells: Vec<CellIndex>, shape_count: usize) -> Self {
        Self { cells, shape_count }
    }

    /// All cells in walk order
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Points per group
    pub const fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Number of cells that were requested
    pub const fn requested(&self) -> usize {
        self.shape_count * GROUP_COUNT
    }

    /// Number of cells produced
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether no cells were produced
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether the full requested length was produced
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.requested()
    }

    /// Cells of one group, truncated to what was produced
    pub fn group(&self, kind: ShapeKind) -> &[CellIndex] {
        let start = (kind.group_index() * self.shape_count).min(self.cells.len());
        let end = (start + self.shape_count).min(self.cells.len());
        self.cells.get(start..end).unwrap_or(&[])
    }

    /// All three groups in order
    pub fn groups(&self) -> impl Iterator<Item = (ShapeKind, &[CellIndex])> + '_ {
        ShapeKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.group(kind)))
    }

    /// Consecutive segments of the whole walk
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        committed_segments(&self.cells)
    }

    /// Cell coordinates in walk order
    pub fn coords(&self, grid: &Grid) -> Vec<CellCoord> {
        self.cells.iter().map(|&cell| grid.idx_to_xy(cell)).collect()
    }

    /// Cell centers in walk order
    pub fn plane_points(&self, grid: &Grid) -> Vec<PlanePoint> {
        self.cells.iter().map(|&cell| grid.idx_to_cart(cell)).collect()
    }
}

/// Generate one path set from a grid, walk configuration and random source
pub fn generate<R: Rng + ?Sized>(grid: &Grid, config: WalkConfig, rng: &mut R) -> PathSet {
    let mut source = WalkPointSource::new(grid, config, rng);
    let cells = random_uniq_arr(config.total_points(), &mut source);
    PathSet::new(cells, config.shape_count())
}

/// Stateful generator rebuilt on every refresh
///
/// Holds the grid, the current walk configuration and its own random source.
/// Each [`refresh`](Self::refresh) discards the previous path set and builds
/// a new one from the current configuration.
pub struct PathGenerator {
    grid: Grid,
    config: WalkConfig,
    rng: StdRng,
    current: PathSet,
}

impl PathGenerator {
    /// Create a deterministic generator and build its first path set
    pub fn with_seed(grid: Grid, config: WalkConfig, seed: u64) -> Self {
        Self::from_rng(grid, config, StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating system entropy
    pub fn from_entropy(grid: Grid, config: WalkConfig) -> Self {
        Self::from_rng(grid, config, StdRng::from_os_rng())
    }

    fn from_rng(grid: Grid, config: WalkConfig, mut rng: StdRng) -> Self {
        let current = generate(&grid, config, &mut rng);
        Self {
            grid,
            config,
            rng,
            current,
        }
    }

    /// Access the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Access the walk configuration
    pub const fn config(&self) -> WalkConfig {
        self.config
    }

    /// Replace the walk configuration used by later refreshes
    pub const fn set_config(&mut self, config: WalkConfig) {
        self.config = config;
    }

    /// The most recently generated path set
    pub const fn current(&self) -> &PathSet {
        &self.current
    }

    /// Discard the current path set and generate a new one
    pub fn refresh(&mut self) -> &PathSet {
        self.current = generate(&self.grid, self.config, &mut self.rng);
        &self.current
    }
}
