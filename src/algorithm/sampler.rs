//! Bounded sampler for sequences of unique cell indices
//!
//! Each slot is filled by asking a [`PointSource`] for the next point given
//! the sequence so far. Every attempt resolves to an [`Attempt`]; rejected and
//! exhausted attempts back the sequence off by one point and draw from a
//! budget shared by the whole build. When the budget runs out the partial
//! sequence is returned.

use log::{debug, trace, warn};

use crate::algorithm::occupancy::CellSet;
use crate::io::configuration::SEQUENCE_BUDGET;
use crate::spatial::CellIndex;

/// A point source gave up finding a legal point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhausted;

/// Outcome of one sampling attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Point is new and was appended
    Accepted(CellIndex),
    /// Point already occurs in the sequence
    Rejected(CellIndex),
    /// Source could not produce a point
    Exhausted,
}

/// Strategy producing the next point of a sequence
pub trait PointSource {
    /// Produce the point following `previous`
    ///
    /// `previous` is the last element of `committed`, or `None` for the
    /// first point.
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] when no legal point could be found
    fn next_point(
        &mut self,
        previous: Option<CellIndex>,
        committed: &[CellIndex],
    ) -> Result<CellIndex, Exhausted>;
}

impl<F> PointSource for F
where
    F: FnMut(Option<CellIndex>, &[CellIndex]) -> Result<CellIndex, Exhausted>,
{
    fn next_point(
        &mut self,
        previous: Option<CellIndex>,
        committed: &[CellIndex],
    ) -> Result<CellIndex, Exhausted> {
        self(previous, committed)
    }
}

/// Unique-point sequence under construction
struct SequenceBuilder {
    points: Vec<CellIndex>,
    seen: CellSet,
    remaining: usize,
}

impl SequenceBuilder {
    fn new(length: usize) -> Self {
        Self {
            points: Vec::with_capacity(length),
            seen: CellSet::new(),
            remaining: length,
        }
    }

    fn attempt<S: PointSource + ?Sized>(&mut self, source: &mut S) -> Attempt {
        match source.next_point(self.points.last().copied(), &self.points) {
            Ok(cell) if self.seen.insert(cell) => {
                self.points.push(cell);
                self.remaining -= 1;
                Attempt::Accepted(cell)
            }
            Ok(cell) => Attempt::Rejected(cell),
            Err(Exhausted) => Attempt::Exhausted,
        }
    }

    /// Drop the last accepted point and reopen its slot
    fn back_off(&mut self) {
        if let Some(dropped) = self.points.pop() {
            self.seen.remove(dropped);
            self.remaining += 1;
        }
    }
}

/// Build a sequence of `length` unique points with the default shared budget
pub fn random_uniq_arr<S: PointSource + ?Sized>(length: usize, source: &mut S) -> Vec<CellIndex> {
    sample_unique(length, SEQUENCE_BUDGET, source)
}

/// Build a sequence of `length` unique points, tolerating `budget` failures
///
/// Returns fewer than `length` points when the budget is exhausted.
pub fn sample_unique<S: PointSource + ?Sized>(
    length: usize,
    budget: usize,
    source: &mut S,
) -> Vec<CellIndex> {
    let mut builder = SequenceBuilder::new(length);
    let mut budget_left = budget;

    while builder.remaining > 0 && budget_left > 0 {
        match builder.attempt(source) {
            Attempt::Accepted(_) => {}
            Attempt::Rejected(cell) => {
                trace!("duplicate point {cell} at position {}", builder.points.len());
                builder.back_off();
                budget_left -= 1;
            }
            Attempt::Exhausted => {
                debug!(
                    "point search exhausted at position {}, backing off",
                    builder.points.len()
                );
                builder.back_off();
                budget_left -= 1;
            }
        }
    }

    if builder.remaining > 0 {
        warn!(
            "sequence budget of {budget} exhausted: produced {} of {length} points",
            builder.points.len()
        );
    }

    builder.points
}
