//! Sources of initial rows.

use crate::cells::{Row, State};
use rand::{
    rngs::{StdRng, ThreadRng},
    thread_rng, Rng, SeedableRng,
};

/// Something that supplies the initial row when the configuration
/// only gives a width.
///
/// Any closure `FnMut(usize) -> Row` is a `RowSource`.
pub trait RowSource {
    /// Generates a row of the given width.
    fn row(&mut self, width: usize) -> Row;
}

impl<F: FnMut(usize) -> Row> RowSource for F {
    fn row(&mut self, width: usize) -> Row {
        self(width)
    }
}

/// Random rows.
///
/// Each cell is independently [`ALIVE`](crate::ALIVE) or
/// [`DEAD`](crate::DEAD) with probability `1/2`.
#[derive(Clone, Debug)]
pub struct RandomRow<R: Rng = ThreadRng> {
    rng: R,
}

impl<R: Rng> RandomRow<R> {
    /// Uses the given random number generator.
    pub fn new(rng: R) -> Self {
        RandomRow { rng }
    }
}

impl RandomRow<StdRng> {
    /// A reproducible source: the same seed always gives the same rows.
    pub fn seeded(seed: u64) -> Self {
        RandomRow::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomRow<ThreadRng> {
    fn default() -> Self {
        RandomRow::new(thread_rng())
    }
}

impl<R: Rng> RowSource for RandomRow<R> {
    fn row(&mut self, width: usize) -> Row {
        (0..width).map(|_| self.rng.gen::<State>()).collect()
    }
}
