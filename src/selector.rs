//! Column selection for the computer opponent.

use crate::board::{COLS, Column};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Source of the computer's column choices.
///
/// The dispatcher makes exactly one call per computer turn and exactly one
/// drop attempt with the result; a full chosen column means that turn is a
/// no-op. Implementations supply the policy, which lets tests script a
/// deterministic sequence.
pub trait ColumnSelector {
    /// Chooses the column for the computer's next drop.
    fn choose(&mut self) -> Column;
}

/// Selects uniformly at random among the eight columns.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnSelector for RandomSelector {
    fn choose(&mut self) -> Column {
        let column = Column::ALL[self.rng.random_range(0..COLS)];
        debug!(?column, "computer chose column");
        column
    }
}
