#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Treasure placement system that proposes sites until the world accepts one.

use rand::Rng;
use treasure_hunt_core::{CellCoord, CellKind, Command, Event, GridDimensions};

/// Supplies candidate coordinates for the treasure.
pub trait SiteSource {
    /// Returns the next coordinate to try on a grid of the provided size.
    fn next_site(&mut self, dimensions: GridDimensions) -> CellCoord;
}

/// Site source drawing uniformly from the grid interior.
///
/// The interior spans `[2, width - 1] × [2, height - 1]`; boundary cells are
/// never proposed. Seeding is left to whoever constructs the generator.
#[derive(Clone, Debug)]
pub struct RandomSites<R> {
    rng: R,
}

impl<R: Rng> RandomSites<R> {
    /// Wraps the provided random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SiteSource for RandomSites<R> {
    fn next_site(&mut self, dimensions: GridDimensions) -> CellCoord {
        let x = self.rng.gen_range(2..dimensions.width().max(3));
        let y = self.rng.gen_range(2..dimensions.height().max(3));
        CellCoord::new(x, y)
    }
}

/// Pure system that keeps proposing treasure sites until one is accepted.
#[derive(Debug)]
pub struct TreasurePlacement<S> {
    source: S,
    attempts: u32,
    placed: Option<CellCoord>,
}

impl<S: SiteSource> TreasurePlacement<S> {
    /// Creates a placement system drawing from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            attempts: 0,
            placed: None,
        }
    }

    /// Consumes world events and emits the next placement proposal, if needed.
    pub fn handle(
        &mut self,
        events: &[Event],
        dimensions: GridDimensions,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            match event {
                Event::TreasurePlaced { cell } => self.placed = Some(*cell),
                Event::PlacementRejected {
                    kind: CellKind::Treasure,
                    cell,
                    reason,
                } => {
                    tracing::trace!(%cell, %reason, "treasure site rejected");
                }
                _ => {}
            }
        }

        if self.placed.is_some() {
            return;
        }

        let cell = self.source.next_site(dimensions);
        self.attempts = self.attempts.saturating_add(1);
        out.push(Command::PlaceTreasure { cell });
    }

    /// Cell the world accepted, once placement succeeded.
    #[must_use]
    pub const fn placed(&self) -> Option<CellCoord> {
        self.placed
    }

    /// Number of sites proposed so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}
