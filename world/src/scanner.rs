//! Line-of-sight sweeps over the frozen ground truth.

use treasure_hunt_core::{CellCoord, CellKind, Direction, LayoutView};

/// Cells observed along a single ray.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SightLine {
    /// Treasure halting the ray, if one was sighted.
    pub treasure: Option<CellCoord>,
    /// Contiguous plain paths seen before the ray stopped, nearest first.
    pub path: Vec<CellCoord>,
}

/// Walks outward from `origin` along `direction` over the ground truth.
///
/// The walk begins one cell past the origin. Plain paths are collected and
/// the walk continues; a treasure is recorded and halts the ray; obstacles,
/// player markers and cells outside the grid halt the ray without being
/// recorded.
#[must_use]
pub fn scan(ground_truth: LayoutView<'_>, origin: CellCoord, direction: Direction) -> SightLine {
    let mut sight = SightLine::default();
    let mut cursor = origin.offset(direction);

    while let Some(cell) = cursor {
        match ground_truth.kind(cell) {
            Some(CellKind::Path) => sight.path.push(cell),
            Some(CellKind::Treasure) => {
                sight.treasure = Some(cell);
                break;
            }
            Some(CellKind::Obstacle | CellKind::Player) | None => break,
        }
        cursor = cell.offset(direction);
    }

    sight
}

/// Number of plain paths seen in each direction during a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SightRanges {
    up: usize,
    right: usize,
    down: usize,
    left: usize,
}

impl SightRanges {
    /// Length of the unobstructed run in the provided direction.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    fn record(&mut self, direction: Direction, length: usize) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Right => &mut self.right,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
        };
        *slot = length;
    }
}

/// Combined result of scanning all four directions from one cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Panorama {
    /// Treasure sighted by any direction.
    pub treasure: Option<CellCoord>,
    /// Plain paths from every direction, merged in sweep order.
    pub path: Vec<CellCoord>,
    /// Per-direction run lengths.
    pub ranges: SightRanges,
}

/// Scans every direction in [`Direction::SWEEP`] order and merges the results.
#[must_use]
pub fn sweep(ground_truth: LayoutView<'_>, origin: CellCoord) -> Panorama {
    let mut panorama = Panorama::default();

    for direction in Direction::SWEEP {
        let sight = scan(ground_truth, origin, direction);
        panorama.ranges.record(direction, sight.path.len());
        if panorama.treasure.is_none() {
            panorama.treasure = sight.treasure;
        }
        panorama.path.extend(sight.path);
    }

    panorama
}
