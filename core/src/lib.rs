#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Treasure Hunt engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Systems submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems read the grid exclusively through
//! [`LayoutView`] borrows bundled into a per-tick [`Survey`].

use serde::{Deserialize, Serialize};

/// Smallest edge length that still leaves an interior inside the boundary wall.
pub const MIN_GRID_EDGE: u32 = 3;

/// Largest supported edge length; keeps dense layouts small enough to allocate.
pub const MAX_GRID_EDGE: u32 = 1024;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the player marker be written at the provided cell.
    PlacePlayer {
        /// Cell that should host the player marker.
        cell: CellCoord,
    },
    /// Requests that the real treasure be written at the provided cell.
    PlaceTreasure {
        /// Cell proposed for the treasure.
        cell: CellCoord,
    },
    /// Freezes the ground truth and turns every remaining path into a candidate.
    HideTreasure,
    /// Erases candidate markers from cells proven to be plain paths.
    RevealPathCells {
        /// Cells observed as plain paths by the latest scan.
        cells: Vec<CellCoord>,
    },
    /// Removes cells from the possible-location set.
    RuleOutLocations {
        /// Cells that can no longer hide the treasure.
        cells: Vec<CellCoord>,
    },
    /// Moves the player marker between two cells.
    MovePlayer {
        /// Cell the player is vacating.
        from: CellCoord,
        /// Cell the player is entering.
        to: CellCoord,
    },
    /// Records the treasure as found and discards the remaining candidates.
    ClaimTreasure {
        /// Cell where the treasure was sighted.
        cell: CellCoord,
    },
    /// Converts every remaining candidate marker back to a path except one.
    RevealAll {
        /// Candidate marker that should survive the reveal.
        except: CellCoord,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the player marker was written into the visible layout.
    PlayerPlaced {
        /// Cell now hosting the player.
        cell: CellCoord,
    },
    /// Confirms that the real treasure was written into the visible layout.
    TreasurePlaced {
        /// Cell now hosting the treasure.
        cell: CellCoord,
    },
    /// Reports that a placement or move was refused by the placement policy.
    PlacementRejected {
        /// Kind the caller attempted to write.
        kind: CellKind,
        /// Destination of the rejected write.
        cell: CellCoord,
        /// Specific reason the write failed.
        reason: PlacementError,
    },
    /// Announces that the ground truth was frozen and candidates were laid out.
    TreasureHidden {
        /// Number of candidate cells created by the transform.
        candidates: usize,
    },
    /// Reports that the one-shot hide transform was requested a second time.
    HideRejected,
    /// Lists the candidate markers that were turned back into paths.
    CellsRevealed {
        /// Cells whose visible kind changed from treasure to path.
        cells: Vec<CellCoord>,
    },
    /// Lists the cells that left the possible-location set.
    LocationsRuledOut {
        /// Cells removed from the set, in request order.
        cells: Vec<CellCoord>,
    },
    /// Confirms that the player marker moved.
    PlayerMoved {
        /// Cell the player left.
        from: CellCoord,
        /// Cell the player entered.
        to: CellCoord,
    },
    /// Confirms that the treasure was claimed at the provided cell.
    TreasureClaimed {
        /// Cell holding the real treasure.
        cell: CellCoord,
    },
    /// Reports that a claim named a cell other than the real treasure.
    ClaimRejected {
        /// Cell named by the rejected claim.
        cell: CellCoord,
    },
    /// Confirms that the remaining candidate markers were cleared.
    MapRevealed {
        /// Candidate marker that was preserved.
        treasure: CellCoord,
        /// Number of markers turned back into paths.
        cleared: usize,
    },
}

/// Location of a single grid cell.
///
/// Coordinates are 1-indexed. `x` grows to the right and `y` grows upward, so
/// the row with the highest `y` is drawn first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Column of the cell, starting at one.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Row of the cell, starting at one.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Neighbouring coordinate one unit away in the provided direction.
    ///
    /// Returns `None` when the step would leave the unsigned coordinate space.
    /// The result may still lie outside a particular grid.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.step();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}

/// Width and height of the grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    width: u32,
    height: u32,
}

impl GridDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether both edges are long enough to enclose an interior.
    #[must_use]
    pub const fn has_interior(&self) -> bool {
        self.width >= MIN_GRID_EDGE && self.height >= MIN_GRID_EDGE
    }

    /// Reports whether both edges lie within `[MIN_GRID_EDGE, MAX_GRID_EDGE]`.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.has_interior() && self.width <= MAX_GRID_EDGE && self.height <= MAX_GRID_EDGE
    }

    /// Reports whether the cell lies within `[1, width] × [1, height]`.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= 1 && cell.x <= self.width && cell.y >= 1 && cell.y <= self.height
    }

    /// Reports whether the cell sits on one of the four outer rows or columns.
    #[must_use]
    pub const fn is_boundary(&self, cell: CellCoord) -> bool {
        self.contains(cell)
            && (cell.x == 1 || cell.y == 1 || cell.x == self.width || cell.y == self.height)
    }

    /// Total number of cells covered by the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.width) * u64::from(self.height);
        usize::try_from(count).unwrap_or(0)
    }

    /// Dense row-major index of the cell, if it lies within the grid.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.y - 1).ok()?;
        let column = usize::try_from(cell.x - 1).ok()?;
        let width = usize::try_from(self.width).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }

    /// Iterates every cell in dense index order, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let width = self.width;
        (1..=self.height).flat_map(move |y| (1..=width).map(move |x| CellCoord::new(x, y)))
    }
}

/// Kind of entity occupying a cell in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Walkable, clear cell.
    Path,
    /// Treasure, or a candidate marker concealing it in the visible layout.
    Treasure,
    /// Marker for the exploring player.
    Player,
    /// Impassable, sight-blocking cell.
    Obstacle,
}

impl CellKind {
    /// Single-character glyph used when drawing the layout.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Path => '.',
            Self::Treasure => '$',
            Self::Player => 'X',
            Self::Obstacle => '#',
        }
    }
}

/// Cardinal directions along the grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Toward increasing `y`.
    Up,
    /// Toward increasing `x`.
    Right,
    /// Toward decreasing `y`.
    Down,
    /// Toward decreasing `x`.
    Left,
}

impl Direction {
    /// Order in which the player sweeps its surroundings each tick.
    pub const SWEEP: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy)` travelled by a single step.
    #[must_use]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
        }
    }
}

/// Direction the player currently attempts to advance along.
///
/// Headings only ever progress forward in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Heading {
    /// Advancing toward increasing `y`.
    Up,
    /// Advancing toward increasing `x`.
    Right,
    /// Advancing toward decreasing `y`.
    Down,
    /// Out of headings; no further moves are possible.
    Stuck,
}

impl Heading {
    /// Direction travelled under this heading, or `None` once stuck.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Right => Some(Direction::Right),
            Self::Down => Some(Direction::Down),
            Self::Stuck => None,
        }
    }

    /// Heading adopted once this heading is blocked.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down | Self::Stuck => Self::Stuck,
        }
    }
}

/// Strategy controlling when the player abandons its current heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingPolicy {
    /// Switch headings only when the next cell is an obstacle.
    Strict,
    /// Additionally skip ahead when the next heading sees strictly further.
    #[default]
    LongestSight,
}

/// Reasons a write into the visible layout may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The destination lies outside the configured grid.
    OutOfBounds,
    /// The destination is an obstacle.
    Blocked,
    /// The destination holds a kind that cannot be overwritten by the request.
    Occupied,
    /// The destination conceals the real treasure.
    Concealed,
    /// A move named a source cell the player does not occupy.
    MissingPlayer,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::OutOfBounds => "cell lies outside the grid",
            Self::Blocked => "cell is an obstacle",
            Self::Occupied => "cell is occupied",
            Self::Concealed => "cell conceals the treasure",
            Self::MissingPlayer => "player is not at the source cell",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for PlacementError {}

/// Read-only view into a dense layout.
#[derive(Clone, Copy, Debug)]
pub struct LayoutView<'a> {
    cells: &'a [CellKind],
    dimensions: GridDimensions,
}

impl<'a> LayoutView<'a> {
    /// Captures a new layout view backed by the provided row-major cells.
    #[must_use]
    pub fn new(cells: &'a [CellKind], dimensions: GridDimensions) -> Self {
        Self { cells, dimensions }
    }

    /// Kind stored at the cell, or `None` outside the grid.
    #[must_use]
    pub fn kind(&self, cell: CellCoord) -> Option<CellKind> {
        self.dimensions
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Dimensions of the underlying layout.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Iterates every cell alongside its kind in dense index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellKind)> + 'a {
        self.dimensions.cells().zip(self.cells.iter().copied())
    }

    /// Number of cells holding the provided kind.
    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|candidate| **candidate == kind).count()
    }
}

/// Snapshot handed to the explorer once per tick.
#[derive(Clone, Copy, Debug)]
pub struct Survey<'a> {
    /// Frozen ground truth consulted by sight lines.
    pub ground_truth: LayoutView<'a>,
    /// Layout currently shown to the player, consulted for movement.
    pub visible: LayoutView<'a>,
    /// Location of the real treasure, once placed.
    pub treasure: Option<CellCoord>,
}
