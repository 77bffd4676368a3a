#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Treasure Hunt.
//!
//! The world owns two dense layouts over the same `[1, W] × [1, H]` domain:
//! the ground truth consulted by sight lines, and the visible layout that
//! adapters draw. It also tracks the set of cells that may still hide the
//! treasure.

pub mod scanner;

use std::collections::BTreeSet;

use thiserror::Error;
use treasure_hunt_core::{
    CellCoord, CellKind, Command, Event, GridDimensions, PlacementError, MAX_GRID_EDGE,
    MIN_GRID_EDGE,
};

/// Errors raised while constructing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid edge is too short to enclose an interior, or too long to allocate.
    #[error(
        "grid edges must be between {min} and {max} cells, got {width}x{height}",
        min = MIN_GRID_EDGE,
        max = MAX_GRID_EDGE
    )]
    InvalidDimensions {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// A supplied coordinate lies outside the grid.
    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// Offending coordinate.
        cell: CellCoord,
        /// Number of columns in the grid.
        width: u32,
        /// Number of rows in the grid.
        height: u32,
    },
}

/// Represents the authoritative Treasure Hunt world state.
#[derive(Clone, Debug)]
pub struct World {
    dimensions: GridDimensions,
    ground_truth: Vec<CellKind>,
    visible: Vec<CellKind>,
    candidates: BTreeSet<CellCoord>,
    player: Option<CellCoord>,
    treasure: Option<CellCoord>,
    found: Option<CellCoord>,
    hidden: bool,
}

impl World {
    /// Builds a walled grid with the provided custom obstacles.
    ///
    /// Every cell starts as a path, the outer rows and columns become
    /// obstacles, and then each custom obstacle is written in turn.
    pub fn build(dimensions: GridDimensions, obstacles: &[CellCoord]) -> Result<Self, GridError> {
        if !dimensions.is_supported() {
            return Err(GridError::InvalidDimensions {
                width: dimensions.width(),
                height: dimensions.height(),
            });
        }

        let mut visible = vec![CellKind::Path; dimensions.cell_count()];
        for (cell, slot) in dimensions.cells().zip(visible.iter_mut()) {
            if dimensions.is_boundary(cell) {
                *slot = CellKind::Obstacle;
            }
        }

        for &cell in obstacles {
            let index = dimensions.index(cell).ok_or(GridError::OutOfBounds {
                cell,
                width: dimensions.width(),
                height: dimensions.height(),
            })?;
            visible[index] = CellKind::Obstacle;
        }

        Ok(Self {
            dimensions,
            ground_truth: visible.clone(),
            visible,
            candidates: BTreeSet::new(),
            player: None,
            treasure: None,
            found: None,
            hidden: false,
        })
    }

    /// Writes the player marker at `cell`.
    pub fn place_player(&mut self, cell: CellCoord) -> Result<(), PlacementError> {
        if self.player.is_some_and(|current| current != cell) {
            return Err(PlacementError::Occupied);
        }
        self.place(CellKind::Player, cell)?;
        self.player = Some(cell);
        Ok(())
    }

    /// Writes the real treasure at `cell`.
    ///
    /// Only one treasure exists per run; once placed, further placements at a
    /// different cell are refused.
    pub fn place_treasure(&mut self, cell: CellCoord) -> Result<(), PlacementError> {
        if self.treasure.is_some_and(|current| current != cell) {
            return Err(PlacementError::Occupied);
        }
        self.place(CellKind::Treasure, cell)?;
        self.treasure = Some(cell);
        Ok(())
    }

    /// Writes `kind` into the visible layout if the placement policy allows it.
    ///
    /// Marker bookkeeping lives in [`World::place_player`] and
    /// [`World::place_treasure`]; this only touches the layout.
    fn place(&mut self, kind: CellKind, cell: CellCoord) -> Result<(), PlacementError> {
        let index = self.admits(kind, cell)?;
        self.visible[index] = kind;
        Ok(())
    }

    /// Checks the placement policy without mutating anything.
    ///
    /// The decision depends on the kind currently visible at the destination:
    /// obstacles refuse every write, paths accept treasure, player and path
    /// writes, candidate markers accept any write unless they are the real
    /// treasure, and the player marker only yields to a path. The real
    /// treasure is protected both before and after hiding.
    fn admits(&self, kind: CellKind, cell: CellCoord) -> Result<usize, PlacementError> {
        let index = self
            .dimensions
            .index(cell)
            .ok_or(PlacementError::OutOfBounds)?;

        match (self.visible[index], kind) {
            (CellKind::Obstacle, _) => Err(PlacementError::Blocked),
            (_, CellKind::Obstacle) => Err(PlacementError::Occupied),
            (CellKind::Path, CellKind::Path | CellKind::Treasure | CellKind::Player) => Ok(index),
            (CellKind::Treasure, _) => {
                if self.treasure == Some(cell) || self.ground_truth[index] == CellKind::Treasure {
                    Err(PlacementError::Concealed)
                } else {
                    Ok(index)
                }
            }
            (CellKind::Player, CellKind::Path) => Ok(index),
            (CellKind::Player, CellKind::Treasure | CellKind::Player) => {
                Err(PlacementError::Occupied)
            }
        }
    }

    /// Freezes the ground truth and conceals the treasure among candidates.
    ///
    /// Returns the number of candidates laid out, or `None` when the transform
    /// already ran.
    pub fn hide_treasure(&mut self) -> Option<usize> {
        if self.hidden {
            return None;
        }
        self.hidden = true;
        self.ground_truth.copy_from_slice(&self.visible);

        for (cell, slot) in self.dimensions.cells().zip(self.visible.iter_mut()) {
            if *slot == CellKind::Path {
                let _ = self.candidates.insert(cell);
                *slot = CellKind::Treasure;
            }
        }

        Some(self.candidates.len())
    }

    /// Turns candidate markers at the provided cells back into paths.
    ///
    /// Returns the cells that actually changed.
    pub fn reveal_path_cells(&mut self, cells: &[CellCoord]) -> Vec<CellCoord> {
        let mut revealed = Vec::new();
        for &cell in cells {
            let Some(index) = self.dimensions.index(cell) else {
                continue;
            };
            if self.visible[index] != CellKind::Treasure {
                continue;
            }
            if self.place(CellKind::Path, cell).is_ok() {
                revealed.push(cell);
            }
        }
        revealed
    }

    /// Removes the provided cells from the possible-location set.
    ///
    /// Returns the cells that were still candidates.
    pub fn update_possible_locations(&mut self, cells: &[CellCoord]) -> Vec<CellCoord> {
        cells
            .iter()
            .copied()
            .filter(|cell| self.candidates.remove(cell))
            .collect()
    }

    /// Empties the possible-location set.
    pub fn clear_possible_locations(&mut self) {
        self.candidates.clear();
    }

    /// Records the treasure as found at `cell` if it is the real treasure.
    pub fn claim(&mut self, cell: CellCoord) -> bool {
        if self.treasure != Some(cell) {
            return false;
        }
        self.clear_possible_locations();
        self.found = Some(cell);
        true
    }

    /// Converts every candidate marker except `except` back into a path.
    ///
    /// Returns the number of markers cleared. Calling it again is a no-op.
    pub fn reveal_all(&mut self, except: CellCoord) -> usize {
        let mut cleared = 0;
        for (cell, slot) in self.dimensions.cells().zip(self.visible.iter_mut()) {
            if *slot == CellKind::Treasure && cell != except {
                *slot = CellKind::Path;
                cleared += 1;
            }
        }
        cleared
    }

    /// Moves the player marker from `from` to `to`.
    ///
    /// The destination is checked before anything is written, so a rejected
    /// move leaves the layout untouched.
    pub fn move_marker(&mut self, from: CellCoord, to: CellCoord) -> Result<(), PlacementError> {
        if self.player != Some(from) {
            return Err(PlacementError::MissingPlayer);
        }
        let _ = self.admits(CellKind::Player, to)?;
        self.place(CellKind::Path, from)?;
        self.place(CellKind::Player, to)?;
        self.player = Some(to);
        Ok(())
    }

    /// Draws the visible layout as rows of glyphs, highest row first.
    #[must_use]
    pub fn render(&self) -> String {
        let width = usize::try_from(self.dimensions.width()).unwrap_or(0);
        if width == 0 {
            return String::new();
        }
        let rows: Vec<String> = self
            .visible
            .chunks(width)
            .rev()
            .map(|row| row.iter().map(|kind| kind.glyph()).collect())
            .collect();
        rows.join("\n")
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::PlacePlayer { cell } => match world.place_player(cell) {
            Ok(()) => out_events.push(Event::PlayerPlaced { cell }),
            Err(reason) => reject(CellKind::Player, cell, reason, out_events),
        },
        Command::PlaceTreasure { cell } => match world.place_treasure(cell) {
            Ok(()) => out_events.push(Event::TreasurePlaced { cell }),
            Err(reason) => reject(CellKind::Treasure, cell, reason, out_events),
        },
        Command::HideTreasure => match world.hide_treasure() {
            Some(candidates) => out_events.push(Event::TreasureHidden { candidates }),
            None => {
                tracing::debug!("hide transform already applied");
                out_events.push(Event::HideRejected);
            }
        },
        Command::RevealPathCells { cells } => {
            let cells = world.reveal_path_cells(&cells);
            if !cells.is_empty() {
                out_events.push(Event::CellsRevealed { cells });
            }
        }
        Command::RuleOutLocations { cells } => {
            let cells = world.update_possible_locations(&cells);
            if !cells.is_empty() {
                out_events.push(Event::LocationsRuledOut { cells });
            }
        }
        Command::MovePlayer { from, to } => match world.move_marker(from, to) {
            Ok(()) => out_events.push(Event::PlayerMoved { from, to }),
            Err(reason) => reject(CellKind::Player, to, reason, out_events),
        },
        Command::ClaimTreasure { cell } => {
            if world.claim(cell) {
                out_events.push(Event::TreasureClaimed { cell });
            } else {
                tracing::debug!(%cell, "claim does not match the treasure");
                out_events.push(Event::ClaimRejected { cell });
            }
        }
        Command::RevealAll { except } => {
            let cleared = world.reveal_all(except);
            out_events.push(Event::MapRevealed {
                treasure: except,
                cleared,
            });
        }
    }
}

fn reject(kind: CellKind, cell: CellCoord, reason: PlacementError, out_events: &mut Vec<Event>) {
    tracing::debug!(?kind, %cell, %reason, "placement rejected");
    out_events.push(Event::PlacementRejected { kind, cell, reason });
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::collections::BTreeSet;

    use super::World;
    use treasure_hunt_core::{CellCoord, CellKind, GridDimensions, LayoutView, Survey};

    /// Dimensions of the grid.
    #[must_use]
    pub fn dimensions(world: &World) -> GridDimensions {
        world.dimensions
    }

    /// Cell currently hosting the player marker.
    #[must_use]
    pub fn player(world: &World) -> Option<CellCoord> {
        world.player
    }

    /// Location of the real treasure, once placed.
    #[must_use]
    pub fn treasure(world: &World) -> Option<CellCoord> {
        world.treasure
    }

    /// Location recorded when the treasure was claimed.
    #[must_use]
    pub fn found_location(world: &World) -> Option<CellCoord> {
        world.found
    }

    /// Reports whether the hide transform has run.
    #[must_use]
    pub fn is_hidden(world: &World) -> bool {
        world.hidden
    }

    /// Cells that may still hide the treasure, in coordinate order.
    #[must_use]
    pub fn possible_locations(world: &World) -> &BTreeSet<CellCoord> {
        &world.candidates
    }

    /// Read-only view of the ground truth.
    #[must_use]
    pub fn ground_truth(world: &World) -> LayoutView<'_> {
        LayoutView::new(&world.ground_truth, world.dimensions)
    }

    /// Read-only view of the visible layout.
    #[must_use]
    pub fn visible(world: &World) -> LayoutView<'_> {
        LayoutView::new(&world.visible, world.dimensions)
    }

    /// Bundles the views the explorer consults each tick.
    #[must_use]
    pub fn survey(world: &World) -> Survey<'_> {
        Survey {
            ground_truth: ground_truth(world),
            visible: visible(world),
            treasure: world.treasure,
        }
    }

    /// Interior cells currently visible as plain paths.
    #[must_use]
    pub fn interior_path_cells(world: &World) -> Vec<CellCoord> {
        visible(world)
            .iter()
            .filter(|(cell, kind)| {
                *kind == CellKind::Path && !world.dimensions.is_boundary(*cell)
            })
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Glyph rendering of the visible layout.
    #[must_use]
    pub fn render(world: &World) -> String {
        world.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_obstacles() -> Vec<CellCoord> {
        vec![
            CellCoord::new(3, 2),
            CellCoord::new(3, 4),
            CellCoord::new(4, 4),
            CellCoord::new(5, 4),
            CellCoord::new(5, 3),
            CellCoord::new(7, 3),
        ]
    }

    fn classic_world() -> World {
        World::build(GridDimensions::new(8, 6), &classic_obstacles()).expect("valid grid")
    }

    #[test]
    fn build_renders_classic_board() {
        let world = classic_world();

        assert_eq!(
            world.render(),
            "########\n\
             #......#\n\
             #.###..#\n\
             #...#.##\n\
             #.#....#\n\
             ########"
        );
    }

    #[test]
    fn build_rejects_degenerate_dimensions() {
        let error = World::build(GridDimensions::new(2, 6), &[]).expect_err("too narrow");
        assert_eq!(
            error,
            GridError::InvalidDimensions {
                width: 2,
                height: 6
            }
        );
    }

    #[test]
    fn build_rejects_oversized_dimensions() {
        let error = World::build(GridDimensions::new(u32::MAX, u32::MAX), &[])
            .expect_err("too large to allocate");
        assert_eq!(
            error,
            GridError::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX
            }
        );

        let error = World::build(GridDimensions::new(MAX_GRID_EDGE + 1, 3), &[])
            .expect_err("one column too many");
        assert!(matches!(error, GridError::InvalidDimensions { .. }));
    }

    #[test]
    fn build_rejects_obstacles_outside_grid() {
        let error = World::build(GridDimensions::new(5, 5), &[CellCoord::new(6, 2)])
            .expect_err("obstacle outside grid");
        assert!(matches!(error, GridError::OutOfBounds { cell, .. } if cell == CellCoord::new(6, 2)));

        let error = World::build(GridDimensions::new(5, 5), &[CellCoord::new(0, 2)])
            .expect_err("zero column is outside the grid");
        assert!(matches!(error, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn placement_on_obstacle_is_blocked() {
        let mut world = classic_world();
        assert_eq!(
            world.place_treasure(CellCoord::new(3, 2)),
            Err(PlacementError::Blocked)
        );
        assert_eq!(
            world.place_player(CellCoord::new(1, 1)),
            Err(PlacementError::Blocked)
        );
        assert_eq!(query::treasure(&world), None);
    }

    #[test]
    fn placement_outside_grid_is_out_of_bounds() {
        let mut world = classic_world();
        assert_eq!(
            world.place_player(CellCoord::new(9, 2)),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn player_marker_only_yields_to_path() {
        let mut world = classic_world();
        let start = CellCoord::new(2, 2);
        world.place_player(start).expect("start is a path");

        assert_eq!(
            world.place(CellKind::Treasure, start),
            Err(PlacementError::Occupied)
        );
        assert_eq!(
            world.place(CellKind::Player, start),
            Err(PlacementError::Occupied)
        );
        assert_eq!(world.place(CellKind::Path, start), Ok(()));
    }

    #[test]
    fn real_treasure_is_protected_after_hiding() {
        let mut world = classic_world();
        let treasure = CellCoord::new(6, 5);
        let decoy = CellCoord::new(2, 5);
        world.place_treasure(treasure).expect("path cell");
        let _ = world.hide_treasure();

        assert_eq!(
            world.place(CellKind::Path, treasure),
            Err(PlacementError::Concealed)
        );
        assert_eq!(world.place(CellKind::Path, decoy), Ok(()));
        assert_eq!(world.place(CellKind::Treasure, decoy), Ok(()));
        assert_eq!(world.place(CellKind::Player, decoy), Ok(()));
    }

    #[test]
    fn real_treasure_is_protected_before_hiding() {
        let mut world = classic_world();
        let treasure = CellCoord::new(2, 4);
        let mut events = Vec::new();
        apply(&mut world, Command::PlaceTreasure { cell: treasure }, &mut events);
        apply(&mut world, Command::PlacePlayer { cell: treasure }, &mut events);

        assert_eq!(
            events,
            vec![
                Event::TreasurePlaced { cell: treasure },
                Event::PlacementRejected {
                    kind: CellKind::Player,
                    cell: treasure,
                    reason: PlacementError::Concealed,
                },
            ]
        );
        assert_eq!(query::player(&world), None);
        assert_eq!(
            world.place(CellKind::Path, treasure),
            Err(PlacementError::Concealed)
        );
        assert_eq!(
            query::visible(&world).kind(treasure),
            Some(CellKind::Treasure)
        );

        let _ = world.hide_treasure();
        assert_eq!(query::ground_truth(&world).count(CellKind::Treasure), 1);
        assert_eq!(
            query::ground_truth(&world).kind(treasure),
            Some(CellKind::Treasure)
        );
    }

    #[test]
    fn only_one_player_marker_exists() {
        let mut world = classic_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::PlacePlayer {
                cell: CellCoord::new(2, 2),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::PlacePlayer {
                cell: CellCoord::new(4, 2),
            },
            &mut events,
        );

        assert_eq!(
            events.last(),
            Some(&Event::PlacementRejected {
                kind: CellKind::Player,
                cell: CellCoord::new(4, 2),
                reason: PlacementError::Occupied,
            })
        );
        assert_eq!(query::player(&world), Some(CellCoord::new(2, 2)));
        assert_eq!(query::visible(&world).count(CellKind::Player), 1);
    }

    #[test]
    fn second_treasure_elsewhere_is_refused() {
        let mut world = classic_world();
        world
            .place_treasure(CellCoord::new(6, 5))
            .expect("path cell");
        assert_eq!(
            world.place_treasure(CellCoord::new(2, 5)),
            Err(PlacementError::Occupied)
        );
        assert_eq!(query::treasure(&world), Some(CellCoord::new(6, 5)));
    }

    #[test]
    fn hide_treasure_snapshots_and_marks_candidates() {
        let mut world = classic_world();
        world.place_player(CellCoord::new(2, 2)).expect("path");
        world.place_treasure(CellCoord::new(6, 5)).expect("path");
        let before: Vec<_> = query::visible(&world).iter().collect();
        let expected: BTreeSet<_> = before
            .iter()
            .filter(|(_, kind)| *kind == CellKind::Path)
            .map(|(cell, _)| *cell)
            .collect();

        let candidates = world.hide_treasure().expect("first hide");

        assert_eq!(candidates, expected.len());
        assert_eq!(query::possible_locations(&world), &expected);
        let truth: Vec<_> = query::ground_truth(&world).iter().collect();
        assert_eq!(truth, before);
        for cell in &expected {
            assert_eq!(query::visible(&world).kind(*cell), Some(CellKind::Treasure));
        }
        assert!(!expected.contains(&CellCoord::new(6, 5)));
        assert_eq!(world.hide_treasure(), None);
    }

    #[test]
    fn reveal_path_cells_only_touches_candidates() {
        let mut world = classic_world();
        world.place_player(CellCoord::new(2, 2)).expect("path");
        world.place_treasure(CellCoord::new(6, 5)).expect("path");
        let _ = world.hide_treasure();

        let revealed = world.reveal_path_cells(&[
            CellCoord::new(2, 3),
            CellCoord::new(3, 2),
            CellCoord::new(2, 2),
            CellCoord::new(6, 5),
        ]);

        assert_eq!(revealed, vec![CellCoord::new(2, 3)]);
        assert_eq!(
            query::visible(&world).kind(CellCoord::new(2, 2)),
            Some(CellKind::Player)
        );
        assert_eq!(
            query::visible(&world).kind(CellCoord::new(6, 5)),
            Some(CellKind::Treasure)
        );
    }

    #[test]
    fn ruling_out_removes_candidates_once() {
        let mut world = classic_world();
        world.place_treasure(CellCoord::new(6, 5)).expect("path");
        let _ = world.hide_treasure();
        let cell = CellCoord::new(2, 3);

        assert_eq!(world.update_possible_locations(&[cell]), vec![cell]);
        assert!(world.update_possible_locations(&[cell]).is_empty());
        assert!(!query::possible_locations(&world).contains(&cell));
    }

    #[test]
    fn reveal_all_is_idempotent() {
        let mut world = classic_world();
        let treasure = CellCoord::new(6, 5);
        world.place_player(CellCoord::new(2, 2)).expect("path");
        world.place_treasure(treasure).expect("path");
        let _ = world.hide_treasure();

        let cleared = world.reveal_all(treasure);
        let once = world.render();
        assert!(cleared > 0);
        assert_eq!(world.reveal_all(treasure), 0);
        assert_eq!(world.render(), once);
        assert_eq!(query::visible(&world).count(CellKind::Treasure), 1);
    }

    #[test]
    fn move_marker_swaps_player_and_path() {
        let mut world = classic_world();
        let start = CellCoord::new(2, 2);
        let next = CellCoord::new(2, 3);
        world.place_player(start).expect("path");
        world.place_treasure(CellCoord::new(6, 5)).expect("path");
        let _ = world.hide_treasure();

        world.move_marker(start, next).expect("decoy accepts the player");

        assert_eq!(query::player(&world), Some(next));
        assert_eq!(query::visible(&world).kind(start), Some(CellKind::Path));
        assert_eq!(query::visible(&world).kind(next), Some(CellKind::Player));
    }

    #[test]
    fn rejected_move_leaves_layout_untouched() {
        let mut world = classic_world();
        let start = CellCoord::new(2, 2);
        world.place_player(start).expect("path");
        let before = world.render();

        assert_eq!(
            world.move_marker(start, CellCoord::new(3, 2)),
            Err(PlacementError::Blocked)
        );
        assert_eq!(
            world.move_marker(CellCoord::new(2, 3), CellCoord::new(2, 4)),
            Err(PlacementError::MissingPlayer)
        );
        assert_eq!(world.render(), before);
        assert_eq!(query::player(&world), Some(start));
    }

    #[test]
    fn apply_publishes_events_for_each_command() {
        let mut world = classic_world();
        let mut events = Vec::new();
        let treasure = CellCoord::new(6, 5);

        apply(
            &mut world,
            Command::PlacePlayer {
                cell: CellCoord::new(2, 2),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::PlaceTreasure {
                cell: CellCoord::new(3, 2),
            },
            &mut events,
        );
        apply(&mut world, Command::PlaceTreasure { cell: treasure }, &mut events);
        apply(&mut world, Command::HideTreasure, &mut events);
        apply(&mut world, Command::HideTreasure, &mut events);
        apply(
            &mut world,
            Command::ClaimTreasure {
                cell: CellCoord::new(2, 5),
            },
            &mut events,
        );
        apply(&mut world, Command::ClaimTreasure { cell: treasure }, &mut events);

        assert_eq!(
            events,
            vec![
                Event::PlayerPlaced {
                    cell: CellCoord::new(2, 2)
                },
                Event::PlacementRejected {
                    kind: CellKind::Treasure,
                    cell: CellCoord::new(3, 2),
                    reason: PlacementError::Blocked,
                },
                Event::TreasurePlaced { cell: treasure },
                Event::TreasureHidden { candidates: 16 },
                Event::HideRejected,
                Event::ClaimRejected {
                    cell: CellCoord::new(2, 5)
                },
                Event::TreasureClaimed { cell: treasure },
            ]
        );
        assert_eq!(query::found_location(&world), Some(treasure));
        assert!(query::possible_locations(&world).is_empty());
    }

    #[test]
    fn interior_path_cells_skip_markers_and_walls() {
        let mut world = classic_world();
        let all = query::interior_path_cells(&world);
        assert_eq!(all.len(), 24 - classic_obstacles().len());

        world.place_player(CellCoord::new(2, 2)).expect("path");
        assert_eq!(query::interior_path_cells(&world).len(), all.len() - 1);
    }
}
