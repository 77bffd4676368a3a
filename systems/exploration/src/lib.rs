#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic exploration system that sweeps sight lines and steers the player.
//!
//! The explorer only ever advances up, then right, then down. Each heading is
//! abandoned for the next one when blocked, and there is no way back, so a run
//! always ends either with the treasure in sight or with the explorer stuck.

use treasure_hunt_core::{
    CellCoord, CellKind, Command, Direction, Event, Heading, HeadingPolicy, LayoutView, Survey,
};
use treasure_hunt_world::scanner::{self, SightRanges};

/// What the explorer observed while looking around its cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sighting {
    /// Location of the real treasure, when one of the rays reached it.
    pub treasure: Option<CellCoord>,
    /// Plain paths seen in every direction, merged in sweep order.
    pub path: Vec<CellCoord>,
}

/// Progress reported by the explorer after each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The explorer requested a move and will keep going.
    Exploring,
    /// The treasure was sighted at the provided cell.
    Found(CellCoord),
    /// Every heading is blocked.
    Stuck,
}

impl Progress {
    /// Reports whether the run is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Exploring)
    }
}

/// Pure system driving the player's one-way movement automaton.
#[derive(Clone, Debug)]
pub struct Explorer {
    position: CellCoord,
    heading: Heading,
    policy: HeadingPolicy,
    found_treasure: bool,
    ranges: SightRanges,
    concluded: Option<Progress>,
}

impl Explorer {
    /// Creates an explorer standing at `start`, heading up.
    #[must_use]
    pub fn new(start: CellCoord, policy: HeadingPolicy) -> Self {
        Self {
            position: start,
            heading: Heading::Up,
            policy,
            found_treasure: false,
            ranges: SightRanges::default(),
            concluded: None,
        }
    }

    /// Cell the explorer believes it occupies.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Heading the explorer will try next.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Reports whether the treasure has been sighted.
    #[must_use]
    pub const fn found_treasure(&self) -> bool {
        self.found_treasure
    }

    /// Run lengths recorded by the most recent sweep.
    #[must_use]
    pub const fn ranges(&self) -> SightRanges {
        self.ranges
    }

    /// Looks along all four axes from the current cell.
    ///
    /// Rays travel over the ground truth. The found flag is raised only when
    /// a sighted treasure matches the survey's real treasure. Nothing in the
    /// world is mutated; callers apply the returned path cells themselves.
    pub fn see(&mut self, survey: &Survey<'_>) -> Sighting {
        let panorama = scanner::sweep(survey.ground_truth, self.position);
        self.ranges = panorama.ranges;

        let treasure = panorama
            .treasure
            .filter(|cell| survey.treasure == Some(*cell));
        if treasure.is_some() {
            self.found_treasure = true;
        }

        if self.policy == HeadingPolicy::LongestSight {
            self.anticipate_turn();
        }

        Sighting {
            treasure,
            path: panorama.path,
        }
    }

    /// Picks the next cell under the current heading, turning when blocked.
    ///
    /// A blocked heading is replaced by its successor and the new heading is
    /// evaluated within the same call. Returns `None` once stuck. The position
    /// is left unchanged until the world confirms the move.
    pub fn step(&mut self, visible: LayoutView<'_>) -> Option<CellCoord> {
        while let Some(direction) = self.heading.direction() {
            let candidate = self.position.offset(direction);
            let open = match candidate.and_then(|cell| visible.kind(cell)) {
                Some(CellKind::Path | CellKind::Treasure | CellKind::Player) => true,
                Some(CellKind::Obstacle) | None => false,
            };

            if open {
                return candidate;
            }

            let next = self.heading.next();
            tracing::trace!(from = ?self.heading, to = ?next, "heading blocked");
            self.heading = next;
        }

        None
    }

    /// Consumes world events and the current survey to emit one tick of commands.
    ///
    /// Once the treasure is found or the explorer is stuck, further calls emit
    /// nothing and keep reporting the same terminal progress.
    pub fn handle(
        &mut self,
        events: &[Event],
        survey: Survey<'_>,
        out: &mut Vec<Command>,
    ) -> Progress {
        for event in events {
            match event {
                Event::PlayerPlaced { cell } => self.position = *cell,
                Event::PlayerMoved { to, .. } => self.position = *to,
                _ => {}
            }
        }

        if let Some(progress) = self.concluded {
            return progress;
        }

        let sighting = self.see(&survey);
        if !sighting.path.is_empty() {
            out.push(Command::RevealPathCells {
                cells: sighting.path.clone(),
            });
            out.push(Command::RuleOutLocations {
                cells: sighting.path,
            });
        }

        if let Some(cell) = sighting.treasure {
            out.push(Command::ClaimTreasure { cell });
            out.push(Command::RevealAll { except: cell });
            return self.conclude(Progress::Found(cell));
        }

        match self.step(survey.visible) {
            Some(to) => {
                out.push(Command::MovePlayer {
                    from: self.position,
                    to,
                });
                Progress::Exploring
            }
            None => self.conclude(Progress::Stuck),
        }
    }

    fn anticipate_turn(&mut self) {
        let longer = |from: Direction, to: Direction| self.ranges.get(to) > self.ranges.get(from);

        let next = match self.heading {
            Heading::Up if longer(Direction::Up, Direction::Right) => Heading::Right,
            Heading::Right if longer(Direction::Right, Direction::Down) => Heading::Down,
            _ => return,
        };
        tracing::trace!(from = ?self.heading, to = ?next, "heading skipped toward longer sight");
        self.heading = next;
    }

    fn conclude(&mut self, progress: Progress) -> Progress {
        self.concluded = Some(progress);
        progress
    }
}
