use treasure_hunt_core::{CellCoord, Command, Event};
use treasure_hunt_system_exploration::{Explorer, Progress};
use treasure_hunt_world::{self as world, query, World};

/// Final result of an expedition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The explorer sighted the treasure.
    Found {
        /// Location of the treasure.
        cell: CellCoord,
        /// Ticks taken to find it.
        ticks: usize,
    },
    /// The explorer ran out of headings, or out of ticks.
    Stuck {
        /// Cell the player ended on.
        at: CellCoord,
        /// Ticks spent before giving up.
        ticks: usize,
    },
}

impl Outcome {
    /// Number of ticks the expedition lasted.
    #[must_use]
    pub const fn ticks(&self) -> usize {
        match self {
            Self::Found { ticks, .. } | Self::Stuck { ticks, .. } => *ticks,
        }
    }

    const fn progress(self) -> Progress {
        match self {
            Self::Found { cell, .. } => Progress::Found(cell),
            Self::Stuck { .. } => Progress::Stuck,
        }
    }
}

/// Summary of a single tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// One-based tick number.
    pub tick: usize,
    /// Progress the explorer reported.
    pub progress: Progress,
    /// Events the world emitted while applying this tick's commands.
    pub events: Vec<Event>,
    /// Set once the expedition has ended.
    pub outcome: Option<Outcome>,
}

/// Drives the explorer against the world one tick at a time.
#[derive(Debug)]
pub struct Expedition {
    world: World,
    explorer: Explorer,
    events: Vec<Event>,
    ticks: usize,
    tick_limit: usize,
    outcome: Option<Outcome>,
}

impl Expedition {
    /// Creates an expedition over a prepared world.
    ///
    /// The run gives up after one tick per grid cell.
    #[must_use]
    pub fn new(world: World, explorer: Explorer) -> Self {
        let tick_limit = query::dimensions(&world).cell_count();
        Self {
            world,
            explorer,
            events: Vec::new(),
            ticks: 0,
            tick_limit,
            outcome: None,
        }
    }

    /// Hides the treasure and returns the events it produced.
    ///
    /// Calling this again is harmless; the world rejects a second hide.
    pub fn begin(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, Command::HideTreasure, &mut events);
        events
    }

    /// Read-only access to the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the explorer.
    #[must_use]
    pub const fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Result of the run, once it has ended.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Runs one look-then-move cycle.
    ///
    /// Hides the treasure first if [`Expedition::begin`] was never called.
    /// After the run ends further ticks change nothing.
    pub fn tick(&mut self) -> TickReport {
        if let Some(outcome) = self.outcome {
            return TickReport {
                tick: self.ticks,
                progress: outcome.progress(),
                events: Vec::new(),
                outcome: Some(outcome),
            };
        }

        if !query::is_hidden(&self.world) {
            let _ = self.begin();
        }

        let mut commands = Vec::new();
        let progress = self
            .explorer
            .handle(&self.events, query::survey(&self.world), &mut commands);

        self.events.clear();
        for command in commands {
            world::apply(&mut self.world, command, &mut self.events);
        }
        self.ticks += 1;

        let outcome = match progress {
            Progress::Found(cell) => Some(Outcome::Found {
                cell,
                ticks: self.ticks,
            }),
            Progress::Stuck => Some(self.stuck()),
            Progress::Exploring if self.ticks >= self.tick_limit => {
                tracing::warn!(ticks = self.ticks, "tick limit reached");
                Some(self.stuck())
            }
            Progress::Exploring => None,
        };

        tracing::debug!(tick = self.ticks, ?progress, events = self.events.len(), "tick");
        if let Some(outcome) = outcome {
            tracing::info!(?outcome, "expedition finished");
            self.outcome = Some(outcome);
        }

        TickReport {
            tick: self.ticks,
            progress,
            events: self.events.clone(),
            outcome,
        }
    }

    /// Ticks until the run ends, handing each report to `observer`.
    pub fn run<F>(&mut self, mut observer: F) -> Outcome
    where
        F: FnMut(&World, &TickReport),
    {
        loop {
            let report = self.tick();
            observer(&self.world, &report);
            if let Some(outcome) = report.outcome {
                return outcome;
            }
        }
    }

    fn stuck(&self) -> Outcome {
        Outcome::Stuck {
            at: query::player(&self.world).unwrap_or_else(|| self.explorer.position()),
            ticks: self.ticks,
        }
    }
}
