#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bootstrap system that prepares a Treasure Hunt board and drives the expedition.
//!
//! Preparation builds the walled grid, places the player and keeps proposing
//! treasure sites until one lands on a path. The returned [`Prepared`] board
//! still shows the real treasure; [`Expedition::begin`] hides it among
//! candidates before the first tick.

mod config;
mod expedition;

use thiserror::Error;
use treasure_hunt_core::{CellCoord, Command, Event, PlacementError};
use treasure_hunt_system_exploration::Explorer;
use treasure_hunt_system_placement::{SiteSource, TreasurePlacement};
use treasure_hunt_world::{self as world, query, GridError, World};

pub use config::Config;
pub use expedition::{Expedition, Outcome, TickReport};

/// Upper bound on treasure proposals before giving up on the board.
const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Errors that prevent a run from starting.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The configuration text could not be parsed.
    #[error("could not parse configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    /// The grid could not be constructed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The player could not be placed at the configured start.
    #[error("player cannot start at {cell}: {reason}")]
    StartRejected {
        /// Configured start cell.
        cell: CellCoord,
        /// Reason reported by the world.
        reason: PlacementError,
    },
    /// No interior path cell accepted the treasure.
    #[error("no interior path accepted the treasure after {attempts} attempts")]
    NoTreasureSite {
        /// Number of sites proposed before giving up.
        attempts: u32,
    },
}

/// Board ready for an expedition, with the treasure still in plain sight.
#[derive(Debug)]
pub struct Prepared {
    /// World holding the walled grid, the player and the treasure.
    pub world: World,
    /// Explorer standing on the configured start cell.
    pub explorer: Explorer,
    /// Cell chosen for the treasure.
    pub treasure: CellCoord,
    /// Number of sites proposed before one was accepted.
    pub attempts: u32,
}

/// Builds the board described by `config`, drawing treasure sites from `sites`.
pub fn prepare<S: SiteSource>(config: &Config, sites: S) -> Result<Prepared, BootstrapError> {
    config.validate()?;

    let dimensions = config.dimensions();
    let mut world = World::build(dimensions, &config.obstacles)?;
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::PlacePlayer { cell: config.start },
        &mut events,
    );
    if let Some(reason) = events.iter().find_map(|event| match event {
        Event::PlacementRejected { reason, .. } => Some(*reason),
        _ => None,
    }) {
        return Err(BootstrapError::StartRejected {
            cell: config.start,
            reason,
        });
    }

    if query::interior_path_cells(&world).is_empty() {
        return Err(BootstrapError::NoTreasureSite { attempts: 0 });
    }

    let mut placement = TreasurePlacement::new(sites);
    events.clear();
    let treasure = loop {
        let mut commands = Vec::new();
        placement.handle(&events, dimensions, &mut commands);
        if let Some(cell) = placement.placed() {
            break cell;
        }
        if placement.attempts() > MAX_PLACEMENT_ATTEMPTS {
            return Err(BootstrapError::NoTreasureSite {
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        }

        events.clear();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }
    };

    tracing::info!(
        %treasure,
        attempts = placement.attempts(),
        width = dimensions.width(),
        height = dimensions.height(),
        "board prepared"
    );

    Ok(Prepared {
        world,
        explorer: Explorer::new(config.start, config.heading_policy),
        treasure,
        attempts: placement.attempts(),
    })
}
