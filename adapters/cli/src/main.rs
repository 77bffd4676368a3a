#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that animates a Treasure Hunt expedition in the terminal.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, EnvFilter};
use treasure_hunt_core::{CellCoord, HeadingPolicy};
use treasure_hunt_rendering::{Frame, Presenter, TerminalPresenter, ThreadPacing};
use treasure_hunt_system_bootstrap::{prepare, Config, Expedition, Outcome};
use treasure_hunt_system_placement::RandomSites;
use treasure_hunt_world::{query, World};

/// Command-line arguments for the Treasure Hunt binary.
#[derive(Debug, Parser)]
#[command(name = "treasure-hunt", about = "Watch a player hunt for hidden treasure", version)]
struct CliArgs {
    /// TOML file describing the board; the classic board is used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for treasure placement; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds each frame stays on screen.
    #[arg(long, value_name = "MS", default_value_t = 400)]
    delay_ms: u64,

    /// Milliseconds to linger on the opening frames.
    #[arg(long, value_name = "MS", default_value_t = 4_000)]
    pause_ms: u64,

    /// Only change heading when the next cell is blocked.
    #[arg(long)]
    strict: bool,

    /// Emit debug logs on stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if self.strict {
            config.heading_policy = HeadingPolicy::Strict;
        }
        Ok(config)
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Entry point for the Treasure Hunt command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = args.load_config()?;
    let stdout = io::stdout();
    let mut presenter = TerminalPresenter::new(
        stdout.lock(),
        ThreadPacing,
        Duration::from_millis(args.delay_ms),
    );

    let outcome = play(
        &config,
        args.rng(),
        &mut presenter,
        Duration::from_millis(args.pause_ms),
    )?;
    tracing::info!(?outcome, seed = ?args.seed, "run complete");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn play<P: Presenter>(
    config: &Config,
    rng: ChaCha8Rng,
    presenter: &mut P,
    pause: Duration,
) -> Result<Outcome> {
    let prepared = prepare(config, RandomSites::new(rng)).context("failed to prepare board")?;
    let treasure = prepared.treasure;
    let mut expedition = Expedition::new(prepared.world, prepared.explorer);

    presenter.present(&snapshot(expedition.world()).with_caption(format!(
        "Initial condition, treasure hidden at {treasure}. Wait for it.."
    )))?;
    presenter.hold(pause)?;

    let _ = expedition.begin();
    presenter.present(
        &snapshot(expedition.world()).with_caption("Now it's hidden! Let's go find it!"),
    )?;
    presenter.hold(pause)?;

    loop {
        let report = expedition.tick();
        let frame = snapshot(expedition.world());
        match report.outcome {
            Some(outcome) => {
                presenter.present(&frame.with_caption(describe(outcome, treasure)))?;
                return Ok(outcome);
            }
            None => presenter.present(&frame)?,
        }
    }
}

fn snapshot(world: &World) -> Frame {
    Frame::new(query::render(world))
        .with_candidates(query::possible_locations(world).iter().copied())
        .with_found(query::found_location(world))
}

fn describe(outcome: Outcome, treasure: CellCoord) -> String {
    match outcome {
        Outcome::Found { ticks, .. } => format!("Found after {ticks} ticks."),
        Outcome::Stuck { at, ticks } => {
            format!("Stuck at {at} after {ticks} ticks. The treasure was at {treasure}.")
        }
    }
}
