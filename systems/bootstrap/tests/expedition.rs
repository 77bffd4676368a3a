use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use treasure_hunt_core::{
    CellCoord, CellKind, Event, GridDimensions, HeadingPolicy, PlacementError,
};
use treasure_hunt_system_bootstrap::{prepare, BootstrapError, Config, Expedition, Outcome};
use treasure_hunt_system_placement::{RandomSites, SiteSource};
use treasure_hunt_world::query;

struct ScriptedSites {
    sites: VecDeque<CellCoord>,
}

impl ScriptedSites {
    fn new(sites: &[CellCoord]) -> Self {
        Self {
            sites: sites.iter().copied().collect(),
        }
    }
}

impl SiteSource for ScriptedSites {
    fn next_site(&mut self, _dimensions: GridDimensions) -> CellCoord {
        self.sites.pop_front().expect("script exhausted")
    }
}

fn seeded(seed: u64) -> RandomSites<ChaCha8Rng> {
    RandomSites::new(ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn prepared_board_shows_player_and_treasure() {
    let prepared = prepare(
        &Config::default(),
        ScriptedSites::new(&[CellCoord::new(3, 2), CellCoord::new(6, 5)]),
    )
    .expect("classic board prepares");

    assert_eq!(prepared.treasure, CellCoord::new(6, 5));
    assert_eq!(prepared.attempts, 2);
    assert_eq!(prepared.explorer.position(), CellCoord::new(2, 2));
    assert!(!query::is_hidden(&prepared.world));
    assert_eq!(
        query::render(&prepared.world),
        "########\n#....$.#\n#.###..#\n#...#.##\n#X#....#\n########"
    );
}

#[test]
fn begin_hides_the_treasure_among_candidates() {
    let prepared = prepare(
        &Config::default(),
        ScriptedSites::new(&[CellCoord::new(6, 5)]),
    )
    .expect("classic board prepares");
    let mut expedition = Expedition::new(prepared.world, prepared.explorer);

    let events = expedition.begin();

    assert_eq!(events, vec![Event::TreasureHidden { candidates: 16 }]);
    assert_eq!(
        query::visible(expedition.world()).count(CellKind::Treasure),
        17,
        "sixteen decoys plus the real treasure"
    );
    assert_eq!(expedition.begin(), vec![Event::HideRejected]);
}

#[test]
fn classic_board_finds_a_scripted_treasure() {
    let prepared = prepare(
        &Config::default(),
        ScriptedSites::new(&[CellCoord::new(6, 5)]),
    )
    .expect("classic board prepares");
    let mut expedition = Expedition::new(prepared.world, prepared.explorer);
    let _ = expedition.begin();

    let mut observed = 0;
    let outcome = expedition.run(|_, _| observed += 1);

    match outcome {
        Outcome::Found { cell, ticks } => {
            assert_eq!(cell, CellCoord::new(6, 5));
            assert_eq!(ticks, observed);
        }
        Outcome::Stuck { .. } => panic!("treasure should be found: {outcome:?}"),
    }
    assert_eq!(expedition.outcome(), Some(outcome));
}

#[test]
fn every_seed_ends_within_the_tick_limit() {
    let config = Config::default();
    let limit = config.dimensions().cell_count();

    for seed in 0..64 {
        let prepared = prepare(&config, seeded(seed)).expect("classic board prepares");
        let treasure = prepared.treasure;
        let mut expedition = Expedition::new(prepared.world, prepared.explorer);
        let _ = expedition.begin();

        let outcome = expedition.run(|_, _| {});
        assert!(outcome.ticks() <= limit, "seed {seed} ran {outcome:?}");

        let world = expedition.world();
        let visible = query::visible(world);
        match outcome {
            Outcome::Found { cell, .. } => {
                assert_eq!(cell, treasure);
                assert_eq!(query::found_location(world), Some(treasure));
                assert!(query::possible_locations(world).is_empty());
                assert_eq!(visible.count(CellKind::Treasure), 1);
                assert_eq!(visible.kind(treasure), Some(CellKind::Treasure));
            }
            Outcome::Stuck { at, .. } => {
                assert_eq!(query::player(world), Some(at));
                assert_eq!(query::found_location(world), None);
                assert!(!query::possible_locations(world).contains(&treasure));
            }
        }
    }
}

#[test]
fn walled_off_treasure_leaves_the_explorer_stuck() {
    let config = Config {
        width: 6,
        height: 6,
        start: CellCoord::new(2, 2),
        obstacles: vec![
            CellCoord::new(3, 3),
            CellCoord::new(4, 4),
            CellCoord::new(5, 3),
        ],
        heading_policy: HeadingPolicy::Strict,
    };
    let prepared = prepare(&config, ScriptedSites::new(&[CellCoord::new(4, 3)]))
        .expect("board prepares");
    let mut expedition = Expedition::new(prepared.world, prepared.explorer);

    let outcome = expedition.run(|_, _| {});

    assert_eq!(
        outcome,
        Outcome::Stuck {
            at: CellCoord::new(5, 4),
            ticks: 8,
        }
    );

    let after = expedition.tick();
    assert_eq!(after.outcome, Some(outcome));
    assert!(after.events.is_empty());
}

#[test]
fn start_on_an_obstacle_is_rejected() {
    let config = Config {
        start: CellCoord::new(3, 2),
        ..Config::default()
    };

    let error = prepare(&config, seeded(1)).expect_err("start is blocked");

    assert!(matches!(
        error,
        BootstrapError::StartRejected {
            cell,
            reason: PlacementError::Blocked,
        } if cell == CellCoord::new(3, 2)
    ));
}

#[test]
fn board_without_free_interior_has_no_treasure_site() {
    let config = Config {
        width: 3,
        height: 3,
        start: CellCoord::new(2, 2),
        obstacles: Vec::new(),
        heading_policy: HeadingPolicy::Strict,
    };

    let error = prepare(&config, seeded(1)).expect_err("nowhere to hide");

    assert!(matches!(error, BootstrapError::NoTreasureSite { attempts: 0 }));
}

#[test]
fn obstacle_outside_the_grid_is_a_grid_error() {
    let config = Config {
        obstacles: vec![CellCoord::new(12, 2)],
        ..Config::default()
    };

    let error = prepare(&config, seeded(1)).expect_err("obstacle out of bounds");

    assert!(matches!(error, BootstrapError::Grid(_)));
}
