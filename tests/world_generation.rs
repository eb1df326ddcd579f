//! World generator placement invariants

use std::collections::HashSet;

use beast_cave::core::types::Coord;
use beast_cave::world::{WorldGenerator, GRID_HEIGHT, GRID_WIDTH};
use beast_cave::{GameConfig, GameError, GameSession};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_generated_worlds_respect_placement_rules(seed in any::<u64>()) {
        let mut generator = WorldGenerator::new(&GameConfig::seeded(seed)).unwrap();
        let world = generator.generate().unwrap();

        prop_assert_eq!(world.grid.count_where(|c| c.has_pit), 2);
        prop_assert_eq!(world.grid.count_where(|c| c.has_beast), 1);
        prop_assert_eq!(world.grid.count_where(|c| c.has_treasure), 1);
        prop_assert_eq!(world.pits.len(), 2);

        // No cell holds more than one item, and the start cell holds none
        let origin = world.grid.get(Coord::ORIGIN).unwrap();
        prop_assert!(!origin.is_occupied());
        for (_, cell) in world.grid.iter() {
            let items = [cell.has_pit, cell.has_beast, cell.has_treasure]
                .iter()
                .filter(|f| **f)
                .count();
            prop_assert!(items <= 1);
        }

        let mut all: HashSet<Coord> = world.pits.iter().copied().collect();
        all.insert(world.beast.position);
        all.insert(world.treasure);
        prop_assert_eq!(all.len(), 4);
        prop_assert!(!all.contains(&Coord::ORIGIN));
        prop_assert!(all.iter().all(|c| world.grid.in_bounds(*c)));
    }

    #[test]
    fn prop_fresh_session_starts_clean(seed in any::<u64>()) {
        let session = GameSession::new(GameConfig::seeded(seed)).unwrap();
        let snapshot = session.snapshot();

        prop_assert_eq!(snapshot.score, 0);
        prop_assert_eq!(snapshot.agent.position, Coord::ORIGIN);
        prop_assert_eq!(snapshot.cells.len(), GRID_WIDTH * GRID_HEIGHT);
        prop_assert_eq!(snapshot.cells.iter().filter(|c| c.visited).count(), 1);
        prop_assert!(snapshot.cells.iter().all(|c| c.occupant.is_none()));
        prop_assert!(session.world().beast.alive);
    }
}

#[test]
fn test_unseeded_generators_still_valid() {
    let mut generator = WorldGenerator::new(&GameConfig::default()).unwrap();
    for _ in 0..50 {
        let layout = generator.generate_layout().unwrap();
        assert!(layout.validate(GRID_WIDTH, GRID_HEIGHT).is_ok());
    }
}

#[test]
fn test_overfull_plan_fails_at_construction() {
    let config = GameConfig {
        pit_count: 20,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameSession::new(config),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_pit_count_is_fixed_at_two() {
    for pit_count in [0, 1, 3] {
        let config = GameConfig {
            pit_count,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameSession::new(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn test_seed_reproduces_session_sequence() {
    let mut a = GameSession::new(GameConfig::seeded(77)).unwrap();
    let mut b = GameSession::new(GameConfig::seeded(77)).unwrap();
    for _ in 0..3 {
        assert_eq!(a.world().layout(), b.world().layout());
        a.new_session().unwrap();
        b.new_session().unwrap();
    }
}
