use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use solo_battleship::{Cell, Game, GameConfig, ShipSpec};

fn touching(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_ships_fit_and_never_touch(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::new(&config, &mut rng).unwrap();
        let n = config.board_size;

        prop_assert_eq!(game.ships().len(), 7);
        for ship in game.ships() {
            prop_assert_eq!(ship.size(), config.roster[ship.spec_index()].size);
            for &(r, c) in ship.cells() {
                prop_assert!(r < n && c < n);
                prop_assert_eq!(game.grid().get(r, c).unwrap(), Cell::Ship);
            }
        }
        for (i, a) in game.ships().iter().enumerate() {
            for b in &game.ships()[i + 1..] {
                for &p in a.cells() {
                    for &q in b.cells() {
                        prop_assert!(!touching(p, q), "{:?} touches {:?}", p, q);
                    }
                }
            }
        }
    }

    #[test]
    fn hint_counts_sum_to_fleet_cells(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::new(&config, &mut rng).unwrap();
        let total = config.total_ship_cells();

        let rows: usize = (0..config.board_size).map(|r| game.grid().row_ship_count(r).unwrap()).sum();
        let cols: usize = (0..config.board_size).map(|c| game.grid().col_ship_count(c).unwrap()).sum();
        prop_assert_eq!(total, 22);
        prop_assert_eq!(rows, total);
        prop_assert_eq!(cols, total);
        prop_assert_eq!(game.row_hints().iter().sum::<usize>(), total);
        prop_assert_eq!(game.col_hints().iter().sum::<usize>(), total);
    }

    #[test]
    fn custom_rosters_place_every_instance(
        seed in any::<u64>(),
        size in 1usize..=3,
        count in 1usize..=4,
    ) {
        let config = GameConfig {
            board_size: 10,
            roster: vec![ShipSpec::new("Skiff", size, count)],
            ..GameConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::new(&config, &mut rng).unwrap();
        prop_assert_eq!(game.ships().len(), count);
        prop_assert_eq!(game.grid().count(Cell::Ship), size * count);
    }
}
