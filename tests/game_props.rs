use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use solo_battleship::{AttackResult, Cell, Game, GameConfig, GameStatus};

fn random_game(seed: u64, attempts: u32) -> Game {
    let config = GameConfig {
        max_attempts: attempts,
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::new(&config, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Attempts only drop on open water; ship counts only drop on sinks;
    /// terminal states line up with the counters reaching zero.
    #[test]
    fn counters_are_monotonic(
        seed in any::<u64>(),
        attempts in 1u32..12,
        targets in prop::collection::vec((0usize..9, 0usize..9), 1..120),
    ) {
        let mut game = random_game(seed, attempts);
        for (r, c) in targets {
            let cell = game.grid().get(r, c).unwrap();
            let status = game.status();
            let attempts_before = game.attempts_remaining();
            let ships_before = game.ships_remaining();

            let res = game.attack(r, c).unwrap();

            prop_assert!(game.attempts_remaining() <= attempts_before);
            prop_assert!(game.ships_remaining() <= ships_before);
            if status == GameStatus::Ongoing && cell == Cell::Empty {
                prop_assert_eq!(game.attempts_remaining(), attempts_before - 1);
            } else {
                prop_assert_eq!(game.attempts_remaining(), attempts_before);
            }
            if matches!(res, AttackResult::HitAndSunk(_)) {
                prop_assert_eq!(game.ships_remaining(), ships_before - 1);
            }
            prop_assert_eq!(game.status() == GameStatus::Won, game.ships_remaining() == 0);
            prop_assert_eq!(game.status() == GameStatus::Lost, game.attempts_remaining() == 0);
        }
    }

    #[test]
    fn attack_is_idempotent(
        seed in any::<u64>(),
        row in 0usize..9,
        col in 0usize..9,
    ) {
        let mut game = random_game(seed, 6);
        game.attack(row, col).unwrap();
        let grid = game.grid().clone();
        let attempts = game.attempts_remaining();
        let ships = game.ships_remaining();
        let status = game.status();

        game.attack(row, col).unwrap();
        prop_assert_eq!(game.grid(), &grid);
        prop_assert_eq!(game.attempts_remaining(), attempts);
        prop_assert_eq!(game.ships_remaining(), ships);
        prop_assert_eq!(game.status(), status);
    }

    /// Resolved cells never change back.
    #[test]
    fn resolved_cells_stay_resolved(
        seed in any::<u64>(),
        targets in prop::collection::vec((0usize..9, 0usize..9), 1..80),
    ) {
        let mut game = random_game(seed, 40);
        for (r, c) in targets {
            let before = game.grid().clone();
            game.attack(r, c).unwrap();
            for ((pos, old), (_, new)) in before.iter().zip(game.grid().iter()) {
                if old.is_resolved() {
                    prop_assert_eq!(old, new, "cell {:?} changed", pos);
                }
            }
        }
    }

    #[test]
    fn sinking_every_ship_wins(seed in any::<u64>()) {
        let mut game = random_game(seed, 1);
        let cells: Vec<_> = game.ships().iter().flat_map(|s| s.cells().to_vec()).collect();
        let total = cells.len();
        for (i, (r, c)) in cells.into_iter().enumerate() {
            let res = game.attack(r, c).unwrap();
            if i + 1 == total {
                prop_assert_eq!(res, AttackResult::Won);
            } else {
                prop_assert_ne!(res, AttackResult::Won);
            }
        }
        prop_assert_eq!(game.attempts_remaining(), 1);
        prop_assert_eq!(game.grid().count(Cell::Miss), 0);
        prop_assert_eq!(game.grid().count(Cell::Hit), total);
    }
}
