use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use solo_battleship::{AttackResult, Game, GameConfig};

/// Play one game with random, never-repeated guesses and print a JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [attempts]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig::default();
    if let Some(attempts) = args.get(2) {
        config.max_attempts = attempts.parse()?;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(&config, &mut rng)?;

    let n = config.board_size;
    let mut targets: Vec<(usize, usize)> = (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    targets.shuffle(&mut rng);

    let mut attacks = 0usize;
    let mut sunk = Vec::new();
    for (r, c) in targets {
        if game.status().is_terminal() {
            break;
        }
        match game.attack(r, c)? {
            AttackResult::AlreadyResolved => continue,
            AttackResult::HitAndSunk(name) => sunk.push(name),
            _ => {}
        }
        attacks += 1;
    }

    let result = json!({
        "seed": seed,
        "status": game.status(),
        "attacks": attacks,
        "attempts_remaining": game.attempts_remaining(),
        "ships_sunk": sunk,
        "unrevealed": game.unrevealed(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
