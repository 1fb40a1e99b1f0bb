#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use solo_battleship::{init_logging, terminal, Game, GameConfig, GameStatus, ShipSpec};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play(GameArgs),
    /// Generate a board and print it fully revealed.
    Layout(GameArgs),
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "JSON file with board_size, max_attempts, roster and placement_budget")]
    config: Option<PathBuf>,
    #[arg(long)]
    board_size: Option<usize>,
    #[arg(long)]
    attempts: Option<u32>,
    #[arg(long = "ship", value_name = "NAME:SIZE:COUNT", help = "Replace the roster (repeatable)")]
    ships: Vec<ShipSpec>,
}

#[cfg(feature = "std")]
impl GameArgs {
    /// Defaults, then the config file, then individual flags.
    fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.board_size {
            config.board_size = size;
        }
        if let Some(attempts) = self.attempts {
            config.max_attempts = attempts;
        }
        if !self.ships.is_empty() {
            config.roster = self.ships.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (board will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = args.config()?;
            let mut rng = args.rng();
            let mut game = Game::new(&config, &mut rng)?;
            println!(
                "Sink the fleet! {} attempt(s) allowed. Enter targets like A1.",
                config.max_attempts
            );
            match terminal::run_stdio(&mut game)? {
                GameStatus::Ongoing => println!("Game abandoned."),
                GameStatus::Won | GameStatus::Lost => {}
            }
        }
        Commands::Layout(args) => {
            let config = args.config()?;
            let mut rng = args.rng();
            let game = Game::new(&config, &mut rng)?;
            print!("{}", terminal::render_board(&game, true));
            print!("{}", terminal::render_remaining(&game));
        }
    }
    Ok(())
}
