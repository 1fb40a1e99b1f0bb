#![cfg(feature = "std")]

//! Text front-end: renders the board with row/column hint counts and reads
//! attacks from stdin.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::common::{AttackResult, Cell, GameStatus};
use crate::game::{Game, GameObserver, UnrevealedShip};
use crate::ship::ShipInstance;

/// Format a coordinate as column letter + 1-based row, e.g. `C7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `C7`-style input into zero-based (row, col). Column letters are
/// case-insensitive. Bounds are left to the game.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::MissRing => '~',
        Cell::Ship if reveal => 'S',
        Cell::Ship | Cell::Empty => '.',
    }
}

/// Render the board with column letters on top, row numbers on the left and
/// the ship count of each row/column as hints. With `reveal`, intact ship
/// segments are drawn as `S`.
pub fn render_board(game: &Game, reveal: bool) -> String {
    let grid = game.grid();
    let n = grid.size();
    let mut out = String::new();
    out.push_str("      ");
    for c in 0..n {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    out.push_str("      ");
    for c in 0..n {
        let _ = write!(out, " {}", game.col_hints()[c]);
    }
    out.push('\n');
    for r in 0..n {
        let _ = write!(out, "{:2} ({})", r + 1, game.row_hints()[r]);
        for c in 0..n {
            let cell = grid.get(r, c).unwrap_or(Cell::Empty);
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// Render the "ships remaining" list.
pub fn render_remaining(game: &Game) -> String {
    let mut out = String::from("Ships remaining:\n");
    for (name, count) in game.remaining_ships() {
        let _ = writeln!(out, "  {}: {}", name, count);
    }
    out
}

/// Collects sinks and the end of the game so `run` can narrate them on
/// its own writer.
#[derive(Default)]
struct Narrator {
    sunk: Vec<String>,
    ended: Option<(GameStatus, Vec<UnrevealedShip>)>,
}

impl GameObserver for Narrator {
    fn ship_sunk(&mut self, ship: &ShipInstance) {
        self.sunk.push(String::from(ship.name()));
    }

    fn game_over(&mut self, status: GameStatus, unrevealed: &[UnrevealedShip]) {
        self.ended = Some((status, unrevealed.to_vec()));
    }
}

impl Narrator {
    /// Write and forget everything collected since the last call.
    fn drain<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for name in self.sunk.drain(..) {
            writeln!(out, "You sank a {}!", name)?;
        }
        match self.ended.take() {
            Some((GameStatus::Won, _)) => writeln!(out, "\nCongratulations! You sank every ship.")?,
            Some((GameStatus::Lost, unrevealed)) => {
                writeln!(out, "\nGame over! You ran out of attempts.")?;
                for ship in unrevealed {
                    let cells: Vec<String> =
                        ship.cells.iter().map(|&(r, c)| coord_to_string(r, c)).collect();
                    writeln!(out, "  {} was at {}", ship.name, cells.join(" "))?;
                }
            }
            Some((GameStatus::Ongoing, _)) | None => {}
        }
        Ok(())
    }
}

/// Play `game` interactively until it ends or input runs out.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: &mut R, out: &mut W) -> anyhow::Result<GameStatus> {
    let mut narrator = Narrator::default();
    while !game.status().is_terminal() {
        write!(out, "\n{}", render_board(game, false))?;
        write!(out, "{}", render_remaining(game))?;
        write!(out, "Attempts left: {}\nAttack: ", game.attempts_remaining())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some((r, c)) = parse_coord(&line) else {
            writeln!(out, "Invalid coordinate, try e.g. A1")?;
            continue;
        };
        match game.attack_with(r, c, &mut narrator) {
            Ok(AttackResult::Miss) => writeln!(out, "{} -> miss", coord_to_string(r, c))?,
            Ok(AttackResult::Hit) => writeln!(out, "{} -> hit", coord_to_string(r, c))?,
            Ok(AttackResult::AlreadyResolved) => {
                writeln!(out, "{} was already attacked", coord_to_string(r, c))?
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        narrator.drain(out)?;
    }
    write!(out, "\n{}", render_board(game, true))?;
    out.flush()?;
    Ok(game.status())
}

/// Play on stdin/stdout.
pub fn run_stdio(game: &mut Game) -> anyhow::Result<GameStatus> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(game, &mut stdin.lock(), &mut stdout.lock())
}
