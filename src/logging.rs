#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Log level named by `SOLO_BATTLESHIP_LOG`, or `default` when the variable
/// is unset or unparsable.
pub fn log_level_from_env(default: LevelFilter) -> LevelFilter {
    env::var("SOLO_BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger. Messages go to stderr so they never mix with
/// the board on stdout.
pub fn init_logging(default: LevelFilter) {
    let level = log_level_from_env(default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
