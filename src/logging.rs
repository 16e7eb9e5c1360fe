#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable holding the engine's log level.
pub const LOG_ENV: &str = "SINK_FLEET_LOG";

const ENGINE_TARGET: &str = "sink_fleet";

/// Records from other crates are only shown at this level or above.
const FOREIGN_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a `SINK_FLEET_LOG` value. Unset or unparsable falls back to `info`.
pub fn engine_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Whether a record at `level` from `target` passes when the engine runs at
/// `engine`. Dependencies are held to `warn` unless the engine is quieter.
pub fn passes(target: &str, level: Level, engine: LevelFilter) -> bool {
    let limit = if is_engine_target(target) {
        engine
    } else {
        engine.min(FOREIGN_LEVEL)
    };
    level <= limit
}

fn is_engine_target(target: &str) -> bool {
    target == ENGINE_TARGET || target.starts_with("sink_fleet::")
}

/// `sink_fleet::game` prints as `game`; foreign targets print in full.
fn short_target(target: &str) -> &str {
    target.strip_prefix("sink_fleet::").unwrap_or(target)
}

/// Writes `[sink-fleet] LEVEL module - message` lines to stderr.
struct FleetLogger {
    engine: LevelFilter,
}

impl log::Log for FleetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        passes(metadata.target(), metadata.level(), self.engine)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "[sink-fleet] {:<5} {} - {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the engine's logger, with the level taken from `SINK_FLEET_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace`, `off`). Defaults to `info`.
/// Calling it twice is harmless.
pub fn init_logging() {
    let engine = engine_level(env::var(LOG_ENV).ok().as_deref());
    let logger = Box::new(FleetLogger { engine });
    let _ = log::set_boxed_logger(logger).map(|()| log::set_max_level(engine));
}
