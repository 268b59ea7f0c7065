//! Activity log filtering.
//!
//! The threshold comes from `RUST_LOG`, read the way `env_logger` reads it: a
//! comma-separated list of `target=level` or bare `level` directives. A directive
//! for this crate wins over the global one.

use std::env;
use std::str::FromStr;

/// Crate name as it appears in `RUST_LOG` targets
const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[strum(serialize = "warn", serialize = "warning")]
    Warn,
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Threshold described by a `RUST_LOG` value. Unparseable values mean `Info`.
pub fn threshold_from_directives(directives: &str) -> LogLevel {
    let mut global = None;
    for directive in directives.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if target.trim() == LOG_TARGET => {
                if let Ok(level) = LogLevel::from_str(level.trim()) {
                    return level;
                }
            }
            Some(_) => {}
            None => {
                if let Ok(level) = LogLevel::from_str(directive) {
                    global = Some(level);
                }
            }
        }
    }
    global.unwrap_or(LogLevel::Info)
}

/// Threshold from the `RUST_LOG` environment variable.
pub fn display_threshold() -> LogLevel {
    env::var("RUST_LOG")
        .map(|value| threshold_from_directives(&value))
        .unwrap_or(LogLevel::Info)
}
