// ABOUTME: Process-wide logger facade: one Logger per process, set up on first init.
// ABOUTME: Backs the debug_log! macro for code that has no Logger reference at hand.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::config::{Config, LoggerConfig};

use super::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, if [`init`] or [`init_with`] has run.
pub fn logger() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Initialize the process-wide logger from the user config file.
#[track_caller]
pub fn init() -> Option<PathBuf> {
    if let Some(logger) = GLOBAL.get() {
        return logger.init();
    }
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load capelog config: {}", e);
        Config::default()
    });
    init_with(config.logger)
}

/// Initialize the process-wide logger with an explicit config.
///
/// The first call fixes the config for the life of the process. Later calls
/// reopen a session on the same logger if it was closed.
#[track_caller]
pub fn init_with(config: LoggerConfig) -> Option<PathBuf> {
    GLOBAL.get_or_init(|| Logger::new(config)).init()
}

/// Write one line through the process-wide logger.
///
/// Before init this goes to stdout only.
#[track_caller]
pub fn write(args: fmt::Arguments<'_>) {
    match GLOBAL.get() {
        Some(logger) => logger.write(args),
        None => {
            let location = std::panic::Location::caller();
            print!("{}", super::session::format_line(location, &args.to_string()));
        }
    }
}

/// Path of the process-wide log file, if a session is open.
pub fn log_path() -> Option<PathBuf> {
    GLOBAL.get().and_then(Logger::log_path)
}

/// Close the process-wide session. The logger itself stays registered.
#[track_caller]
pub fn close() {
    if let Some(logger) = GLOBAL.get() {
        logger.close();
    }
}
