// ABOUTME: The release-build Logger: same surface as the debug one, every call a no-op.
// ABOUTME: Zero-sized and fully inlined so release binaries carry no logging code.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::config::LoggerConfig;

/// Release stand-in for the debug logger. Holds nothing, does nothing.
#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    #[inline(always)]
    pub fn new(_config: LoggerConfig) -> Self {
        Self
    }

    #[inline(always)]
    pub fn with_console(
        _config: LoggerConfig,
        _console: Option<Box<dyn Write + Send>>,
    ) -> Self {
        Self
    }

    pub const fn is_active() -> bool {
        false
    }

    #[inline(always)]
    pub fn init(&self) -> Option<PathBuf> {
        None
    }

    #[inline(always)]
    pub fn try_init(&self) -> anyhow::Result<PathBuf> {
        anyhow::bail!("debug logging is compiled out of this build")
    }

    /// Discards `args` without formatting them.
    #[inline(always)]
    pub fn write(&self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn log_path(&self) -> Option<PathBuf> {
        None
    }

    #[inline(always)]
    pub fn close(&self) {}
}

/// Release stand-in for the process-wide facade. Never loads config or
/// registers a logger.
pub mod global {
    use std::fmt;
    use std::path::PathBuf;

    use super::Logger;
    use crate::config::LoggerConfig;

    #[inline(always)]
    pub fn logger() -> Option<&'static Logger> {
        None
    }

    #[inline(always)]
    pub fn init() -> Option<PathBuf> {
        None
    }

    #[inline(always)]
    pub fn init_with(_config: LoggerConfig) -> Option<PathBuf> {
        None
    }

    #[inline(always)]
    pub fn write(_args: fmt::Arguments<'_>) {}

    #[inline(always)]
    pub fn log_path() -> Option<PathBuf> {
        None
    }

    #[inline(always)]
    pub fn close() {}
}
