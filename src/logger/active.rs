// ABOUTME: The debug-build Logger: a mutex-guarded log session plus a console sink.
// ABOUTME: Init/write/log_path/close never fail outward; file errors degrade to console-only.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::LoggerConfig;

use super::session::{LogSession, format_line};

type Console = Box<dyn Write + Send>;

struct State {
    session: Option<LogSession>,
    console: Option<Console>,
}

impl State {
    /// Emit a line to the console first, then the file, so both see the same order.
    fn emit(&mut self, line: &str) {
        if let Some(console) = self.console.as_mut() {
            let _ = console.write_all(line.as_bytes());
            let _ = console.flush();
        }
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.append(line) {
                eprintln!("Warning: failed to write log file: {}", e);
            }
        }
    }
}

/// Debug logger owning at most one log session.
///
/// All operations serialize through one lock, so the logger can be shared
/// across threads by reference or in an `Arc`. A write with no open session
/// goes to the console only.
pub struct Logger {
    config: LoggerConfig,
    state: Mutex<State>,
}

impl Logger {
    /// Create a logger with no open session. Console output goes to stdout
    /// unless `config.console` is off.
    pub fn new(config: LoggerConfig) -> Self {
        let console: Option<Console> = if config.console {
            Some(Box::new(io::stdout()))
        } else {
            None
        };
        Self::with_console(config, console)
    }

    /// Create a logger that mirrors lines into `console` instead of stdout.
    pub fn with_console(config: LoggerConfig, console: Option<Console>) -> Self {
        Self {
            config,
            state: Mutex::new(State {
                session: None,
                console,
            }),
        }
    }

    pub const fn is_active() -> bool {
        true
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open the log session, reusing the current one if already open.
    ///
    /// Returns the log file path, or `None` if the file could not be opened.
    #[track_caller]
    pub fn init(&self) -> Option<PathBuf> {
        match self.try_init() {
            Ok(path) => Some(path),
            Err(e) => {
                eprintln!("Warning: failed to open debug log: {:#}", e);
                None
            }
        }
    }

    /// Like [`Logger::init`], but hands back the error instead of printing it.
    #[track_caller]
    pub fn try_init(&self) -> anyhow::Result<PathBuf> {
        let location = Location::caller();
        let mut state = self.lock();
        if let Some(session) = state.session.as_ref() {
            return Ok(session.path().to_path_buf());
        }

        let session = LogSession::open(&self.config)?;
        let path = session.path().to_path_buf();
        let header = session.header_lines();
        state.session = Some(session);
        for line in header {
            state.emit(&format_line(location, &line));
        }
        Ok(path)
    }

    /// Format and record one message. Prefer the `session_log!` macro.
    #[track_caller]
    pub fn write(&self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        let message = match args.as_str() {
            Some(s) => std::borrow::Cow::Borrowed(s),
            None => std::borrow::Cow::Owned(args.to_string()),
        };
        let line = format_line(location, &message);
        self.lock().emit(&line);
    }

    /// Path of the open log file, if any.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.lock()
            .session
            .as_ref()
            .map(|s| s.path().to_path_buf())
    }

    /// Write the end marker to the file, flush, and release it. Safe to call repeatedly.
    #[track_caller]
    pub fn close(&self) {
        let location = Location::caller();
        let Some(mut session) = self.lock().session.take() else {
            return;
        };
        if session.has_banner() {
            if let Err(e) = session.append(&format_line(location, "=== Log End ===")) {
                eprintln!("Warning: failed to write log file: {}", e);
            }
        }
        if let Err(e) = session.finish() {
            eprintln!("Warning: failed to close debug log: {}", e);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}
