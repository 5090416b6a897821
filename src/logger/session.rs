// ABOUTME: The open log session: one timestamped .log file plus its path.
// ABOUTME: Handles file creation, the header banner, line formatting, and the end marker.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::config::LoggerConfig;
use crate::retention;

const BANNER_RULE: &str = "===============================";

/// Format one log line: `[HH:MM:SS.mmm] [file.rs:42] message`, newline included.
pub fn format_line(location: &Location<'_>, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let file = Path::new(location.file())
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| location.file().into());
    format!("[{}] [{}:{}] {}\n", timestamp, file, location.line(), message)
}

/// Create `<stem>.log`, never reusing an existing file. A taken name gets a
/// `_1`, `_2`, ... suffix.
fn create_unique(dir: &Path, stem: &str) -> anyhow::Result<(File, PathBuf)> {
    for attempt in 0u32..1000 {
        let name = match attempt {
            0 => format!("{}.log", stem),
            n => format!("{}_{}.log", stem, n),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to open log file {}", path.display()));
            }
        }
    }
    anyhow::bail!("no free log file name for {} in {}", stem, dir.display())
}

/// An open log file and the path it lives at.
pub struct LogSession {
    writer: BufWriter<File>,
    path: PathBuf,
    banner: bool,
}

impl LogSession {
    /// Create the log directory, drop expired logs, and open a new timestamped file.
    pub fn open(config: &LoggerConfig) -> anyhow::Result<Self> {
        let dir = config.logs_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        if let Some(max_age) = config.retention() {
            if let Err(e) = retention::clean_old_logs(&dir, max_age) {
                eprintln!("Warning: failed to clean old logs: {}", e);
            }
        }

        let stem = format!(
            "{}_{}",
            config.file_prefix,
            Local::now().format("%Y-%m-%d_%H-%M-%S-%3f")
        );
        let (file, path) = create_unique(&dir, &stem)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            banner: config.banner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an already formatted line and flush it to disk.
    pub fn append(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Header lines written right after the file is opened.
    pub fn header_lines(&self) -> Vec<String> {
        if !self.banner {
            return Vec::new();
        }
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        let home = dirs::home_dir()
            .map(|h| h.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        vec![
            "=== Mousecape Debug Log ===".to_string(),
            format!("Time: {}", Local::now().to_rfc3339()),
            format!("OS: {} {}", std::env::consts::OS, std::env::consts::ARCH),
            format!("User: {}", user),
            format!("Home: {}", home),
            format!(
                "App: {} {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            format!("Log file: {}", self.path.display()),
            BANNER_RULE.to_string(),
        ]
    }

    pub fn has_banner(&self) -> bool {
        self.banner
    }

    /// Flush and sync to disk. Consumes the session, closing the file.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(())
    }
}
