// ABOUTME: Log directory maintenance: listing, sizing, age-based cleanup, and export.
// ABOUTME: Operates on the *.log files the debug logger leaves in its directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Context;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A log file found in the log directory.
#[derive(Debug, Clone, Serialize)]
pub struct LogFileInfo {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    /// Last modification time, RFC 3339.
    pub modified: String,
    #[serde(skip)]
    modified_at: SystemTime,
}

/// All visible `.log` files in `dir`, newest first. A missing directory yields an empty list.
pub fn list_log_files(dir: &Path) -> anyhow::Result<Vec<LogFileInfo>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/*.log",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options).context("invalid log directory pattern")? {
        let Ok(path) = entry else { continue };
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let modified_at = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        files.push(LogFileInfo {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            size: metadata.len(),
            modified: DateTime::<Local>::from(modified_at).to_rfc3339(),
            modified_at,
            path,
        });
    }

    files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    Ok(files)
}

/// Combined size in bytes of every log file in `dir`.
pub fn total_size(dir: &Path) -> anyhow::Result<u64> {
    Ok(list_log_files(dir)?.iter().map(|f| f.size).sum())
}

/// Remove logs last modified more than `max_age` ago. Returns how many were removed.
pub fn clean_old_logs(dir: &Path, max_age: chrono::Duration) -> anyhow::Result<usize> {
    let cutoff = Local::now() - max_age;
    let mut removed = 0;
    for file in list_log_files(dir)? {
        let modified = DateTime::<Local>::from(file.modified_at);
        if modified < cutoff {
            match fs::remove_file(&file.path) {
                Ok(()) => removed += 1,
                Err(e) => eprintln!("Warning: failed to remove {}: {}", file.name, e),
            }
        }
    }
    Ok(removed)
}

/// Remove every log file in `dir`. Returns how many were removed.
pub fn clear_all_logs(dir: &Path) -> anyhow::Result<usize> {
    let mut removed = 0;
    for file in list_log_files(dir)? {
        fs::remove_file(&file.path)
            .with_context(|| format!("failed to remove {}", file.path.display()))?;
        removed += 1;
    }
    Ok(removed)
}

/// Copy all logs into a fresh `mousecape_logs_<timestamp>` directory under `dest`.
///
/// Returns `None` when there is nothing to export.
pub fn export_logs(dir: &Path, dest: &Path) -> anyhow::Result<Option<PathBuf>> {
    let files = list_log_files(dir)?;
    if files.is_empty() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let bundle = dest.join(format!("mousecape_logs_{}", timestamp));
    fs::create_dir_all(&bundle)
        .with_context(|| format!("failed to create {}", bundle.display()))?;

    for file in &files {
        fs::copy(&file.path, bundle.join(&file.name))
            .with_context(|| format!("failed to copy {}", file.path.display()))?;
    }
    Ok(Some(bundle))
}
