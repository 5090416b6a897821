// ABOUTME: Entry point for capelog: inspect and maintain the Mousecape debug logs.
// ABOUTME: Parses CLI args, loads config, and dispatches to the logger or retention helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use capelog::logger::global;
use capelog::{Config, debug_log, retention};

#[derive(Debug, Parser)]
#[command(name = "capelog", version, about = "Mousecape debug log utility")]
struct Cli {
    /// Use this log directory instead of the configured one.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the log directory.
    Path,
    /// List log files, newest first.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the combined size of all log files.
    Size,
    /// Remove logs older than the retention window.
    Clean {
        #[arg(long)]
        hours: Option<u64>,
    },
    /// Remove every log file.
    Clear,
    /// Copy all logs into a timestamped folder under DEST.
    Export { dest: PathBuf },
    /// Open a session, record MESSAGE, and close it again.
    Write {
        #[arg(required = true)]
        message: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(dir) = cli.dir {
        config.logger.directory = Some(dir);
    }
    let dir = config.logger.logs_dir();

    match cli.command {
        Command::Path => println!("{}", dir.display()),
        Command::List { json } => {
            let files = retention::list_log_files(&dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                for file in &files {
                    println!("{}\t{}\t{}", file.modified, file.size, file.name);
                }
            }
        }
        Command::Size => println!("{}", retention::total_size(&dir)?),
        Command::Clean { hours } => {
            let hours = hours.unwrap_or(config.logger.retention_hours);
            let max_age = i64::try_from(hours)
                .ok()
                .and_then(chrono::Duration::try_hours)
                .ok_or_else(|| anyhow::anyhow!("retention of {} hours is out of range", hours))?;
            let removed = retention::clean_old_logs(&dir, max_age)?;
            println!("removed {} log file(s)", removed);
        }
        Command::Clear => {
            let removed = retention::clear_all_logs(&dir)?;
            println!("removed {} log file(s)", removed);
        }
        Command::Export { dest } => match retention::export_logs(&dir, &dest)? {
            Some(bundle) => println!("{}", bundle.display()),
            None => println!("no logs to export"),
        },
        Command::Write { message } => {
            if !capelog::Logger::is_active() {
                eprintln!("Warning: debug logging is compiled out of this build");
            }
            global::init_with(config.logger);
            debug_log!("{}", message.join(" "));
            if let Some(path) = global::log_path() {
                eprintln!("logged to {}", path.display());
            }
            global::close();
        }
    }

    Ok(())
}
