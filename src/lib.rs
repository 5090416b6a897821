// ABOUTME: Library root for capelog: the Mousecape debug logger and its log maintenance.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod config;
pub mod logger;
pub mod retention;

pub use config::{Config, LoggerConfig};
pub use logger::Logger;
