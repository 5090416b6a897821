// ABOUTME: Debug logger: console + file log session, compiled in only for debug builds.
// ABOUTME: Release builds get an API-identical inert Logger whose calls inline to nothing.

#[cfg(any(debug_assertions, feature = "always-on"))]
mod active;
#[cfg(not(any(debug_assertions, feature = "always-on")))]
mod inert;
#[cfg(any(debug_assertions, feature = "always-on"))]
pub mod session;

#[cfg(any(debug_assertions, feature = "always-on"))]
pub mod global;
#[cfg(not(any(debug_assertions, feature = "always-on")))]
pub use inert::global;

#[cfg(any(debug_assertions, feature = "always-on"))]
pub use active::Logger;
#[cfg(not(any(debug_assertions, feature = "always-on")))]
pub use inert::Logger;

/// Write a formatted line through an explicit [`Logger`].
///
/// ```no_run
/// use capelog::{Logger, LoggerConfig, session_log};
///
/// let logger = Logger::new(LoggerConfig::default());
/// logger.init();
/// session_log!(logger, "applied cape {}", "com.example.cape");
/// logger.close();
/// ```
#[macro_export]
macro_rules! session_log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.write(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line through the process-wide logger.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::global::write(::std::format_args!($($arg)*))
    };
}
