// ABOUTME: Checks that repeated init never leaks log file descriptors.
// ABOUTME: Counts /proc/self/fd, so this lives alone in its own test binary.
#![cfg(all(target_os = "linux", any(debug_assertions, feature = "always-on")))]

use std::fs;

use capelog::{Logger, LoggerConfig};

fn open_fds() -> usize {
    fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn init_twice_and_close_release_all_handles() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LoggerConfig {
        banner: false,
        ..LoggerConfig::in_dir(tmp.path())
    };
    let logger = Logger::with_console(config, None);

    let before_init = open_fds();
    logger.init().unwrap();
    let after_first = open_fds();
    assert_eq!(after_first, before_init + 1, "init should open exactly one file");

    logger.init().unwrap();
    logger.init().unwrap();
    assert_eq!(open_fds(), after_first, "repeat init must reuse the open handle");

    logger.close();
    assert_eq!(open_fds(), before_init, "close should release the handle");
}
