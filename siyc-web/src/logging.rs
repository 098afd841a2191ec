//! `log` backend writing to the browser console.

use log::LevelFilter;

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let Some(max) = level.to_level() else {
        log::set_max_level(LevelFilter::Off);
        return;
    };
    if console_log::init_with_level(max).is_err() {
        log::set_max_level(level);
        log::debug!("logging: logger already installed");
    }
}
