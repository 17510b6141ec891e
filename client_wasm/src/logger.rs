//! Browser logging: `log` records go to the console, panics too

use log::Level;

/// Install the console logger and the panic hook. Safe to call twice.
pub fn init(level: Level) {
    console_error_panic_hook::set_once();
    // A second call finds the logger already set; keep the first one
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
