//! Console logging
//!
//! Routes the `log` facade and panics to the browser console.

use std::sync::Once;

use log::{Level, LevelFilter};

static INIT: Once = Once::new();

/// Installs the console logger. Later calls leave the first logger in place.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(console_level(level)));
    });
}

/// Reports panics through `console.error` instead of the opaque `unreachable` trap.
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Level handed to the console logger for a configured filter.
///
/// `Off` has no level of its own and falls back to `Info`.
fn console_level(level: LevelFilter) -> Level {
    level.to_level().unwrap_or(Level::Info)
}
