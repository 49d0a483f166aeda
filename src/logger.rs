//! A `log` facade backend that renders records on the VGA console.
//!
//! Records print as `[LEVEL] message` lines through the global writer,
//! so driver bring-up messages land on screen next to ordinary output.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::println;

struct VgaLogger;

static LOGGER: VgaLogger = VgaLogger;

impl log::Log for VgaLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `Info` level. Call once during
/// bring-up, before anything logs; adjust later with
/// [`log::set_max_level`].
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}
