//! Bridge to the `log` crate facade
//!
//! [`SharedLogger`] puts a [`Logger`] behind a mutex so it can serve as the
//! process-wide `log` backend:
//!
//! ```no_run
//! use rust_channel_logger::prelude::*;
//!
//! let logger = Logger::with_level("app", Severity::Info);
//! SharedLogger::init(logger).expect("no other logger installed");
//!
//! log::info!("server started");
//! ```

use crate::core::{Context, Logger, Severity};
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::{Mutex, MutexGuard};

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

/// The most verbose `log` filter that can still reach `level`.
pub fn level_filter(level: Severity) -> LevelFilter {
    match level {
        Severity::Debug => LevelFilter::Trace,
        Severity::Info | Severity::Notice => LevelFilter::Info,
        Severity::Warning => LevelFilter::Warn,
        _ => LevelFilter::Error,
    }
}

/// A [`Logger`] that can be shared between threads.
pub struct SharedLogger {
    inner: Mutex<Logger>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Mutex::new(logger),
        }
    }

    /// Install as the global `log` backend.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(logger: Logger) -> Result<(), log::SetLoggerError> {
        let max_level = level_filter(logger.level());
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Direct access to the wrapped logger, e.g. to change its level or handlers.
    pub fn lock(&self) -> MutexGuard<'_, Logger> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> Logger {
        self.inner.into_inner()
    }
}

impl Log for SharedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner
            .lock()
            .log_at_this_level(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = Severity::from(record.level());
        let mut logger = self.inner.lock();
        if !logger.log_at_this_level(level) {
            return;
        }

        let context = Context::new().with_field("target", record.target());
        let message = record.args().to_string();
        if let Err(e) = logger.log(level, message, Some(&context)) {
            eprintln!("[LOGGER ERROR] Handler failed for {} record: {}", level, e);
        }
    }

    fn flush(&self) {}
}
