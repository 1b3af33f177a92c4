use std::sync::{Arc, Mutex, PoisonError};

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::log::{log_category::Category, logger::Logger};

/// Adapter feeding records from the `log` facade into a [`Logger`].
///
/// Levels map onto categories as Trace/Debug to VERBOSE, Info to INFO,
/// Warn to WARNING and Error to ERROR. Nothing maps to FATAL.
///
/// Handlers run with the logger locked; a handler that itself logs
/// through the facade will deadlock.
pub struct LogBridge {
    logger: Arc<Mutex<Logger>>,
}

impl LogBridge {
    #[must_use]
    pub fn new(logger: Arc<Mutex<Logger>>) -> Self {
        Self { logger }
    }

    #[must_use]
    pub fn category_for(level: Level) -> Category {
        match level {
            Level::Error => Category::Error,
            Level::Warn => Category::Warning,
            Level::Info => Category::Info,
            Level::Debug | Level::Trace => Category::Verbose,
        }
    }

    /// Registers the bridge as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if another backend has already been installed.
    pub fn install(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        logger.is_enabled(Self::category_for(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let msg = record.args().to_string();
        let logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        logger.emit(Self::category_for(record.level()), true, &msg);
    }

    fn flush(&self) {
        let logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(output) = logger.output() {
            output.flush();
        }
    }
}
