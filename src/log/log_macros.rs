//! Formatting front-ends for [`Logger`](crate::log::logger::Logger).
//!
//! Each macro takes the logger, a condition and `format!` arguments:
//!
//! ```
//! use catlog::log::{log_output::LogOutput, logger::Logger};
//! use catlog::cat_warning;
//!
//! let logger = Logger::with_output(LogOutput::new(std::io::sink()));
//! let retries = 3;
//! cat_warning!(logger, retries > 2, "retried {} times", retries);
//! ```
//!
//! # Feature Flags
//! `cat_verbose!` is controlled by the `log-verbose` cargo feature. Without
//! it the macro expands to `()`, removing the formatting cost entirely.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! cat_emit {
    ($logger:expr, $cat:expr, $cond:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.emit($cat, $cond, &__msg);
    }};
}

/// Routes through the by-name entry point, so unknown names are reported.
#[macro_export]
macro_rules! cat_log {
    ($logger:expr, $name:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($name, &__msg);
    }};
}

/// Initializes the logger and announces it at INFO.
#[macro_export]
macro_rules! log_start {
    ($logger:expr, $dest:expr) => {
        $logger.start(::core::option::Option::Some(
            $crate::log::log_output::LogOutput::new($dest),
        ))
    };
}

// ============================================================================
// 2. CATEGORY-SPECIFIC MACROS
// ============================================================================

#[cfg(feature = "log-verbose")]
#[macro_export]
macro_rules! cat_verbose { ($logger:expr, $cond:expr, $($arg:tt)*) => { $crate::cat_emit!($logger, $crate::log::log_category::Category::Verbose, $cond, $($arg)*) } }

#[cfg(not(feature = "log-verbose"))]
#[macro_export]
macro_rules! cat_verbose {
    ($($arg:tt)*) => {
        ()
    };
}

#[macro_export]
macro_rules! cat_info    { ($logger:expr, $cond:expr, $($arg:tt)*) => { $crate::cat_emit!($logger, $crate::log::log_category::Category::Info, $cond, $($arg)*) } }
#[macro_export]
macro_rules! cat_warning { ($logger:expr, $cond:expr, $($arg:tt)*) => { $crate::cat_emit!($logger, $crate::log::log_category::Category::Warning, $cond, $($arg)*) } }
#[macro_export]
macro_rules! cat_error   { ($logger:expr, $cond:expr, $($arg:tt)*) => { $crate::cat_emit!($logger, $crate::log::log_category::Category::Error, $cond, $($arg)*) } }
#[macro_export]
macro_rules! cat_fatal   { ($logger:expr, $cond:expr, $($arg:tt)*) => { $crate::cat_emit!($logger, $crate::log::log_category::Category::Fatal, $cond, $($arg)*) } }
