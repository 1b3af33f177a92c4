//! catlog is a small category logger.
//!
//! Messages are filed under one of five fixed categories (VERBOSE, INFO,
//! WARNING, ERROR, FATAL). Each category owns a replaceable handler; the
//! stock handlers stamp the message with the local time and the category
//! label and write it as one line to a single output stream.
//!
//! ```
//! use catlog::log::{log_output::LogOutput, logger::Logger, memory_sink::MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::new();
//! assert!(logger.init(Some(LogOutput::new(sink.clone()))));
//!
//! logger.info(true, "Hello");
//! assert!(sink.contents().ends_with("INFO:   \t\tHello.\n"));
//! ```

/// INI-style configuration files.
pub mod config;
/// Errors raised while setting a logger up.
pub mod error;
/// Categories, handlers, formatting and the logger itself.
pub mod log;
