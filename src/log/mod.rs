pub mod default_log_handler;
#[cfg(feature = "log-bridge")]
pub mod log_bridge;
pub mod log_category;
pub mod log_format;
pub mod log_handler;
pub mod log_macros;
pub mod log_output;
pub mod logger;
pub mod memory_sink;
pub mod noop_log_handler;
pub use log_category::Category;
pub use log_handler::LogHandler;
pub use logger::Logger;
pub use noop_log_handler::NoopLogHandler;
