use crate::log::log_handler::LogHandler;

/// Keeps a category enabled while discarding everything sent to it.
#[derive(Debug, Clone, Default)]
pub struct NoopLogHandler;

impl LogHandler for NoopLogHandler {
    #[inline]
    fn handle(&self, _condition: bool, _msg: &str) {}
}
