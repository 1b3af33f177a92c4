/// Processes messages routed to one category slot of a logger.
///
/// `condition` is the caller's guard: handlers are expected to do nothing
/// when it is false. Any `Fn(bool, &str)` closure is a handler.
pub trait LogHandler: Send + Sync {
    fn handle(&self, condition: bool, msg: &str);
}

impl<F> LogHandler for F
where
    F: Fn(bool, &str) + Send + Sync,
{
    #[inline]
    fn handle(&self, condition: bool, msg: &str) {
        self(condition, msg);
    }
}
