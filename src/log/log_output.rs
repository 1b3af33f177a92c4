use std::{
    fmt,
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Shared handle on the single stream a logger writes to.
///
/// Cloning is cheap; all clones write to the same stream. The stream is
/// flushed when the last clone is dropped, and closed along with it.
#[derive(Clone)]
pub struct LogOutput {
    inner: Arc<Mutex<SinkInner>>,
}

struct SinkInner {
    out: Box<dyn Write + Send>,
}

impl Drop for SinkInner {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

impl LogOutput {
    pub fn new<W: Write + Send + 'static>(out: W) -> Self {
        Self::from_boxed(Box::new(out))
    }

    pub fn from_boxed(out: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SinkInner { out })),
        }
    }

    /// Writes `line` followed by a newline, then flushes.
    ///
    /// I/O errors are dropped: a failing sink never takes the caller down.
    pub fn write_line(&self, line: &str) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(guard.out, "{line}");
        let _ = guard.out.flush();
    }

    pub fn flush(&self) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = guard.out.flush();
    }

    /// True when both handles refer to the same underlying stream.
    #[must_use]
    pub fn same_stream(&self, other: &LogOutput) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogOutput")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::memory_sink::MemorySink;
    use std::io;

    #[test]
    fn write_line_appends_newline() {
        let sink = MemorySink::new();
        let out = LogOutput::new(sink.clone());
        out.write_line("first");
        out.write_line("second");
        assert_eq!(sink.contents(), "first\nsecond\n");
    }

    #[test]
    fn clones_share_one_stream() {
        let sink = MemorySink::new();
        let a = LogOutput::new(sink.clone());
        let b = a.clone();
        assert!(a.same_stream(&b));
        assert!(!a.same_stream(&LogOutput::new(io::sink())));
        b.write_line("via clone");
        assert_eq!(sink.lines(), vec!["via clone".to_owned()]);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn write_errors_are_swallowed() {
        let out = LogOutput::new(Broken);
        out.write_line("lost");
        out.flush();
    }
}
