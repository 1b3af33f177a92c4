use crate::log::{
    log_category::Category, log_format::format_entry, log_handler::LogHandler,
    log_output::LogOutput,
};

/// Handler installed in every enabled slot by [`Logger::init`](crate::log::logger::Logger::init).
///
/// When the condition holds and an output is attached, the message is
/// formatted under the category's uppercase label and written as one line.
#[derive(Debug, Clone)]
pub struct DefaultLogHandler {
    category: Category,
    output: Option<LogOutput>,
}

impl DefaultLogHandler {
    #[must_use]
    pub fn new(category: Category, output: Option<LogOutput>) -> Self {
        Self { category, output }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

impl LogHandler for DefaultLogHandler {
    fn handle(&self, condition: bool, msg: &str) {
        if !condition {
            return;
        }
        if let Some(output) = &self.output {
            output.write_line(&format_entry(Some(self.category.label()), Some(msg)));
        }
    }
}
