use std::sync::Arc;

use catlog::log::log_category::Category;
use catlog::log::log_format::{MAX_MESSAGE_CHARS, format_entry};
use catlog::log::log_output::LogOutput;
use catlog::log::logger::{INVALID_CATEGORY_MSG, Logger, SharedHandler};
use catlog::log::memory_sink::MemorySink;

fn started() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let mut logger = Logger::new();
    assert!(logger.init(Some(LogOutput::new(sink.clone()))));
    (logger, sink)
}

/// Splits a line into its date, category and message fields.
fn fields(line: &str) -> (String, String, String) {
    let parts: Vec<&str> = line.splitn(3, "\t\t").collect();
    assert_eq!(parts.len(), 3, "malformed line {line:?}");
    (parts[0].into(), parts[1].into(), parts[2].into())
}

#[test]
fn info_hello_scenario() {
    let (logger, sink) = started();
    logger.info(true, "Hello");
    let out = sink.contents();
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with("INFO:   \t\tHello.\n"), "{out:?}");
}

#[test]
fn every_enabled_category_writes_exactly_one_line() {
    for cat in Category::ALL {
        let (mut logger, sink) = started();
        if cat == Category::Verbose {
            let h = logger.default_handler(cat);
            assert!(logger.set_handler("VERBOSE", Some(h)));
        }

        logger.emit(cat, true, "payload");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1, "{cat}");
        let (date, label, msg) = fields(&lines[0]);
        assert!(!date.is_empty());
        assert_eq!(label.trim_end(), format!("{}:", cat.label()));
        assert_eq!(label.len(), 8);
        assert_eq!(msg, "payload.");
    }
}

#[test]
fn verbose_is_off_by_default() {
    let (logger, sink) = started();
    logger.verbose(true, "chatter");
    logger.log("verbose", "chatter");
    assert!(sink.is_empty());
}

#[test]
fn disabled_warning_scenario() {
    let (mut logger, sink) = started();
    assert!(logger.set_handler("WARNING", None));
    logger.warning(true, "careful");
    assert!(sink.is_empty());
}

#[test]
fn lowercase_name_behaves_like_uppercase() {
    let (a, sink_a) = started();
    let (b, sink_b) = started();
    a.log("info", "test");
    b.log("INFO", "test");
    let (_, la, ma) = fields(&sink_a.lines()[0]);
    let (_, lb, mb) = fields(&sink_b.lines()[0]);
    assert_eq!((la, ma), (lb, mb));
}

#[test]
fn invalid_category_yields_one_warning() {
    let (logger, sink) = started();
    logger.log("DEBUG", "secret");
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (_, label, msg) = fields(&lines[0]);
    assert_eq!(label, "WARNING:");
    assert_eq!(msg, INVALID_CATEGORY_MSG);
}

#[test]
fn uninitialized_logger_is_inert() {
    let mut logger = Logger::new();
    assert!(!logger.init(None));
    logger.log("INFO", "x");
    logger.info(true, "x");
    logger.fatal(true, "x");
    assert!(!logger.set_handler("INFO", None));
    assert!(!logger.is_initialized());
}

#[test]
fn long_messages_are_cut() {
    let (logger, sink) = started();
    let long = "a".repeat(200);
    logger.error(true, &long);
    let (_, _, msg) = fields(&sink.lines()[0]);
    assert_eq!(msg.len(), MAX_MESSAGE_CHARS + 1);
    assert!(msg.ends_with('.'));
}

#[test]
fn custom_handler_can_reformat() {
    let (mut logger, sink) = started();
    let out = logger.output().cloned().expect("initialized logger has an output");
    let shouty: SharedHandler = Arc::new(move |cond: bool, msg: &str| {
        if cond {
            out.write_line(&format_entry(Some("ERROR"), Some(&msg.to_uppercase())));
        }
    });
    assert!(logger.set_category_handler(Category::Error, Some(shouty)));

    logger.error(true, "quiet please");
    assert!(sink.contents().ends_with("ERROR:  \t\tQUIET PLEASE.\n"));
}

#[test]
fn output_outlives_logger_through_handlers() {
    let (logger, sink) = started();
    let info = logger.default_handler(Category::Info);
    drop(logger);
    info.handle(true, "still here");
    assert!(sink.contents().contains("still here."));
}
