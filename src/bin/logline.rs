use std::io::{self, BufRead};
use std::{env, process};

use catlog::config::Config;
use catlog::log::Logger;
use catlog::log::log_output::LogOutput;

fn main() {
    // --- Parse CLI args ----------------------------------------------------
    //
    // Supported:
    //   logline
    //      -> logs to <exe dir>/logs/<timestamp>-pid<pid>.log
    //
    //   logline catlog.ini
    //      -> file and categories taken from the config
    //
    //   logline -
    //      -> logs to stderr with the default categories

    let args: Vec<String> = env::args().collect();

    let built = match args.len() {
        1 => Logger::from_config(&Config::empty()),
        2 if args[1] == "-" => {
            let mut logger = Logger::new();
            logger.start(Some(LogOutput::new(io::stderr())));
            Ok(logger)
        }
        2 => Config::load(&args[1]).and_then(|cfg| Logger::from_config(&cfg)),
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}              # log to <exe dir>/logs", args[0]);
            eprintln!("  {} [CONFIG]     # e.g. catlog.ini", args[0]);
            eprintln!("  {} -            # log to stderr", args[0]);
            eprintln!();
            eprintln!("Each stdin line is `<category> <message>`.");
            process::exit(1);
        }
    };

    let logger = match built {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("[logline] {e}");
            process::exit(1);
        }
    };

    if let Some(path) = logger.file_path() {
        eprintln!("[logline] writing to {}", path.display());
    }

    // --- Route stdin -------------------------------------------------------
    for raw in io::stdin().lock().split(b'\n') {
        let Ok(raw) = raw else { break };
        route_bytes(&logger, &raw);
    }

    logger.close();
}

/// Decodes one raw stdin line and routes it. Invalid UTF-8 is replaced, not fatal.
fn route_bytes(logger: &Logger, raw: &[u8]) {
    route_line(logger, &String::from_utf8_lossy(raw));
}

/// Splits `<category> <message>` and hands it to the by-name entry point.
fn route_line(logger: &Logger, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let (category, msg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    logger.log(category, msg.trim_start());
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use catlog::log::memory_sink::MemorySink;

    fn ready() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        (Logger::with_output(LogOutput::new(sink.clone())), sink)
    }

    #[test]
    fn routes_category_and_message() {
        let (logger, sink) = ready();
        route_line(&logger, "  warning   disk almost full\r");
        route_line(&logger, "");
        route_line(&logger, "   ");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("WARNING:\t\tdisk almost full."));
    }

    #[test]
    fn bare_category_logs_empty_message() {
        let (logger, sink) = ready();
        route_line(&logger, "ERROR");
        assert!(sink.contents().ends_with("ERROR:  \t\t.\n"));
    }

    #[test]
    fn invalid_utf8_does_not_stop_later_lines() {
        let (logger, sink) = ready();
        let input: &[u8] = b"INFO hi\n\xff\xfe bad\nINFO after\n";
        for raw in input.split(|b| *b == b'\n') {
            route_bytes(&logger, raw);
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("INFO:   \t\thi."));
        assert!(lines[1].contains("Invalid category provided."));
        assert!(lines[2].ends_with("INFO:   \t\tafter."));
    }
}
