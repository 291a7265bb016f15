use std::{fmt, io};

use colored::Color;

use crate::{ColorMode, Logger, LoggerConfig, MemorySink, Severity, Sink};

fn test_logger(min_level: Severity) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let config = LoggerConfig {
        min_level,
        timestamp_format: "ts".to_owned(),
        color: ColorMode::Never,
        ..Default::default()
    };
    (Logger::with_sink(&config, sink.clone()), sink)
}

#[derive(Debug)]
struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boom")
    }
}

impl std::error::Error for Boom {}

#[test]
fn test_every_level_above_threshold_is_written() {
    let (logger, sink) = test_logger(Severity::Debug);
    for level in [
        Severity::Debug,
        Severity::Info,
        Severity::Special,
        Severity::Error,
    ] {
        sink.clear();
        logger.emit(level, "hello");
        assert_eq!(sink.lines(), vec![format!("ts [{level}] hello")]);
    }
}

#[test]
fn test_levels_below_threshold_are_dropped() {
    let (logger, sink) = test_logger(Severity::Error);
    logger.debug("a");
    logger.info("b");
    logger.special("c");
    logger.info_with_values("d", [("k", 1)]);
    assert!(sink.contents().is_empty());

    logger.error("e");
    assert_eq!(sink.lines(), vec!["ts [error] e"]);
}

#[test]
fn test_threshold_scenario() {
    let (logger, sink) = test_logger(Severity::Info);
    logger.debug("hidden");
    assert!(sink.lines().is_empty());

    logger.info(&format!("shown: {}", 42));
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("shown: 42"));
    assert!(lines[0].contains("[info]"));
}

#[test]
fn test_threshold_change_is_immediate() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.debug("first");
    logger.set_min_level(Severity::Info);
    assert_eq!(logger.min_level(), Severity::Info);
    logger.debug("second");
    logger.set_min_level(Severity::Debug);
    logger.debug("third");
    assert_eq!(sink.lines(), vec!["ts [debug] first", "ts [debug] third"]);
}

#[test]
fn test_special_slug() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.set_special_slug("custom");
    logger.special("one");
    logger.info("two");
    assert_eq!(
        sink.lines(),
        vec!["ts [custom] one", "ts [info] two"]
    );
    assert_eq!(logger.slug(Severity::Special), "custom");
    for level in [
        Severity::Debug,
        Severity::Info,
        Severity::Error,
        Severity::Fatal,
    ] {
        assert_eq!(logger.slug(level), level.as_str());
    }
}

#[test]
fn test_special_slug_from_config() {
    let sink = MemorySink::new();
    let config = LoggerConfig {
        timestamp_format: "ts".to_owned(),
        color: ColorMode::Never,
        special_slug: Some("audit".to_owned()),
        ..Default::default()
    };
    let logger = Logger::with_sink(&config, sink.clone());
    logger.special("ok");
    assert_eq!(sink.lines(), vec!["ts [audit] ok"]);
}

#[test]
fn test_with_values() {
    let (logger, sink) = test_logger(Severity::Debug);
    let values: [(&str, &dyn fmt::Display); 2] = [("a", &1), ("b", &"x")];
    logger.info_with_values("request", values);
    assert_eq!(
        sink.lines(),
        vec!["ts [info] request", "- a: 1", "- b: x"]
    );
}

#[test]
fn test_with_values_keeps_map_order() {
    let (logger, sink) = test_logger(Severity::Debug);
    let values = std::collections::BTreeMap::from([("zeta", 26), ("alpha", 1)]);
    logger.debug_with_values("sorted", &values);
    assert_eq!(
        sink.lines(),
        vec!["ts [debug] sorted", "- alpha: 1", "- zeta: 26"]
    );
}

#[test]
fn test_with_error() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.error_with_error("request failed", &Boom);
    let lines = sink.lines();
    assert_eq!(lines, vec!["ts [error] request failed", "- boom"]);
}

#[test]
fn test_with_error_at_any_level() {
    let (logger, sink) = test_logger(Severity::Debug);
    let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    logger.emit_with_error(Severity::Special, "lookup", &err);
    assert_eq!(sink.lines(), vec!["ts [special] lookup", "- no such file"]);
}

#[test]
fn test_slug_delimiters() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.set_slug_delimiters("<", ">");
    logger.info("a");
    logger.set_slug_delimiters("", ":");
    logger.info("b");
    assert_eq!(sink.lines(), vec!["ts <info> a", "ts info: b"]);
}

#[test]
fn test_timestamp_is_formatted_at_call_time() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.set_timestamp_format("%Y");
    logger.info("dated");
    let year = chrono::Local::now().format("%Y").to_string();
    assert_eq!(sink.lines(), vec![format!("{year} [info] dated")]);
}

#[test]
fn test_default_timestamp_is_rfc3339() {
    let sink = MemorySink::new();
    let config = LoggerConfig {
        color: ColorMode::Never,
        ..Default::default()
    };
    let logger = Logger::with_sink(&config, sink.clone());
    logger.info("now");
    let line = sink.lines().remove(0);
    let (timestamp, rest) = line.split_once(' ').unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(rest, "[info] now");
}

#[test]
fn test_invalid_timestamp_format_falls_back() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.set_timestamp_format("%Q");
    logger.info("still logged");
    let line = sink.lines().remove(0);
    let (timestamp, rest) = line.split_once(' ').unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(rest, "[info] still logged");
}

#[test]
fn test_colors() {
    let (logger, sink) = test_logger(Severity::Debug);
    logger.set_color_mode(ColorMode::Always);
    logger.error_with_values("colored", [("k", "v")]);
    let red = Color::Red.to_fg_str();
    let bright_red = Color::BrightRed.to_fg_str();
    let white = Color::BrightWhite.to_fg_str();
    assert_eq!(
        sink.lines(),
        vec![
            format!("ts \x1b[{red}m[error]\x1b[0m colored"),
            format!("\x1b[{bright_red}m-\x1b[0m \x1b[{white}mk\x1b[0m\x1b[{bright_red}m:\x1b[0m v"),
        ]
    );
}

#[test]
fn test_color_swatch_ignores_threshold() {
    let (logger, sink) = test_logger(Severity::Fatal);
    logger.color_swatch();
    assert_eq!(sink.lines(), vec!["████████", "████████"]);

    sink.clear();
    logger.set_color_mode(ColorMode::Always);
    logger.color_swatch();
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("\x1b[{}m", Color::BrightBlack.to_fg_str())));
    assert!(lines[1].starts_with(&format!("\x1b[{}m", Color::Black.to_fg_str())));
    assert!(lines.iter().all(|line| line.matches('█').count() == 8));
}

#[test]
fn test_set_sink() {
    let (logger, first) = test_logger(Severity::Debug);
    logger.info("one");
    let second = MemorySink::new();
    logger.set_sink(second.clone());
    logger.info("two");
    assert_eq!(first.lines(), vec!["ts [info] one"]);
    assert_eq!(second.lines(), vec!["ts [info] two"]);
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

#[test]
fn test_write_failures_are_not_propagated() {
    let logger = Logger::with_sink(&LoggerConfig::default(), Sink::writer(FailingWriter));
    logger.info("lost");
    logger.error_with_error("lost too", &Boom);
    logger.flush();
}

#[test]
fn test_records_are_not_interleaved() {
    let (logger, sink) = test_logger(Severity::Debug);
    let logger = std::sync::Arc::new(logger);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for j in 0..50 {
                    logger.info_with_values("record", [("thread", i), ("index", j)]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let lines = sink.lines();
    assert_eq!(lines.len(), 4 * 50 * 3);
    for record in lines.chunks(3) {
        assert_eq!(record[0], "ts [info] record");
        assert!(record[1].starts_with("- thread: "));
        assert!(record[2].starts_with("- index: "));
    }
}
