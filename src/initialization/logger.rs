//! Logger initialization.
//!
//! Log lines go to stderr, next to the progress bar, so they are kept short:
//! the crate prefix is dropped from module paths and resolver internals are
//! capped at a quieter level than the rest of the run.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use chrono::SecondsFormat;
use colored::*;
use log::{Level, LevelFilter, Record};

const CRATE_TARGET: &str = "check_dns";

/// Targets logged at most at the given level, whatever `--log-level` says.
///
/// hickory logs every truncated or malformed UDP answer it retries; those are
/// noise next to the per-domain warnings this crate emits itself.
const CAPPED_TARGETS: &[(&str, LevelFilter)] = &[
    ("hickory_proto", LevelFilter::Error),
    ("hickory_resolver", LevelFilter::Warn),
];

/// Module path relative to the crate, e.g. `dns::resolution`.
///
/// Targets from other crates are returned unchanged.
fn short_target(target: &str) -> &str {
    match target.strip_prefix(CRATE_TARGET) {
        Some("") => "main",
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

fn colored_level(level: Level) -> ColoredString {
    let label = format!("{:<5}", level);
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.bright_black(),
    }
}

fn plain_line(record: &Record<'_>) -> String {
    format!(
        "{} {} {}",
        colored_level(record.level()),
        short_target(record.target()).cyan(),
        record.args()
    )
}

fn json_line(record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "module": short_target(record.target()),
        "msg": record.args().to_string(),
    })
    .to_string()
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first, then `level` overrides it for this crate and as
/// the default. The targets in `CAPPED_TARGETS` never log below their cap.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already installed.
///
/// # Examples
///
/// ```bash
/// # Show every lookup result
/// check_dns --log-level debug check-dns domains.txt
///
/// # One JSON object per line, e.g. for jq
/// check_dns --log-format json --log-level info check-dns domains.txt 2> log.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (target, cap) in CAPPED_TARGETS {
        builder.filter_module(target, level.min(*cap));
    }
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => builder.format(|buf, record| writeln!(buf, "{}", json_line(record))),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", plain_line(record))),
    };

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with<'a>(
        args: std::fmt::Arguments<'a>,
        level: Level,
        target: &'a str,
    ) -> Record<'a> {
        Record::builder().args(args).level(level).target(target).build()
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("check_dns::dns::resolution"), "dns::resolution");
        assert_eq!(short_target("check_dns"), "main");
        assert_eq!(short_target("hickory_proto::udp"), "hickory_proto::udp");
        // Only the exact crate name is stripped
        assert_eq!(short_target("check_dns_extra::x"), "check_dns_extra::x");
    }

    #[test]
    fn test_plain_line_layout() {
        colored::control::set_override(false);
        let line = plain_line(&record_with(
            format_args!("Lookup timed out for slow.example"),
            Level::Warn,
            "check_dns::render",
        ));
        assert_eq!(line, "WARN  render Lookup timed out for slow.example");
    }

    #[test]
    fn test_json_line_fields() {
        let line = json_line(&record_with(
            format_args!("Found \"2\" records"),
            Level::Debug,
            "check_dns::render",
        ));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["level"], "DEBUG");
        assert_eq!(value["module"], "render");
        assert_eq!(value["msg"], "Found \"2\" records");
        let ts = value["ts"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
    }

    #[test]
    fn test_capped_targets_never_exceed_cap() {
        for (_, cap) in CAPPED_TARGETS {
            assert!(LevelFilter::Trace.min(*cap) <= LevelFilter::Warn);
            assert_eq!(LevelFilter::Error.min(*cap), LevelFilter::Error);
        }
    }

    #[test]
    fn test_init_logger_twice_is_an_error_not_a_panic() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Warn, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
