//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_RECORD_TYPE, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface of the `check_dns` binary.
#[derive(Debug, Parser)]
#[command(name = "check_dns", version, about = "Checks DNS records for a list of domains")]
pub struct Cli {
    /// Minimum log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expects a file path to a TXT file containing one domain per line and returns the DNS entries
    #[command(name = "check-dns")]
    CheckDns(CheckDnsArgs),
}

/// Arguments of the `check-dns` subcommand.
#[derive(Debug, Args)]
pub struct CheckDnsArgs {
    /// The path to the file containing the domains
    pub file_path: PathBuf,

    /// Automatically add www.* subdomains for all apex domains
    #[arg(long)]
    pub www: bool,

    /// The type of DNS record to check for (A, AAAA, ALL, CNAME, NS, TXT)
    #[arg(long = "type", default_value = DEFAULT_RECORD_TYPE)]
    pub record_type: String,

    /// Maximum number of lookups in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Flattens the parsed command line into a library [`Config`].
    pub fn into_config(self) -> Config {
        match self.command {
            Command::CheckDns(args) => Config {
                file: args.file_path,
                expand_www: args.www,
                record_type: args.record_type,
                max_concurrency: args.max_concurrency,
                timeout_seconds: args.timeout_seconds,
                no_color: args.no_color,
                log_level: self.log_level,
                log_format: self.log_format,
            },
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// The record type is kept as the raw option string; it is validated by
/// `run_check` before the input file is opened.
///
/// # Examples
///
/// ```no_run
/// use check_dns::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     expand_www: true,
///     record_type: "aaaa".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from
    pub file: PathBuf,

    /// Add `www.` variants of apex domains
    pub expand_www: bool,

    /// Record type option as given by the user (case-insensitive)
    pub record_type: String,

    /// Maximum lookups in flight at once
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    pub timeout_seconds: u64,

    /// Disable colored output
    pub no_color: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            expand_www: false,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DNS_TIMEOUT_SECS,
            no_color: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.record_type, "A");
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.timeout_seconds, DNS_TIMEOUT_SECS);
        assert!(!config.expand_www);
        assert!(!config.no_color);
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_into_config_carries_global_options() {
        let cli = Cli::parse_from([
            "check_dns",
            "--log-level",
            "debug",
            "check-dns",
            "domains.txt",
            "--www",
            "--type",
            "txt",
        ]);
        let config = cli.into_config();

        assert_eq!(config.file, PathBuf::from("domains.txt"));
        assert!(config.expand_www);
        assert_eq!(config.record_type, "txt");
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
