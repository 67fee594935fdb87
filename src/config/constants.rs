//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including resolver timeouts, defaults for CLI options, and output layout.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most lookups answer well under a second; 5s leaves room for slow authoritative servers
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;

// Domain validation
/// Dot-separated labels of letters, digits, `_` and `-`, at least two labels
pub const DOMAIN_PATTERN: &str = r"(?i)^[a-z0-9_-]+(\.[a-z0-9_-]+)+$";

// CLI defaults
/// Record type queried when `--type` is not given
pub const DEFAULT_RECORD_TYPE: &str = "A";
/// Lookups run one after another unless `--max-concurrency` raises this
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

// Output
/// Title printed above the progress bar and table
pub const TITLE: &str = "Check DNS";

/// Progress bar layout: `current/total [bar] percent elapsed/estimated domain`
pub const PROGRESS_TEMPLATE: &str =
    " {pos}/{len} [{bar:28}] {percent:>3}% {elapsed:>6}/{eta:<6} {msg}";

/// Characters used to draw the progress bar (filled, current, empty)
pub const PROGRESS_CHARS: &str = "=>-";

/// Column headers of the result table.
pub const TABLE_HEADERS: [&str; 4] = ["Domain", "Record Type", "Target", "TTL"];

/// Marker shown when a domain has no records or a record has no target.
pub const NOT_AVAILABLE: &str = "n/a";
