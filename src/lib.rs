//! check_dns library: DNS record checks for a list of domains
//!
//! This library reads a file of domain names, optionally adds the `www.`
//! variant of every apex domain, and queries each domain for the selected DNS
//! record types. The results are printed as a table grouped by domain.
//!
//! # Example
//!
//! ```no_run
//! use check_dns::{Config, run_check};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     expand_www: true,
//!     record_type: "all".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod render;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use error_handling::CheckError;
pub use run::{check_domains, load_domains, run_check, CheckReport};

// Internal run module (contains the main checking logic)
mod run {
    use std::path::Path;
    use std::time::Instant;

    use futures::stream::{self, StreamExt};
    use indicatif::ProgressBar;
    use log::{debug, info};

    use crate::app::progress::create_progress_bar;
    use crate::app::{print_title, summary_line};
    use crate::config::{Config, TITLE};
    use crate::dns::{RecordTypeMask, Resolve, SystemResolver};
    use crate::domain::{build_domain_set, Domain};
    use crate::error_handling::{CheckError, ResolutionStats};
    use crate::initialization::init_resolver;
    use crate::render::{render_domain, render_table, DisplayRow};

    /// Results of a DNS check run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of domains queried (after `www.` expansion)
        pub total_domains: usize,
        /// Number of domains rendered as a placeholder row
        pub unresolved: usize,
        /// Number of table rows emitted
        pub rows: usize,
        /// Placeholder rows grouped by reason
        pub stats: ResolutionStats,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CheckReport {
        /// One-line, human-readable summary of the run.
        pub fn summary(&self) -> String {
            summary_line(self.total_domains, &self.stats, self.elapsed_seconds)
        }
    }

    /// Reads `path` and builds the ordered domain list.
    ///
    /// # Errors
    ///
    /// - `CheckError::FileNotFound` if `path` is not a regular file
    /// - `CheckError::ReadInput` if the file cannot be read as UTF-8 text
    /// - `CheckError::InvalidDomain` for the first line that is not a domain name
    pub async fn load_domains(path: &Path, expand_www: bool) -> Result<Vec<Domain>, CheckError> {
        if !path.is_file() {
            return Err(CheckError::FileNotFound(path.to_path_buf()));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CheckError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;

        let domains = build_domain_set(content.lines(), expand_www)?;
        info!("Loaded {} domains from {}", domains.len(), path.display());
        Ok(domains)
    }

    /// Queries every domain and returns the table rows in domain order.
    ///
    /// Up to `max_concurrency` lookups run at once (at least one). Results are
    /// buffered so rows always follow the order of `domains`, whatever order
    /// the lookups complete in. `progress` advances once per finished domain
    /// and shows the domain being queried as its message.
    pub async fn check_domains<R: Resolve>(
        domains: &[Domain],
        mask: RecordTypeMask,
        resolver: &R,
        max_concurrency: usize,
        progress: &ProgressBar,
    ) -> Vec<DisplayRow> {
        let groups: Vec<Vec<DisplayRow>> = stream::iter(domains)
            .map(|domain| {
                let progress = progress.clone();
                async move {
                    progress.set_message(domain.to_string());
                    let rows = render_domain(resolver, domain, mask).await;
                    progress.inc(1);
                    rows
                }
            })
            .buffered(max_concurrency.max(1))
            .collect()
            .await;

        groups.into_iter().flatten().collect()
    }

    /// Runs a DNS check with the provided configuration.
    ///
    /// This is the main entry point for the library. The record type is
    /// validated first, then the input file is read and turned into the
    /// ordered domain list. Each domain is queried while a progress bar runs
    /// on stderr, and the finished table is printed to stdout.
    ///
    /// Per-domain lookup failures never abort the run; they show up as
    /// placeholder rows and in the report statistics.
    ///
    /// # Errors
    ///
    /// Returns a `CheckError` (see [`CheckError::exit_code`]) if the record
    /// type is unknown, the input file is missing or unreadable, a line is not
    /// a valid domain, or the resolver cannot be initialized. Nothing is
    /// printed to stdout in these cases.
    pub async fn run_check(config: Config) -> Result<CheckReport, CheckError> {
        let mask = RecordTypeMask::parse_option(&config.record_type)?;
        let domains = load_domains(&config.file, config.expand_www).await?;

        let resolver = SystemResolver::new(init_resolver(config.timeout_seconds)?);

        print_title(TITLE);
        debug!(
            "Checking {} domains for {} records (max concurrency {})",
            domains.len(),
            config.record_type.to_uppercase(),
            config.max_concurrency
        );

        let start_time = Instant::now();
        let progress = create_progress_bar(domains.len());
        let rows = check_domains(
            &domains,
            mask,
            &resolver,
            config.max_concurrency,
            &progress,
        )
        .await;
        progress.finish_and_clear();

        print!("{}", render_table(&rows));

        let mut stats = ResolutionStats::new();
        for kind in rows.iter().filter_map(DisplayRow::failure) {
            stats.increment(kind);
        }

        Ok(CheckReport {
            total_domains: domains.len(),
            unresolved: stats.total(),
            rows: rows.len(),
            stats,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

}
