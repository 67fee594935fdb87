//! Terminal output helpers used by the run loop.
//!
//! This module provides the title block, the lookup progress bar and the
//! end-of-run summary line.

pub mod progress;

use colored::*;

use crate::error_handling::ResolutionStats;

/// Prints a title underlined with `=`.
pub fn print_title(title: &str) {
    println!();
    println!("{}", title.green().bold());
    println!("{}", "=".repeat(title.chars().count()).green().bold());
    println!();
}

/// One-line summary printed after the table.
pub fn summary_line(total_domains: usize, stats: &ResolutionStats, elapsed_seconds: f64) -> String {
    let unresolved = stats.total();
    let mut line = format!(
        "Checked {} domain{} in {:.1}s",
        total_domains,
        if total_domains == 1 { "" } else { "s" },
        elapsed_seconds
    );
    if unresolved > 0 {
        line.push_str(&format!(" ({unresolved} without records: {})", stats.summary()));
    }
    line
}
