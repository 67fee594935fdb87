//! Lookup progress bar.

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{PROGRESS_CHARS, PROGRESS_TEMPLATE};

/// Creates the progress bar shown while domains are being queried.
///
/// Draws to stderr and hides itself when stderr is not a terminal, so piping
/// the table to a file keeps the output clean.
pub fn create_progress_bar(total: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(style);
    pb
}
