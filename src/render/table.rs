//! Plain-text table output.
//!
//! Draws the rows with `+`, `-` and `|` borders. Cell widths are measured on
//! the visible text so color escapes do not break the alignment.

use colored::*;
use console::measure_text_width;

use super::{DisplayRow, RowDetail, Target};
use crate::config::{NOT_AVAILABLE, TABLE_HEADERS};

const COLUMNS: usize = TABLE_HEADERS.len();
/// Width of the " | " between two columns
const SEPARATOR_WIDTH: usize = 3;

enum Cells {
    Full([String; COLUMNS]),
    /// Domain cell plus one cell spanning the record-detail columns
    Spanning(String, String),
}

fn format_target(target: &Target) -> String {
    match target {
        Target::Known { label, ip } => format!("{} ({})", label, ip.bright_black()),
        Target::Plain(value) => value.clone(),
        Target::Missing => NOT_AVAILABLE.red().to_string(),
    }
}

fn cells_for(row: &DisplayRow) -> Cells {
    let domain = row.domain.clone().unwrap_or_default();
    match &row.detail {
        RowDetail::Record {
            record_type,
            target,
            ttl,
        } => Cells::Full([
            domain,
            record_type.yellow().to_string(),
            format_target(target),
            ttl.to_string().bright_black().to_string(),
        ]),
        RowDetail::NoRecords { .. } => {
            Cells::Spanning(domain, NOT_AVAILABLE.bright_black().to_string())
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(measure_text_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn border(widths: &[usize; COLUMNS]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn detail_span_width(widths: &[usize; COLUMNS]) -> usize {
    widths[1..].iter().sum::<usize>() + SEPARATOR_WIDTH * (COLUMNS - 2)
}

fn column_widths(cells: &[Cells]) -> [usize; COLUMNS] {
    let mut widths = TABLE_HEADERS.map(measure_text_width);

    for row in cells {
        match row {
            Cells::Full(values) => {
                for (width, value) in widths.iter_mut().zip(values) {
                    *width = (*width).max(measure_text_width(value));
                }
            }
            Cells::Spanning(domain, _) => {
                widths[0] = widths[0].max(measure_text_width(domain));
            }
        }
    }

    // Grow the target column if a spanning cell does not fit
    for row in cells {
        if let Cells::Spanning(_, detail) = row {
            let missing = measure_text_width(detail).saturating_sub(detail_span_width(&widths));
            widths[2] += missing;
        }
    }

    widths
}

fn format_line(cells: &Cells, widths: &[usize; COLUMNS]) -> String {
    match cells {
        Cells::Full(values) => {
            let padded: Vec<String> = values
                .iter()
                .zip(widths)
                .map(|(value, width)| pad(value, *width))
                .collect();
            format!("| {} |", padded.join(" | "))
        }
        Cells::Spanning(domain, detail) => format!(
            "| {} | {} |",
            pad(domain, widths[0]),
            pad(detail, detail_span_width(widths))
        ),
    }
}

/// Renders the rows as a table with a header and a border between domain groups.
///
/// The returned string ends with a newline.
pub fn render_table(rows: &[DisplayRow]) -> String {
    let cells: Vec<Cells> = rows.iter().map(cells_for).collect();
    let widths = column_widths(&cells);
    let border = border(&widths);

    let header = Cells::Full(TABLE_HEADERS.map(|title| title.green().to_string()));

    let mut lines: Vec<String> = vec![border.clone(), format_line(&header, &widths), border.clone()];
    for (idx, (row, row_cells)) in rows.iter().zip(&cells).enumerate() {
        if idx > 0 && row.starts_group() {
            lines.push(border.clone());
        }
        lines.push(format_line(row_cells, &widths));
    }
    if !rows.is_empty() {
        lines.push(border);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
