//! Display rows and table rendering.
//!
//! Each domain becomes a group of rows: one per record, with the domain
//! label on the first row spanning the whole group, or a single placeholder
//! row when no records could be shown.

mod labels;
mod table;

pub use labels::{label_for, Target, KNOWN_TARGETS};
pub use table::render_table;

use crate::dns::{DnsRecord, RecordTypeMask, Resolve};
use crate::domain::Domain;
use crate::error_handling::{FailureKind, ResolutionFailure};

/// The record-detail columns of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDetail {
    /// One resolved record
    Record {
        /// Record type name
        record_type: String,
        /// Target column
        target: Target,
        /// Time-to-live in seconds
        ttl: u32,
    },
    /// Placeholder spanning type, target and TTL; the domain had nothing to show
    NoRecords {
        /// Why nothing could be shown
        reason: FailureKind,
    },
}

/// One line of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Domain label; only set on the first row of a group
    pub domain: Option<String>,
    /// Number of rows the domain label spans; 0 on rows without a label
    pub rowspan: usize,
    /// Record-detail columns
    pub detail: RowDetail,
}

impl DisplayRow {
    /// Whether this row opens a new domain group.
    pub fn starts_group(&self) -> bool {
        self.domain.is_some()
    }

    /// The placeholder reason, if this is a placeholder row.
    pub fn failure(&self) -> Option<FailureKind> {
        match self.detail {
            RowDetail::NoRecords { reason } => Some(reason),
            RowDetail::Record { .. } => None,
        }
    }
}

/// Builds the row group for one domain from a resolver result.
///
/// A failure or an empty answer yields exactly one placeholder row.
pub fn rows_for_domain(
    domain: &Domain,
    result: Result<Vec<DnsRecord>, ResolutionFailure>,
) -> Vec<DisplayRow> {
    let records = match result {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => return vec![placeholder_row(domain, FailureKind::NoRecords)],
        Err(failure) => return vec![placeholder_row(domain, failure.kind())],
    };

    let rowspan = records.len();
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let first = idx == 0;
            DisplayRow {
                domain: first.then(|| domain.to_string()),
                rowspan: if first { rowspan } else { 0 },
                detail: RowDetail::Record {
                    target: Target::from_record_target(record.target.as_deref()),
                    record_type: record.record_type,
                    ttl: record.ttl,
                },
            }
        })
        .collect()
}

fn placeholder_row(domain: &Domain, reason: FailureKind) -> DisplayRow {
    DisplayRow {
        domain: Some(domain.to_string()),
        rowspan: 1,
        detail: RowDetail::NoRecords { reason },
    }
}

/// Queries `domain` for the record types in `mask` and builds its row group.
///
/// Resolver failures are logged and rendered as a placeholder; they never
/// propagate.
pub async fn render_domain<R: Resolve>(
    resolver: &R,
    domain: &Domain,
    mask: RecordTypeMask,
) -> Vec<DisplayRow> {
    let result = resolver.resolve(domain.as_str(), mask).await;
    match &result {
        Ok(records) if records.is_empty() => log::debug!("No records found for {domain}"),
        Ok(records) => log::debug!("Found {} records for {domain}", records.len()),
        Err(failure) => log::warn!("{failure}"),
    }
    rows_for_domain(domain, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str) -> Domain {
        Domain::parse(name).unwrap()
    }

    #[test]
    fn test_empty_result_yields_single_placeholder() {
        let rows = rows_for_domain(&domain("nonexistent.example"), Ok(vec![]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].domain.as_deref(), Some("nonexistent.example"));
        assert_eq!(rows[0].rowspan, 1);
        assert_eq!(rows[0].failure(), Some(FailureKind::NoRecords));
    }

    #[test]
    fn test_failure_yields_single_placeholder_with_reason() {
        let failure = ResolutionFailure::Timeout {
            domain: "slow.example".to_string(),
        };
        let rows = rows_for_domain(&domain("slow.example"), Err(failure));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].failure(), Some(FailureKind::Timeout));
    }

    #[test]
    fn test_records_share_one_domain_label() {
        let records = vec![
            DnsRecord::new("A", Some("93.184.216.34"), 300),
            DnsRecord::new("A", Some("13.51.62.86"), 300),
            DnsRecord::new("A", None, 60),
        ];
        let rows = rows_for_domain(&domain("example.com"), Ok(records));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].domain.as_deref(), Some("example.com"));
        assert_eq!(rows[0].rowspan, 3);
        assert!(rows[1..].iter().all(|row| row.domain.is_none() && row.rowspan == 0));
        assert!(rows.iter().all(|row| row.failure().is_none()));
    }

    #[test]
    fn test_record_targets_are_classified() {
        let records = vec![
            DnsRecord::new("A", Some("13.51.62.86"), 300),
            DnsRecord::new("A", Some("93.184.216.34"), 120),
            DnsRecord::new("TXT", None, 60),
        ];
        let rows = rows_for_domain(&domain("example.com"), Ok(records));

        let targets: Vec<&Target> = rows
            .iter()
            .map(|row| match &row.detail {
                RowDetail::Record { target, .. } => target,
                RowDetail::NoRecords { .. } => panic!("unexpected placeholder"),
            })
            .collect();

        assert_eq!(
            targets[0],
            &Target::Known {
                label: "Platform.sh SE",
                ip: "13.51.62.86".to_string()
            }
        );
        assert_eq!(targets[1], &Target::Plain("93.184.216.34".to_string()));
        assert_eq!(targets[2], &Target::Missing);
    }

    #[test]
    fn test_record_order_is_preserved() {
        let records = vec![
            DnsRecord::new("CNAME", Some("edge.example.net."), 3600),
            DnsRecord::new("A", Some("1.2.3.4"), 60),
        ];
        let rows = rows_for_domain(&domain("www.example.com"), Ok(records));

        let types: Vec<&str> = rows
            .iter()
            .filter_map(|row| match &row.detail {
                RowDetail::Record { record_type, .. } => Some(record_type.as_str()),
                RowDetail::NoRecords { .. } => None,
            })
            .collect();
        assert_eq!(types, vec!["CNAME", "A"]);
    }
}
