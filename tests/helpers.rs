// Shared test helpers for resolver stubs and input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io::Write;
use std::str::FromStr;

use check_dns::dns::{DnsRecord, RecordTypeMask, Resolve};
use check_dns::error_handling::ResolutionFailure;
use hickory_resolver::proto::rr::RecordType;
use tempfile::NamedTempFile;

/// In-memory resolver answering from a fixed table.
///
/// Domains missing from the table time out. Records whose type is not in the
/// requested mask are filtered out, the way the system resolver does.
#[allow(dead_code)] // Used by other test files
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, Vec<DnsRecord>>,
}

#[allow(dead_code)]
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer for `domain`; an empty list means "no records".
    pub fn with(mut self, domain: &str, records: Vec<DnsRecord>) -> Self {
        self.answers.insert(domain.to_string(), records);
        self
    }
}

fn type_in_mask(record_type: &str, mask: RecordTypeMask) -> bool {
    RecordType::from_str(record_type).is_ok_and(|rtype| mask.includes(rtype))
}

impl Resolve for StaticResolver {
    async fn resolve(
        &self,
        domain: &str,
        mask: RecordTypeMask,
    ) -> Result<Vec<DnsRecord>, ResolutionFailure> {
        match self.answers.get(domain) {
            Some(records) => Ok(records
                .iter()
                .filter(|record| type_in_mask(&record.record_type, mask))
                .cloned()
                .collect()),
            None => Err(ResolutionFailure::Timeout {
                domain: domain.to_string(),
            }),
        }
    }
}

/// Writes `contents` to a temporary input file.
#[allow(dead_code)]
pub fn domain_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
