//! Record lookups against the system resolver.
//!
//! The run loop only depends on the [`Resolve`] trait; [`SystemResolver`] is
//! the production implementation on top of `hickory-resolver`.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;

use super::mask::RecordTypeMask;
use super::records::DnsRecord;
use crate::error_handling::ResolutionFailure;

/// Looks up the records of a domain.
///
/// An empty `Ok` vector means the resolver answered without any records of
/// the requested types. `Err` is reserved for lookups that failed outright.
pub trait Resolve {
    /// Resolves `domain` for every record type in `mask`.
    fn resolve(
        &self,
        domain: &str,
        mask: RecordTypeMask,
    ) -> impl Future<Output = Result<Vec<DnsRecord>, ResolutionFailure>> + Send;
}

/// [`Resolve`] implementation backed by a shared hickory resolver.
#[derive(Clone)]
pub struct SystemResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    /// Queries a single record type, keeping only records whose type is in `mask`.
    ///
    /// Lookups follow CNAME chains, so an `A` query can also return the
    /// `CNAME` records leading to the address. "No records found" answers are
    /// not errors here; they become an empty vector.
    async fn lookup_type(
        &self,
        domain: &str,
        record_type: RecordType,
        mask: RecordTypeMask,
    ) -> Result<Vec<DnsRecord>, ResolveError> {
        match self.resolver.lookup(domain, record_type).await {
            Ok(lookup) => Ok(lookup
                .records()
                .iter()
                .filter(|record| mask.includes(record.record_type()))
                .map(DnsRecord::from)
                .collect()),
            Err(e) if is_no_records(&e) => {
                log::debug!("No {record_type} records for {domain}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl Resolve for SystemResolver {
    async fn resolve(
        &self,
        domain: &str,
        mask: RecordTypeMask,
    ) -> Result<Vec<DnsRecord>, ResolutionFailure> {
        let mut records: Vec<DnsRecord> = Vec::new();
        let mut last_failure: Option<ResolutionFailure> = None;
        let mut any_answered = false;

        for record_type in mask.record_types() {
            match self.lookup_type(domain, record_type, mask).await {
                Ok(found) => {
                    any_answered = true;
                    for record in found {
                        // With several types requested, CNAME records show up once per query
                        if !records.contains(&record) {
                            records.push(record);
                        }
                    }
                }
                Err(e) => {
                    if is_timeout(&e) {
                        log::debug!("{record_type} lookup timed out for {domain}: {e}");
                    } else {
                        log::debug!("Failed to lookup {record_type} records for {domain}: {e}");
                    }
                    last_failure = Some(to_failure(domain, &e));
                }
            }
        }

        // A partial answer is still an answer; only fail if every query failed
        match last_failure {
            Some(failure) if !any_answered => Err(failure),
            _ => Ok(records),
        }
    }
}

fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

fn is_timeout(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::Timeout)
}

fn to_failure(domain: &str, error: &ResolveError) -> ResolutionFailure {
    if is_timeout(error) {
        ResolutionFailure::Timeout {
            domain: domain.to_string(),
        }
    } else {
        ResolutionFailure::Lookup {
            domain: domain.to_string(),
            message: error.to_string(),
        }
    }
}
