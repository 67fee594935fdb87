//! DNS record querying.
//!
//! This module provides async DNS lookups using `hickory-resolver`:
//! - Record-type selection (`--type` parsing into a bit mask)
//! - Conversion of resolver answers into display-ready records
//! - The [`Resolve`] trait and its system-resolver implementation
//!
//! All operations are async and respect system DNS configuration.

mod mask;
mod records;
mod resolution;

// Re-export public API
pub use mask::{RecordTypeMask, RecordTypeOption};
pub use records::{rdata_target, DnsRecord};
pub use resolution::{Resolve, SystemResolver};
