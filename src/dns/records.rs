//! DNS record conversion.
//!
//! Resolver answers are flattened into [`DnsRecord`]s: the record type name,
//! a printable target and the TTL.

use hickory_resolver::proto::rr::{RData, Record};

/// One resource record as shown in the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Record type name, e.g. `A` or `CNAME`
    pub record_type: String,
    /// IP address, host name or text; `None` when the record has no printable data
    pub target: Option<String>,
    /// Time-to-live in seconds
    pub ttl: u32,
}

impl DnsRecord {
    /// Creates a record; mostly useful for tests and custom resolvers.
    pub fn new(record_type: impl Into<String>, target: Option<&str>, ttl: u32) -> Self {
        DnsRecord {
            record_type: record_type.into(),
            target: target.map(str::to_string),
            ttl,
        }
    }
}

impl From<&Record> for DnsRecord {
    fn from(record: &Record) -> Self {
        DnsRecord {
            record_type: record.record_type().to_string(),
            target: record.data().and_then(rdata_target),
            ttl: record.ttl(),
        }
    }
}

/// Extracts the printable part of the record data.
///
/// Addresses are shown as IPs, name-valued records as host names and TXT
/// records as their joined character strings. MX and SRV keep their
/// priority fields in front of the host, dig style. Other record data (CAA,
/// NAPTR, HINFO, ...) has no target column value.
pub fn rdata_target(rdata: &RData) -> Option<String> {
    match rdata {
        RData::A(a) => Some(a.to_string()),
        RData::AAAA(aaaa) => Some(aaaa.to_string()),
        RData::CNAME(cname) => Some(cname.to_utf8()),
        RData::NS(ns) => Some(ns.to_utf8()),
        RData::PTR(ptr) => Some(ptr.to_utf8()),
        RData::MX(mx) => Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8())),
        RData::SOA(soa) => Some(soa.mname().to_utf8()),
        RData::SRV(srv) => Some(format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_utf8()
        )),
        RData::TXT(txt) => Some(
            // TXT records can be split across multiple character strings, join them
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        _ => None,
    }
}
