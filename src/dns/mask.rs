//! Record-type selection.
//!
//! The `--type` option names one of a fixed set of record types (or `ALL`),
//! which is turned into a bit mask over the record types that get queried.

use std::str::FromStr;

use hickory_resolver::proto::rr::RecordType;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::CheckError;

/// Record type names accepted by `--type` (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecordTypeOption {
    /// IPv4 address records
    A,
    /// IPv6 address records
    Aaaa,
    /// Every supported record type
    All,
    /// Canonical name records
    Cname,
    /// Nameserver records
    Ns,
    /// Text records
    Txt,
}

/// Bit mask over the record types that are queried for each domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordTypeMask(u16);

impl RecordTypeMask {
    /// IPv4 address records
    pub const A: RecordTypeMask = RecordTypeMask(1);
    /// IPv6 address records
    pub const AAAA: RecordTypeMask = RecordTypeMask(1 << 1);
    /// Canonical name records
    pub const CNAME: RecordTypeMask = RecordTypeMask(1 << 2);
    /// Nameserver records
    pub const NS: RecordTypeMask = RecordTypeMask(1 << 3);
    /// Text records
    pub const TXT: RecordTypeMask = RecordTypeMask(1 << 4);
    /// Mail exchanger records
    pub const MX: RecordTypeMask = RecordTypeMask(1 << 5);
    /// Start-of-authority records
    pub const SOA: RecordTypeMask = RecordTypeMask(1 << 6);
    /// Service locator records
    pub const SRV: RecordTypeMask = RecordTypeMask(1 << 7);
    /// Certification authority authorization records
    pub const CAA: RecordTypeMask = RecordTypeMask(1 << 8);
    /// Pointer records
    pub const PTR: RecordTypeMask = RecordTypeMask(1 << 9);
    /// Naming authority pointer records
    pub const NAPTR: RecordTypeMask = RecordTypeMask(1 << 10);
    /// Host information records
    pub const HINFO: RecordTypeMask = RecordTypeMask(1 << 11);
    /// Every record type above; only reachable through `--type all`
    pub const ALL: RecordTypeMask = RecordTypeMask(0b1111_1111_1111);

    /// Query order used for a mask with several bits set.
    const FLAGS: [(RecordTypeMask, RecordType); 12] = [
        (RecordTypeMask::A, RecordType::A),
        (RecordTypeMask::AAAA, RecordType::AAAA),
        (RecordTypeMask::CNAME, RecordType::CNAME),
        (RecordTypeMask::NS, RecordType::NS),
        (RecordTypeMask::TXT, RecordType::TXT),
        (RecordTypeMask::MX, RecordType::MX),
        (RecordTypeMask::SOA, RecordType::SOA),
        (RecordTypeMask::SRV, RecordType::SRV),
        (RecordTypeMask::CAA, RecordType::CAA),
        (RecordTypeMask::PTR, RecordType::PTR),
        (RecordTypeMask::NAPTR, RecordType::NAPTR),
        (RecordTypeMask::HINFO, RecordType::HINFO),
    ];

    /// Raw bit value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: RecordTypeMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether records of `record_type` were requested.
    pub fn includes(self, record_type: RecordType) -> bool {
        Self::FLAGS
            .iter()
            .any(|(flag, rtype)| *rtype == record_type && self.contains(*flag))
    }

    /// The record types to query, in a stable order.
    pub fn record_types(self) -> Vec<RecordType> {
        Self::FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, rtype)| *rtype)
            .collect()
    }

    /// Parses a `--type` value.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidRecordType` for names outside
    /// A, AAAA, ALL, CNAME, NS and TXT.
    pub fn parse_option(value: &str) -> Result<Self, CheckError> {
        RecordTypeOption::from_str(value.trim())
            .map(RecordTypeMask::from)
            .map_err(|_| CheckError::InvalidRecordType(value.to_string()))
    }
}

impl std::ops::BitOr for RecordTypeMask {
    type Output = RecordTypeMask;

    fn bitor(self, rhs: RecordTypeMask) -> RecordTypeMask {
        RecordTypeMask(self.0 | rhs.0)
    }
}

impl From<RecordTypeOption> for RecordTypeMask {
    fn from(option: RecordTypeOption) -> Self {
        match option {
            RecordTypeOption::A => RecordTypeMask::A,
            RecordTypeOption::Aaaa => RecordTypeMask::AAAA,
            RecordTypeOption::All => RecordTypeMask::ALL,
            RecordTypeOption::Cname => RecordTypeMask::CNAME,
            RecordTypeOption::Ns => RecordTypeMask::NS,
            RecordTypeOption::Txt => RecordTypeMask::TXT,
        }
    }
}
