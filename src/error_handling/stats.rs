//! Resolution statistics tracking.
//!
//! Counts domains that ended up as placeholder rows, grouped by why no
//! records could be shown.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Per-run counters of domains without displayable records.
///
/// Every [`FailureKind`] is initialized to zero on creation so lookups never
/// miss a key.
#[derive(Debug, Clone)]
pub struct ResolutionStats {
    counts: HashMap<FailureKind, usize>,
}

impl ResolutionStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in FailureKind::iter() {
            counts.insert(kind, 0);
        }
        ResolutionStats { counts }
    }

    /// Records one more domain that failed with `kind`.
    pub fn increment(&mut self, kind: FailureKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Returns the count for `kind`.
    pub fn get_count(&self, kind: FailureKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of domains without records, across all kinds.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Human-readable breakdown of the non-zero counters, e.g. `2 timeout, 1 no records`.
    pub fn summary(&self) -> String {
        FailureKind::iter()
            .filter_map(|kind| {
                let count = self.get_count(kind);
                (count > 0).then(|| format!("{count} {kind}"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
