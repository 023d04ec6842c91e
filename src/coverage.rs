//! Coverage summaries: how much evidence and how many gold supports a record has.

use crate::core::{EvidenceKind, Record, SupportKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-record evidence and gold-support counts.
///
/// Only kinds with a positive count are kept, so two summaries can be compared
/// without caring about which zero entries a record happened to spell out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    pub evidence_counts: BTreeMap<EvidenceKind, usize>,
    pub supports_counts: BTreeMap<SupportKind, usize>,
    pub totals: CoverageTotals,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageTotals {
    pub evidence_items: usize,
    pub support_items: usize,
}

/// Build the coverage summary for one record.
///
/// Evidence keys outside the known kinds are ignored.
pub fn build_coverage(record: &Record) -> CoverageSummary {
    let evidence = record.evidence();

    let evidence_counts = retain_positive(
        EvidenceKind::ALL
            .into_iter()
            .map(|kind| (kind, evidence.payload(kind).item_count())),
    );
    let supports_counts = retain_positive(
        SupportKind::ALL
            .into_iter()
            .map(|kind| (kind, record.support_count(kind))),
    );

    let totals = CoverageTotals {
        evidence_items: evidence_counts.values().sum(),
        support_items: supports_counts.values().sum(),
    };

    CoverageSummary {
        evidence_counts,
        supports_counts,
        totals,
    }
}

fn retain_positive<K: Ord>(counts: impl IntoIterator<Item = (K, usize)>) -> BTreeMap<K, usize> {
    counts.into_iter().filter(|(_, count)| *count > 0).collect()
}
