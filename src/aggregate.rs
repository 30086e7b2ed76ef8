//! SubSLS Aggregator: groups enriched segment records by their
//! operator-assigned SubSLS key and sums the numeric fields per group.

use crate::error::{LkmError, Result};
use crate::model::{EnrichedSegmentRecord, Recap, SubSlsSummary};
use std::collections::BTreeMap;

/// Aggregates `records` into one summary per distinct SubSLS key, sorted
/// ascending by key, plus the two grand totals.
///
/// Every record must carry a SubSLS key; if any does not, the whole call
/// fails with `MissingGroupKey` naming the offending segments, and nothing
/// is aggregated. Sums are exact integer arithmetic, so the grand totals
/// always equal the direct sums over the ungrouped records.
pub fn aggregate(records: &[EnrichedSegmentRecord]) -> Result<Recap> {
    let missing: Vec<u32> = records
        .iter()
        .filter(|record| record.subsls.is_none())
        .map(|record| record.segment)
        .collect();
    if !missing.is_empty() {
        return Err(LkmError::MissingGroupKey { segments: missing });
    }

    // BTreeMap keeps the output in ascending key order.
    let mut groups: BTreeMap<u32, SubSlsSummary> = BTreeMap::new();
    for record in records {
        if let Some(key) = record.subsls {
            groups
                .entry(key)
                .or_insert_with(|| SubSlsSummary::new(key))
                .add(record);
        }
    }

    let summaries: Vec<SubSlsSummary> = groups.into_values().collect();
    let total_kk = summaries.iter().map(|s| s.perkiraan_kk).sum();
    let total_muatan = summaries.iter().map(|s| s.total_muatan).sum();

    Ok(Recap {
        summaries,
        total_kk,
        total_muatan,
    })
}
