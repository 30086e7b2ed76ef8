//! Segment Allocator: distributes the known household total of an SLS area
//! across its segments in proportion to each segment's BTT count, then
//! derives the total load each segment must carry.

use crate::error::{LkmError, Result};
use crate::model::{EnrichedSegmentRecord, RawSegmentInput};

/// Allocates `total_kk` households across `inputs` and derives per-segment
/// load figures. Order-preserving, one output record per input; an empty
/// input slice yields an empty result.
///
/// The household estimate is `round(btt / total_btt * total_kk)`, rounded
/// half away from zero. When every segment has `btt == 0` the divisor is
/// clamped to 1 and all estimates collapse to 0 — a documented degenerate
/// case, not an error.
///
/// The total load is the larger of the household estimate and the sum of the
/// known container counts (`btt + btt_kosong + bbtt_non_usaha +
/// muatan_usaha`), taking the more conservative of the two estimates.
pub fn allocate(inputs: &[RawSegmentInput], total_kk: u32) -> Result<Vec<EnrichedSegmentRecord>> {
    if total_kk == 0 {
        return Err(LkmError::InvalidInput(
            "total household count (total KK) must be 1 or greater".to_string(),
        ));
    }

    let total_btt: u64 = inputs.iter().map(|seg| u64::from(seg.btt)).sum();
    // Clamped to 1 so the zero-BTT case divides cleanly; every share is
    // 0 * total_kk there anyway.
    let divisor = total_btt.max(1);

    let records = inputs
        .iter()
        .map(|seg| {
            let share = f64::from(seg.btt) / divisor as f64 * f64::from(total_kk);
            let perkiraan_kk = share.round() as u64;

            let container_load = u64::from(seg.btt)
                + u64::from(seg.btt_kosong)
                + u64::from(seg.bbtt_non_usaha)
                + u64::from(seg.muatan_usaha);
            let total_muatan = perkiraan_kk.max(container_load);

            EnrichedSegmentRecord {
                segment: seg.segment,
                btt: seg.btt,
                btt_kosong: seg.btt_kosong,
                bku: seg.bku,
                bbtt_non_usaha: seg.bbtt_non_usaha,
                muatan_usaha: seg.muatan_usaha,
                perkiraan_kk,
                total_muatan,
                subsls: None,
            }
        })
        .collect();

    Ok(records)
}
