//! Data contracts shared by the allocator, the aggregator and the export
//! layer. Counts are `u32` so negative values are unrepresentable; derived
//! figures and sums use `u64`.

/// Raw per-segment counts as entered by the operator.
///
/// `segment` is the 1-based index assigned from input order, unique within
/// one run. The remaining fields are the opaque container/structure count
/// categories used as proxies for household estimation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSegmentInput {
    pub segment: u32,
    pub btt: u32,
    pub btt_kosong: u32,
    pub bku: u32,
    pub bbtt_non_usaha: u32,
    pub muatan_usaha: u32,
}

/// One allocator output per segment: all raw fields carried through plus the
/// derived household estimate (`perkiraan_kk`) and total load
/// (`total_muatan`, always `>= perkiraan_kk`).
///
/// `subsls` is attached by the collaborator after allocation; the core never
/// assigns it. Aggregation requires it on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedSegmentRecord {
    pub segment: u32,
    pub btt: u32,
    pub btt_kosong: u32,
    pub bku: u32,
    pub bbtt_non_usaha: u32,
    pub muatan_usaha: u32,
    pub perkiraan_kk: u64,
    pub total_muatan: u64,
    pub subsls: Option<u32>,
}

/// Per-SubSLS sums over all segments sharing one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubSlsSummary {
    pub subsls: u32,
    pub perkiraan_kk: u64,
    pub btt: u64,
    pub btt_kosong: u64,
    pub bku: u64,
    pub bbtt_non_usaha: u64,
    pub muatan_usaha: u64,
    pub total_muatan: u64,
}

impl SubSlsSummary {
    pub fn new(subsls: u32) -> Self {
        Self {
            subsls,
            ..Self::default()
        }
    }

    /// Folds one segment record into this summary.
    pub fn add(&mut self, record: &EnrichedSegmentRecord) {
        self.perkiraan_kk += record.perkiraan_kk;
        self.btt += u64::from(record.btt);
        self.btt_kosong += u64::from(record.btt_kosong);
        self.bku += u64::from(record.bku);
        self.bbtt_non_usaha += u64::from(record.bbtt_non_usaha);
        self.muatan_usaha += u64::from(record.muatan_usaha);
        self.total_muatan += record.total_muatan;
    }
}

/// Aggregator output: one summary per distinct key (ascending) plus the two
/// grand totals shown to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recap {
    pub summaries: Vec<SubSlsSummary>,
    pub total_kk: u64,
    pub total_muatan: u64,
}
