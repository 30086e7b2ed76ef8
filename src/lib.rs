pub mod aggregate;
pub mod allocate;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod reader;

pub use aggregate::aggregate;
pub use allocate::allocate;
pub use config::Config;
pub use error::{LkmError, Result};
pub use export::{SEGMENT_SHEET_HEADERS, SUBSLS_SHEET_HEADERS, export_recap};
pub use model::{EnrichedSegmentRecord, RawSegmentInput, Recap, SubSlsSummary};
pub use reader::{INPUT_HEADERS, SegmentRow, read_segments, read_segments_from};
