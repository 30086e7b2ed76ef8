//! Export of the two recap sheets. "Rekap Segmen" holds one row per segment
//! record, "Rekap SubSLS" one row per SubSLS summary; both column schemas are
//! stable and consumed by downstream spreadsheet tooling.

use crate::error::{LkmError, Result};
use crate::model::{EnrichedSegmentRecord, Recap};
use chrono::Local;
use csv::{Writer, WriterBuilder};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub const SEGMENT_SHEET_HEADERS: [&str; 9] = [
    "Segmen",
    "BTT",
    "BTT Kosong",
    "BKU",
    "BBTT Non Usaha",
    "Perkiraan Muatan Usaha",
    "Perkiraan KK",
    "Total Muatan",
    "Subsls",
];

pub const SUBSLS_SHEET_HEADERS: [&str; 8] = [
    "Subsls",
    "Perkiraan KK",
    "BTT",
    "BTT Kosong",
    "BKU",
    "BBTT Non Usaha",
    "Perkiraan Muatan Usaha",
    "Total Muatan",
];

/// Writes both recap sheets as timestamped CSV files and returns their paths
/// (segment sheet first). Records are written in segment order, summaries in
/// the ascending key order the aggregator produced.
pub fn export_recap(
    records: &[EnrichedSegmentRecord],
    recap: &Recap,
    output_dir: Option<&Path>,
) -> Result<(PathBuf, PathBuf)> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");

    let segment_path = resolve_path(output_dir, &format!("rekap_segmen_{timestamp}.csv"))?;
    let subsls_path = resolve_path(output_dir, &format!("rekap_subsls_{timestamp}.csv"))?;

    write_segment_sheet(records, &segment_path)?;
    write_subsls_sheet(recap, &subsls_path)?;

    Ok((segment_path, subsls_path))
}

fn resolve_path(output_dir: Option<&Path>, filename: &str) -> Result<PathBuf> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| LkmError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(dir.join(filename))
    } else {
        Ok(filename.into())
    }
}

fn sheet_writer(path: &Path) -> Result<Writer<BufWriter<File>>> {
    let file = File::create(path).map_err(|e| LkmError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }

    Ok(builder.from_writer(writer))
}

fn write_segment_sheet(records: &[EnrichedSegmentRecord], path: &Path) -> Result<()> {
    let mut wtr = sheet_writer(path)?;
    wtr.write_record(SEGMENT_SHEET_HEADERS)?;

    for record in records {
        let subsls = record.subsls.map(|k| k.to_string()).unwrap_or_default();
        wtr.write_record([
            record.segment.to_string(),
            record.btt.to_string(),
            record.btt_kosong.to_string(),
            record.bku.to_string(),
            record.bbtt_non_usaha.to_string(),
            record.muatan_usaha.to_string(),
            record.perkiraan_kk.to_string(),
            record.total_muatan.to_string(),
            subsls,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_subsls_sheet(recap: &Recap, path: &Path) -> Result<()> {
    let mut wtr = sheet_writer(path)?;
    wtr.write_record(SUBSLS_SHEET_HEADERS)?;

    for summary in &recap.summaries {
        wtr.write_record([
            summary.subsls.to_string(),
            summary.perkiraan_kk.to_string(),
            summary.btt.to_string(),
            summary.btt_kosong.to_string(),
            summary.bku.to_string(),
            summary.bbtt_non_usaha.to_string(),
            summary.muatan_usaha.to_string(),
            summary.total_muatan.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
