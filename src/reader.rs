//! CSV input boundary for the CLI collaborator. One row per segment with the
//! raw counts; the `Subsls` column may be left empty for rows the operator
//! has not assigned yet.

use crate::error::{LkmError, Result};
use crate::model::RawSegmentInput;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

pub const INPUT_HEADERS: [&str; 7] = [
    "Segmen",
    "BTT",
    "BTT Kosong",
    "BKU",
    "BBTT Non Usaha",
    "Perkiraan Muatan Usaha",
    "Subsls",
];

/// One parsed input row: the raw counts plus the operator's SubSLS key, if
/// already assigned. The key travels beside the raw input because the core
/// allocator never sees or assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRow {
    pub input: RawSegmentInput,
    pub subsls: Option<u32>,
}

/// Reads segment rows from a CSV file.
pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<SegmentRow>> {
    let file = std::fs::File::open(path)?;
    read_segments_from(file)
}

/// Read CSV with the `Segmen,BTT,...,Subsls` format.
/// - Segment indices are assigned from row order (1-based); the `Segmen`
///   column is informational and not parsed.
/// - An empty `Subsls` cell means the key is not assigned yet.
/// - A file with only the header row is a valid, empty input set.
pub fn read_segments_from<R: Read>(reader: R) -> Result<Vec<SegmentRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    validate_headers(&mut rdr)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // CSV rows are 1-indexed, +1 for header
        let segment = (i + 1) as u32;

        rows.push(parse_row(&rec, row, segment)?);
    }

    Ok(rows)
}

fn validate_headers<R: Read>(rdr: &mut csv::Reader<R>) -> Result<()> {
    let headers = rdr
        .headers()
        .map_err(|e| LkmError::CsvHeader(format!("Failed to read headers: {e}")))?;

    for (index, expected) in INPUT_HEADERS.iter().enumerate() {
        let got = headers.get(index).ok_or_else(|| {
            LkmError::CsvHeader(format!("Missing '{expected}' column at index {index}"))
        })?;
        if !got.eq_ignore_ascii_case(expected) {
            return Err(LkmError::CsvHeader(format!(
                "Expected '{expected}' in column {index}, found '{got}'"
            )));
        }
    }

    Ok(())
}

fn parse_row(rec: &StringRecord, row: usize, segment: u32) -> Result<SegmentRow> {
    let input = RawSegmentInput {
        segment,
        btt: parse_count(rec, 1, "BTT", row)?,
        btt_kosong: parse_count(rec, 2, "BTT Kosong", row)?,
        bku: parse_count(rec, 3, "BKU", row)?,
        bbtt_non_usaha: parse_count(rec, 4, "BBTT Non Usaha", row)?,
        muatan_usaha: parse_count(rec, 5, "Perkiraan Muatan Usaha", row)?,
    };

    let subsls = match rec.get(6).map(str::trim) {
        None | Some("") => None,
        Some(_) => {
            let key = parse_count(rec, 6, "Subsls", row)?;
            if key == 0 {
                return Err(LkmError::InvalidGroupKey { row, value: 0 });
            }
            Some(key)
        }
    };

    Ok(SegmentRow { input, subsls })
}

fn parse_count(rec: &StringRecord, index: usize, column: &'static str, row: usize) -> Result<u32> {
    let value = rec.get(index).unwrap_or("").trim();
    value.parse().map_err(|source| LkmError::CountParse {
        row,
        column,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Segmen,BTT,BTT Kosong,BKU,BBTT Non Usaha,Perkiraan Muatan Usaha,Subsls";

    #[test]
    fn reads_rows_with_and_without_keys() {
        let csv = format!("{HEADER}\n1,10,2,1,0,0,1\n2,30,0,2,1,3,\n");
        let rows = read_segments_from(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].input.segment, 1);
        assert_eq!(rows[0].input.btt, 10);
        assert_eq!(rows[0].input.btt_kosong, 2);
        assert_eq!(rows[0].subsls, Some(1));
        assert_eq!(rows[1].input.muatan_usaha, 3);
        assert_eq!(rows[1].subsls, None);
    }

    #[test]
    fn segment_index_comes_from_row_order() {
        // The Segmen column is informational; row order wins.
        let csv = format!("{HEADER}\n9,1,0,0,0,0,1\n4,2,0,0,0,0,1\n");
        let rows = read_segments_from(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].input.segment, 1);
        assert_eq!(rows[1].input.segment, 2);
    }

    #[test]
    fn header_only_file_is_an_empty_input_set() {
        let csv = format!("{HEADER}\n");
        let rows = read_segments_from(csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn rejects_wrong_header() {
        let csv = "Segmen,BTT,Kosong,BKU,BBTT Non Usaha,Perkiraan Muatan Usaha,Subsls\n";
        let err = read_segments_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LkmError::CsvHeader(_)));
    }

    #[test]
    fn rejects_negative_count_with_row_and_column() {
        let csv = format!("{HEADER}\n1,10,0,0,0,0,1\n2,-3,0,0,0,0,1\n");
        let err = read_segments_from(csv.as_bytes()).unwrap_err();
        match err {
            LkmError::CountParse { row, column, value, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "BTT");
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_integer_count() {
        let csv = format!("{HEADER}\n1,2.5,0,0,0,0,1\n");
        let err = read_segments_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LkmError::CountParse { .. }));
    }

    #[test]
    fn rejects_zero_subsls_key() {
        let csv = format!("{HEADER}\n1,10,0,0,0,0,0\n");
        let err = read_segments_from(csv.as_bytes()).unwrap_err();
        match err {
            LkmError::InvalidGroupKey { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
