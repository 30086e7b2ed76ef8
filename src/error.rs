use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LkmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("SubSLS key missing for segment(s): {}", format_segments(.segments))]
    MissingGroupKey { segments: Vec<u32> },

    #[error("Invalid CSV header: {0}")]
    CsvHeader(String),

    #[error("Invalid count in column '{column}' at row {row}: {value}")]
    CountParse {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("SubSLS key at row {row} must be 1 or greater, got {value}")]
    InvalidGroupKey { row: usize, value: u32 },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_segments(segments: &[u32]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LkmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_group_key_lists_segments() {
        let err = LkmError::MissingGroupKey {
            segments: vec![2, 5],
        };
        assert_eq!(err.to_string(), "SubSLS key missing for segment(s): 2, 5");
    }
}
