//! Locating the age column of a loan applicant CSV and streaming its values.
//!
//! The file is read once, forward only. Only the resolved age field of each
//! record is inspected; every other column is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::error::AgeStatsError;

/// Header names accepted as the age column, highest priority first.
pub const AGE_COLUMN_CANDIDATES: [&str; 4] = ["age", "Age", "client_age", "applicant_age"];

/// Ages read from one file together with the number of rows that were rejected
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeScan {
    /// Accepted ages, in row order
    pub ages: Vec<u64>,
    /// Rows whose age value was empty, non-numeric or out of range
    pub skipped: u64,
}

/// Finds the age column among the header fields.
///
/// Candidates are tried in priority order with exact, case-sensitive matching.
/// The first candidate present wins, even if a later one also appears.
pub fn find_age_column<S: AsRef<str>>(header: &[S]) -> Option<&'static str> {
    AGE_COLUMN_CANDIDATES
        .into_iter()
        .find(|candidate| header.iter().any(|field| field.as_ref() == *candidate))
}

/// Parses a raw age field. Accepts only a trimmed, non-empty run of ASCII digits
/// that fits in a `u64`.
pub fn parse_age(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Reads every valid age from the CSV file at `input_file_path`.
///
/// # Errors
///
/// * `FileNotFound` - the path does not exist; nothing is opened
/// * `ColumnNotFound` - no header field matches a known age column name
/// * `Read` - the file could not be opened, decoded or parsed as CSV
pub fn read_ages_from_csv(input_file_path: impl AsRef<Path>) -> Result<AgeScan, AgeStatsError> {
    let path = input_file_path.as_ref();
    if !path.exists() {
        return Err(AgeStatsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(csv::Error::from)?;
    debug!(path = %path.display(), "opened csv file");

    scan_ages(file)
}

/// Streams age values from any CSV source with a header row.
///
/// The reader is consumed; it is dropped on every return path.
pub fn scan_ages<R: Read>(source: R) -> Result<AgeScan, AgeStatsError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let header: Vec<&str> = headers.iter().collect();

    let age_column = find_age_column(&header).ok_or(AgeStatsError::ColumnNotFound)?;

    // A duplicated header keeps the value of its last occurrence
    let age_index = header
        .iter()
        .rposition(|field| *field == age_column)
        .ok_or(AgeStatsError::ColumnNotFound)?;
    info!(column = age_column, index = age_index, "resolved age column");

    let mut scan = AgeScan::default();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => match parse_age(record.get(age_index).unwrap_or("")) {
                Some(age) => scan.ages.push(age),
                None => scan.skipped += 1,
            },
            Ok(false) => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!(accepted = scan.ages.len(), skipped = scan.skipped, "scanned age values");
    if scan.skipped > 0 {
        warn!(skipped = scan.skipped, "rows without a valid age were ignored");
    }

    Ok(scan)
}
