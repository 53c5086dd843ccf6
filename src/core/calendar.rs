//! Monthly calendar helpers and output-path stamping

use chrono::{Months, NaiveDate};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from date-range handling
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid month {0:?}, expected YYYY-MM")]
    InvalidMonth(String),

    #[error("empty date range: {end} is before {start}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
}

/// Parse "YYYY-MM" into the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidMonth(s.to_string());
    let (year, month) = s.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Month-start dates from `start` to `end`, inclusive
pub fn month_starts(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    if end < start {
        return Err(CalendarError::EmptyRange { start, end });
    }

    let mut months = Vec::new();
    let mut current = start;
    while current <= end {
        months.push(current);
        current = current + Months::new(1);
    }
    Ok(months)
}

/// Insert a generation stamp before the file extension
/// (`report.csv` -> `report_20240101_120000.csv`)
pub fn timestamped_path(path: &Path, stamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };
    path.with_file_name(name)
}
