//! Date parsing and day-by-day range iteration

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;
use crate::error::AppError;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        AppError::date_parse_error(format!("'{input}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Closed interval of calendar days, `start <= end` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates the range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::invalid_date_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds and creates the range.
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    pub fn num_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Days in ascending order, one calendar day apart.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.succ_opt().filter(|next| *next <= end)
        })
    }
}
