//! Year + month name → calendar date → numeric date features.

use chrono::{Datelike, NaiveDate};

use crate::error::ReconError;

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// The four date features the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
    pub day: u32,
    /// 0 = Monday … 6 = Sunday.
    pub day_of_week: u32,
}

impl CalendarFeatures {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.weekday().num_days_from_monday(),
        }
    }
}

/// Month number (1–12) for a full month name, a three-letter abbreviation,
/// or a numeral. Case-insensitive; surrounding whitespace ignored.
pub fn parse_month(month: &str) -> Option<u32> {
    let m = month.trim().to_lowercase();
    if let Ok(n) = m.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    MONTH_NAMES
        .iter()
        .position(|name| *name == m || (m.len() == 3 && name.starts_with(m.as_str())))
        .map(|i| i as u32 + 1)
}

/// First day of the given month.
pub fn normalize_date(year: i32, month: &str) -> Result<NaiveDate, ReconError> {
    parse_month(month)
        .and_then(|m| NaiveDate::from_ymd_opt(year, m, 1))
        .ok_or_else(|| ReconError::InvalidDate {
            year,
            month: month.to_string(),
        })
}

pub fn calendar_features(year: i32, month: &str) -> Result<CalendarFeatures, ReconError> {
    normalize_date(year, month).map(CalendarFeatures::from_date)
}
