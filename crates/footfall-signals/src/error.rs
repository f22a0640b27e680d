use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("trend row for {date} has {found} values, expected {expected}")]
    TrendRowWidth {
        date: NaiveDate,
        expected: usize,
        found: usize,
    },

    #[error("duplicate trend keyword: '{0}'")]
    DuplicateTrendKeyword(String),

    #[error("duplicate trend date: {0}")]
    DuplicateTrendDate(NaiveDate),
}
