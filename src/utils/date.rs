use crate::errors::{AppError, AppResult};
use crate::models::parameters::YearMonth;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_month() -> YearMonth {
    YearMonth::of(today())
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_month(s: &str) -> AppResult<YearMonth> {
    s.parse()
}

/// Optional CLI argument → date, falling back to today.
pub fn date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    s.map_or_else(|| Ok(today()), parse_date)
}

/// Optional CLI argument → month, falling back to the current one.
pub fn month_or_current(s: Option<&str>) -> AppResult<YearMonth> {
    s.map_or_else(|| Ok(current_month()), parse_month)
}
