use crate::errors::AppError;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report audience: the whole office or a single employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Office,
    Employee,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Office => "office",
            Scope::Employee => "employee",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar month, written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 7 {
            return Err(AppError::InvalidMonth(s.to_string()));
        }

        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map(YearMonth::of)
            .map_err(|_| AppError::InvalidMonth(s.to_string()))
    }
}

/// Everything that identifies a report besides the timesheet itself.
///
/// Both `target_date` and `target_month` are always kept: only the one that
/// matches `frequency` is meaningful, the other survives a frequency switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParameters {
    pub frequency: Frequency,
    pub scope: Scope,
    pub target_date: NaiveDate,
    pub target_month: YearMonth,
    pub employee_id: String,
}

impl ReportParameters {
    /// Defaults anchored on `today`: daily, office-wide, today's date and month.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            frequency: Frequency::default(),
            scope: Scope::default(),
            target_date: today,
            target_month: YearMonth::of(today),
            employee_id: String::new(),
        }
    }

    /// The period label the server is expected to use.
    pub fn active_period(&self) -> String {
        match self.frequency {
            Frequency::Daily => self.target_date.format("%Y-%m-%d").to_string(),
            Frequency::Monthly => self.target_month.to_string(),
        }
    }
}
