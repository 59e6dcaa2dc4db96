//! Row types of the attendance dashboard endpoints.
//! Unlike the generation endpoint, these are decoded by field name.

use crate::models::report::{CellValue, StructuredReport};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::parameters::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendanceRow {
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub date: Option<serde_json::Value>,
    #[serde(default)]
    pub office_location: Option<serde_json::Value>,
    #[serde(default)]
    pub login_time: Option<serde_json::Value>,
    #[serde(default)]
    pub logout_time: Option<serde_json::Value>,
    #[serde(default)]
    pub working_hours: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryRow {
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub office_days: Option<serde_json::Value>,
    #[serde(default)]
    pub remote_days: Option<serde_json::Value>,
    #[serde(default)]
    pub total_days_present: Option<serde_json::Value>,
}

pub(crate) const DAILY_COLUMNS: [&str; 7] = [
    "Employee", "Date", "Location", "Login", "Logout", "Hours", "Status",
];

pub(crate) const MONTHLY_COLUMNS: [&str; 4] =
    ["Employee", "Office Days", "Remote Days", "Total Present"];

/// Any JSON value the dashboard sends, `null` and missing included.
fn json_cell(value: &Option<serde_json::Value>) -> CellValue {
    value.as_ref().map_or(CellValue::Empty, CellValue::from_json)
}

/// Names are shown as typed, never read as a status badge.
fn name_cell(value: &Option<String>) -> CellValue {
    value
        .as_deref()
        .map_or(CellValue::Empty, |n| CellValue::Text(n.to_string()))
}

impl DailyAttendanceRow {
    fn to_cells(&self) -> Vec<CellValue> {
        vec![
            name_cell(&self.employee_name),
            json_cell(&self.date),
            json_cell(&self.office_location),
            json_cell(&self.login_time),
            json_cell(&self.logout_time),
            json_cell(&self.working_hours),
            json_cell(&self.status),
        ]
    }
}

impl MonthlySummaryRow {
    fn to_cells(&self) -> Vec<CellValue> {
        vec![
            name_cell(&self.employee_name),
            json_cell(&self.office_days),
            json_cell(&self.remote_days),
            json_cell(&self.total_days_present),
        ]
    }
}

/// Build a renderable report from the daily attendance list.
pub fn daily_report(date: NaiveDate, rows: &[DailyAttendanceRow]) -> StructuredReport {
    StructuredReport {
        title: "Daily Attendance".to_string(),
        subtitle: format!("{} employees", rows.len()),
        date_label: date.format("%Y-%m-%d").to_string(),
        columns: DAILY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows.iter().map(DailyAttendanceRow::to_cells).collect(),
    }
}

/// Build a renderable report from the monthly summary list.
pub fn monthly_report(month: YearMonth, rows: &[MonthlySummaryRow]) -> StructuredReport {
    StructuredReport {
        title: "Monthly Summary".to_string(),
        subtitle: format!("{} employees", rows.len()),
        date_label: month.to_string(),
        columns: MONTHLY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows.iter().map(MonthlySummaryRow::to_cells).collect(),
    }
}
