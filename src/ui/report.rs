use crate::models::report::{CellValue, StructuredReport};
use crate::utils::colors::{BOLD, GREY, RESET, color_for_status};
use crate::utils::table::{Cell, Table};

/// Render a structured report for the terminal: heading lines, then the table
/// with status badges colored.
pub fn render_report(report: &StructuredReport, separator: &str) -> String {
    let mut out = String::new();

    if !report.title.is_empty() {
        out.push_str(&format!("{BOLD}{}{RESET}\n", report.title));
    }
    if !report.subtitle.is_empty() {
        out.push_str(&format!("{}\n", report.subtitle));
    }
    if !report.date_label.is_empty() {
        out.push_str(&format!("{GREY}{}{RESET}\n", report.date_label));
    }
    out.push('\n');

    let mut table = Table::new(&report.columns, separator);
    for row in &report.rows {
        table.add_row(row.iter().map(to_cell).collect());
    }
    out.push_str(&table.render());

    if report.rows.is_empty() {
        out.push_str("No rows in report.\n");
    }
    out
}

fn to_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Status(status) => Cell::colored(status.as_str(), color_for_status(*status)),
        other => Cell::plain(other.to_string()),
    }
}
