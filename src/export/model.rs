// src/export/model.rs

use crate::models::report::StructuredReport;

/// Header per CSV / XLSX / PDF
pub(crate) fn get_headers(report: &StructuredReport) -> Vec<&str> {
    report.columns.iter().map(String::as_str).collect()
}

/// Report rows as strings, one cell per column: short rows are padded,
/// extra cells dropped.
pub(crate) fn report_to_table(report: &StructuredReport) -> Vec<Vec<String>> {
    (0..report.rows.len())
        .map(|r| {
            (0..report.columns.len())
                .map(|c| report.cell(r, c).to_string())
                .collect()
        })
        .collect()
}

/// Single-line title: "Title - Subtitle (date)".
pub(crate) fn report_title(report: &StructuredReport) -> String {
    let mut title = if report.title.is_empty() {
        "Attendance Report".to_string()
    } else {
        report.title.clone()
    };

    if !report.subtitle.is_empty() {
        title.push_str(" - ");
        title.push_str(&report.subtitle);
    }
    if !report.date_label.is_empty() {
        title.push_str(&format!(" ({})", report.date_label));
    }
    title
}
