// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::report::{AttendanceStatus, CellValue, StructuredReport};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling, badge colorati e auto-larghezza colonne.
pub(crate) fn export_xlsx(report: &StructuredReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if !report.title.is_empty() {
        worksheet
            .set_name(sheet_name(&report.title))
            .map_err(to_export_error)?;
    }

    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if report.columns.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers(report);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for row_index in 0..report.rows.len() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, width) in col_widths.iter_mut().enumerate() {
            let value = report.cell(row_index, col);
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;

            *width = (*width).max(UnicodeWidthStr::width(value.to_string().as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella: badge di stato, data/ora, numero o testo.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match value {
        CellValue::Empty => {
            worksheet
                .write_blank(row, col, &base)
                .map_err(to_export_error)?;
        }
        CellValue::Status(status) => {
            let fmt = base
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_background_color(status_fill(*status));
            worksheet
                .write_with_format(row, col, status.as_str(), &fmt)
                .map_err(to_export_error)?;
        }
        CellValue::Bool(b) => {
            worksheet
                .write_with_format(row, col, *b, &base)
                .map_err(to_export_error)?;
        }
        CellValue::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            let written = match n.as_f64() {
                Some(num) => worksheet.write_with_format(row, col, num, &fmt),
                None => worksheet.write_with_format(row, col, n.to_string(), &fmt),
            };
            written.map_err(to_export_error)?;
        }
        CellValue::Text(s) => {
            if let Some((num_format, serial)) = parse_to_excel_date(s) {
                let fmt = base.set_num_format(num_format);
                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(to_export_error)?;
            } else {
                worksheet
                    .write_with_format(row, col, s.as_str(), &base)
                    .map_err(to_export_error)?;
            }
        }
    }

    Ok(())
}

fn status_fill(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => Color::RGB(0xC6EFCE),
        AttendanceStatus::Absent => Color::RGB(0xFFC7CE),
        AttendanceStatus::Late => Color::RGB(0xFFEB9C),
    }
}

/// Excel sheet names: max 31 chars, no `[]:*?/\`, no leading or trailing `'`.
fn sheet_name(title: &str) -> String {
    let filtered: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .collect();

    let cleaned: String = filtered.trim().trim_matches('\'').chars().take(31).collect();
    let cleaned = cleaned.trim_end_matches('\'').to_string();

    if cleaned.trim().is_empty() {
        "Report".to_string()
    } else {
        cleaned
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
