// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, report_title, report_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::report::StructuredReport;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: one paginated table, title repeated on every page.
pub(crate) fn export_pdf(report: &StructuredReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let title = report_title(report);
    let headers = get_headers(report);
    let data_vec = report_to_table(report);

    let mut pdf = PdfManager::new();
    pdf.write_table(&title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
