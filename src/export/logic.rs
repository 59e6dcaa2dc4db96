// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::report::{BinaryDocument, StructuredReport};
use crate::ui::messages::{success, warning};
use crate::utils::path::resolve_output;
use std::path::{Path, PathBuf};

/// High level entry points for writing results to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Write a structured report in the given `format`.
    ///
    /// The parent directory is created if missing; an existing file is only
    /// replaced with `force` or after confirmation.
    pub fn export_report(
        report: &StructuredReport,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if report.rows.is_empty() {
            warning("Report has no rows, exporting header only.");
        }

        match format {
            ExportFormat::Csv => export_csv(report, path)?,
            ExportFormat::Json => export_json(report, path)?,
            ExportFormat::Xlsx => export_xlsx(report, path)?,
            ExportFormat::Pdf => export_pdf(report, path)?,
        }

        Ok(())
    }

    /// Save a downloaded document.
    ///
    /// `target` may be a file path or an existing directory; without it the
    /// document lands in `default_dir` under its suggested file name.
    pub fn save_document(
        doc: &BinaryDocument,
        target: Option<&str>,
        default_dir: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output(target, default_dir, &doc.suggested_filename);

        ensure_writable(&path, force)?;
        doc.handle.save_to(&path)?;

        success(format!(
            "Report saved: {} ({} bytes)",
            path.display(),
            doc.handle.len()
        ));
        Ok(path)
    }
}
