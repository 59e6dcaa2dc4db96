pub mod config;
pub mod daily;
pub mod generate;
pub mod init;
pub mod monthly;
pub mod upload;

use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::models::report::StructuredReport;
use crate::utils::path::expand_tilde;

/// Shared `--export FILE [--format F]` handling for tabular reports.
///
/// Without `--format` the file extension decides, falling back to CSV.
pub(crate) fn export_if_requested(
    report: &StructuredReport,
    export: &Option<String>,
    format: &Option<ExportFormat>,
    force: bool,
) -> AppResult<()> {
    let Some(target) = export else {
        return Ok(());
    };

    let path = expand_tilde(target);
    let format = format
        .clone()
        .or_else(|| ExportFormat::from_path(&path))
        .unwrap_or(ExportFormat::Csv);

    ExportLogic::export_report(report, &format, &path, force)
}
