use crate::cli::commands::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ReportSession, ResponseDispatcher, WorkflowState};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::report::GenerationResult;
use crate::models::source_file::FileCandidate;
use crate::ui::messages::{confirm, error, header, info, warning};
use crate::ui::report::render_report;
use crate::utils::date::{parse_date, parse_month, today};
use crate::utils::path::expand_tilde;

/// Handle the `generate` command
///
/// Steps:
///  1. validate the timesheet and select it
///  2. apply the report parameters given on the command line
///  3. submit once (again on request with `--interactive`)
///  4. save the document or render the tabular report
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        file,
        frequency,
        scope,
        date,
        month,
        employee,
        output,
        export,
        format,
        force,
        interactive,
    } = cmd
    {
        let mut session = ReportSession::from_config(cfg, today());

        let candidate = FileCandidate::from_path(&expand_tilde(file))?;
        let selected = session.select_file(candidate)?;
        info(format!(
            "Selected {} ({} bytes)",
            selected.name(),
            selected.size_bytes()
        ));

        if let Some(f) = frequency {
            session.set_frequency(*f)?;
        }
        if let Some(s) = scope {
            session.set_scope(*s)?;
        }
        if let Some(d) = date {
            session.set_target_date(parse_date(d)?)?;
        }
        if let Some(m) = month {
            session.set_target_month(parse_month(m)?)?;
        }
        if let Some(id) = employee {
            session.set_employee_id(id.as_str())?;
        }

        let dispatcher = ResponseDispatcher::from_config(cfg)?;

        loop {
            let params = session.parameters();
            header(format!(
                "Generating {} {} report for {}",
                params.frequency,
                params.scope,
                params.active_period()
            ));

            match session.generate(&dispatcher).await? {
                WorkflowState::Success(_) => break,
                WorkflowState::Failed(reason) => {
                    if *interactive {
                        error(format!("Report generation failed: {reason}"));
                        if confirm("Retry?") {
                            continue;
                        }
                    }
                    return Err(AppError::GenerationFailed(reason.to_string()));
                }
                other => {
                    return Err(AppError::Other(format!(
                        "unexpected workflow state after submission: {}",
                        other.name()
                    )));
                }
            }
        }

        match session.result() {
            Some(GenerationResult::BinaryDocument(doc)) => {
                if export.is_some() {
                    warning("--export only applies to tabular reports; ignored.");
                }
                ExportLogic::save_document(doc, output.as_deref(), &cfg.output_dir, *force)?;
            }
            Some(GenerationResult::StructuredReport(report)) => {
                if output.is_some() {
                    warning("--output only applies to downloaded documents; ignored.");
                }
                print!("{}", render_report(report, &cfg.separator_char));
                export_if_requested(report, export, format, *force)?;
            }
            None => {}
        }
    }

    Ok(())
}
