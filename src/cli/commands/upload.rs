use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DashboardClient, FileIntake};
use crate::errors::AppResult;
use crate::models::source_file::FileCandidate;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `upload` command: push a CSV timesheet to the dashboard store.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Upload { file } = cmd {
        let candidate = FileCandidate::from_path(&expand_tilde(file))?;
        let mut intake = FileIntake::new(cfg.strict_extension_case);
        let source = intake.submit_candidate(candidate)?;

        info(format!(
            "Uploading {} ({} bytes)…",
            source.name(),
            source.size_bytes()
        ));

        let client = DashboardClient::from_config(cfg)?;
        let response = client.upload_csv(&source).await?;

        success(response.message);
    }

    Ok(())
}
