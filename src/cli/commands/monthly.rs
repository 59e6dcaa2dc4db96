use crate::cli::commands::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DashboardClient;
use crate::errors::AppResult;
use crate::models::dashboard::monthly_report;
use crate::ui::report::render_report;
use crate::utils::date::month_or_current;

/// Handle the `monthly` command
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Monthly {
        month,
        export,
        format,
        force,
    } = cmd
    {
        let month = month_or_current(month.as_deref())?;

        let client = DashboardClient::from_config(cfg)?;
        let rows = client.monthly_report(month).await?;
        let report = monthly_report(month, &rows);

        print!("{}", render_report(&report, &cfg.separator_char));
        export_if_requested(&report, export, format, *force)?;
    }

    Ok(())
}
