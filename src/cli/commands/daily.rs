use crate::cli::commands::export_if_requested;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DashboardClient;
use crate::errors::AppResult;
use crate::models::dashboard::daily_report;
use crate::ui::report::render_report;
use crate::utils::date::date_or_today;

/// Handle the `daily` command
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        date,
        export,
        format,
        force,
    } = cmd
    {
        let date = date_or_today(date.as_deref())?;

        let client = DashboardClient::from_config(cfg)?;
        let rows = client.daily_report(date).await?;
        let report = daily_report(date, &rows);

        print!("{}", render_report(&report, &cfg.separator_char));
        export_if_requested(&report, export, format, *force)?;
    }

    Ok(())
}
