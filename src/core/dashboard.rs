//! Client for the attendance dashboard endpoints: CSV upload, daily list and
//! monthly summary.

use crate::config::Config;
use crate::errors::{AppResult, DispatchError, ValidationError};
use crate::models::dashboard::{DailyAttendanceRow, MonthlySummaryRow, UploadResponse};
use crate::models::parameters::YearMonth;
use crate::models::source_file::{FileExtension, SourceFile};
use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

pub struct DashboardClient {
    client: Client,
    api_base: String,
}

impl DashboardClient {
    pub fn new(api_base: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.api_base, Duration::from_secs(cfg.timeout_secs))
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Upload a CSV timesheet. Spreadsheets are not accepted by this endpoint.
    pub async fn upload_csv(&self, file: &SourceFile) -> AppResult<UploadResponse> {
        if file.extension() != FileExtension::Csv {
            return Err(ValidationError::UnsupportedExtension(file.name().to_string()).into());
        }

        let part = Part::bytes(file.raw_bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(FileExtension::Csv.mime_type())?;
        let form = Form::new().part("file", part);

        info!(file = file.name(), "uploading attendance CSV");
        let request = self
            .client
            .post(self.build_url("/attendance/upload-csv"))
            .multipart(form);

        Ok(send_json(request).await?)
    }

    pub async fn daily_report(&self, date: NaiveDate) -> AppResult<Vec<DailyAttendanceRow>> {
        let request = self
            .client
            .get(self.build_url("/reports/daily"))
            .query(&[("date", date.format("%Y-%m-%d").to_string())]);

        Ok(send_json(request).await?)
    }

    pub async fn monthly_report(&self, month: YearMonth) -> AppResult<Vec<MonthlySummaryRow>> {
        let request = self
            .client
            .get(self.build_url("/reports/monthly"))
            .query(&[("month", month.to_string())]);

        Ok(send_json(request).await?)
    }
}

/// One exchange, same failure mapping as the generation endpoint.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, DispatchError> {
    let response: Response = request.send().await.map_err(|e| {
        warn!(error = %e, "dashboard unreachable");
        DispatchError::unreachable(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "dashboard request rejected");
        return Err(DispatchError::ServerError(status.as_u16()));
    }

    response.json::<T>().await.map_err(|e| {
        warn!(error = %e, "dashboard returned an unreadable body");
        DispatchError::unreachable(e)
    })
}
