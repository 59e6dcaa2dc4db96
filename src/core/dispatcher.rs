//! Single network exchange with the report-generation service and
//! interpretation of its reply.
//!
//! The reply is resolved here, and only here, into a `GenerationResult`:
//! JSON bodies become a `StructuredReport`, anything else is a downloadable
//! `BinaryDocument`.

use crate::config::Config;
use crate::core::disposition::resolve_filename;
use crate::errors::{AppResult, DispatchError};
use crate::models::parameters::Frequency;
use crate::models::report::{
    BinaryDocument, CellValue, DownloadHandle, GenerationResult, StructuredReport,
};
use crate::models::request::GenerationRequest;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Wire shape of a structured reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredPayload {
    #[serde(default)]
    date_str: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: String,
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Value>,
}

pub struct ResponseDispatcher {
    client: Client,
    endpoint: String,
}

impl ResponseDispatcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(cfg.generate_url(), Duration::from_secs(cfg.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request once. No retry: a failure is returned to the caller,
    /// who decides whether to re-submit.
    pub async fn dispatch(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, DispatchError> {
        info!(
            endpoint = %self.endpoint,
            file = request.file().name(),
            frequency = %request.frequency(),
            "submitting report request"
        );

        let form = request.to_form().map_err(log_unreachable)?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(log_unreachable)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "report service rejected the request");
            return Err(DispatchError::ServerError(status.as_u16()));
        }

        let content_type = header_str(response.headers(), CONTENT_TYPE.as_str());
        let disposition = header_str(response.headers(), CONTENT_DISPOSITION.as_str());
        let body = response.bytes().await.map_err(log_unreachable)?;

        interpret_response(
            request.frequency(),
            content_type.as_deref(),
            disposition.as_deref(),
            body,
        )
        .inspect_err(|e| warn!(error = %e, "malformed response from report service"))
    }
}

/// Header values may carry raw UTF-8 (e.g. a non-ASCII filename).
fn header_str(headers: &reqwest::header::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

fn log_unreachable(e: reqwest::Error) -> DispatchError {
    warn!(error = %e, "report service unreachable");
    DispatchError::unreachable(e)
}

/// `application/json` and any `+json` structured syntax suffix.
pub fn is_structured_content(content_type: Option<&str>) -> bool {
    let Some(ct) = content_type else {
        return false;
    };

    let essence = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Route a successful reply to the binary or the structured handler.
pub fn interpret_response(
    frequency: Frequency,
    content_type: Option<&str>,
    disposition: Option<&str>,
    body: Bytes,
) -> Result<GenerationResult, DispatchError> {
    if is_structured_content(content_type) {
        return parse_structured(&body).map(GenerationResult::StructuredReport);
    }

    if body.is_empty() {
        return Err(DispatchError::unreachable("empty document body"));
    }

    let suggested_filename = resolve_filename(disposition, frequency);
    debug!(file = %suggested_filename, size = body.len(), "binary document received");

    Ok(GenerationResult::BinaryDocument(BinaryDocument {
        handle: DownloadHandle::new(body),
        suggested_filename,
        content_type: content_type.map(str::to_string),
    }))
}

/// Decode a structured reply. Row values are taken positionally: object rows
/// in key-insertion order, array rows as-is.
pub fn parse_structured(body: &[u8]) -> Result<StructuredReport, DispatchError> {
    let payload: StructuredPayload =
        serde_json::from_slice(body).map_err(DispatchError::unreachable)?;

    let mut rows = Vec::with_capacity(payload.rows.len());
    for (index, row) in payload.rows.iter().enumerate() {
        let cells: Vec<CellValue> = match row {
            Value::Object(map) => map.values().map(CellValue::from_json).collect(),
            Value::Array(items) => items.iter().map(CellValue::from_json).collect(),
            other => {
                return Err(DispatchError::unreachable(format!(
                    "row {index} is not an object or array: {other}"
                )));
            }
        };

        if cells.len() != payload.columns.len() {
            warn!(
                row = index,
                cells = cells.len(),
                columns = payload.columns.len(),
                "row arity differs from column count"
            );
        }

        rows.push(cells);
    }

    Ok(StructuredReport {
        title: payload.title,
        subtitle: payload.subtitle,
        date_label: payload.date_str,
        columns: payload.columns,
        rows,
    })
}
