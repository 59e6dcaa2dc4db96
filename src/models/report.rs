use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Sentinel attendance statuses that carry a rendering badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            "Late" => Some(AttendanceStatus::Late),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }

    /// CSS-style badge class used by renderers.
    pub fn badge_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "badge-present",
            AttendanceStatus::Absent => "badge-absent",
            AttendanceStatus::Late => "badge-late",
        }
    }
}

/// A single table cell of a structured report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(serde_json::Number),
    Status(AttendanceStatus),
    Text(String),
}

impl CellValue {
    /// Scalar JSON → cell. Nested values are kept as their JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => CellValue::Number(n.clone()),
            Value::String(s) => CellValue::from_text(s),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn from_text(s: &str) -> Self {
        match AttendanceStatus::parse(s) {
            Some(status) => CellValue::Status(status),
            None => CellValue::Text(s.to_string()),
        }
    }

    pub fn status(&self) -> Option<AttendanceStatus> {
        match self {
            CellValue::Status(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Status(s) => f.write_str(s.as_str()),
            CellValue::Text(t) => f.write_str(t),
        }
    }
}

/// Tabular payload returned for inline rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredReport {
    pub title: String,
    pub subtitle: String,
    pub date_label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl StructuredReport {
    /// Rows whose cell count differs from the column count.
    pub fn mismatched_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.len() != self.columns.len())
            .map(|(i, _)| i)
            .collect()
    }

    /// Cell at (`row`, `col`), padding short rows with `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Transient in-memory owner of a downloaded document.
///
/// The payload lives until the handle is released or dropped; a released
/// handle can no longer be saved.
#[derive(Debug)]
pub struct DownloadHandle {
    id: u64,
    bytes: Option<Bytes>,
}

impl DownloadHandle {
    pub fn new(bytes: Bytes) -> Self {
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(handle = id, size = bytes.len(), "download handle created");
        Self {
            id,
            bytes: Some(bytes),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.bytes.as_ref().map_or(0, Bytes::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_released(&self) -> bool {
        self.bytes.is_none()
    }

    pub fn bytes(&self) -> Option<&Bytes> {
        self.bytes.as_ref()
    }

    /// Write the payload to `path`.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let bytes = self.bytes.as_ref().ok_or_else(|| {
            AppError::Other(format!("download handle {} already released", self.id))
        })?;

        fs::write(path, bytes).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot write {}: {e}", path.display()),
            ))
        })
    }

    pub fn release(&mut self) {
        if let Some(bytes) = self.bytes.take() {
            debug!(handle = self.id, size = bytes.len(), "download handle released");
        }
    }
}

impl Drop for DownloadHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// A document the server produced for download.
#[derive(Debug)]
pub struct BinaryDocument {
    pub handle: DownloadHandle,
    pub suggested_filename: String,
    pub content_type: Option<String>,
}

/// What a successful generation produced, resolved once at the network boundary.
#[derive(Debug)]
pub enum GenerationResult {
    BinaryDocument(BinaryDocument),
    StructuredReport(StructuredReport),
}

impl GenerationResult {
    pub fn as_document(&self) -> Option<&BinaryDocument> {
        match self {
            GenerationResult::BinaryDocument(doc) => Some(doc),
            GenerationResult::StructuredReport(_) => None,
        }
    }

    pub fn as_report(&self) -> Option<&StructuredReport> {
        match self {
            GenerationResult::StructuredReport(report) => Some(report),
            GenerationResult::BinaryDocument(_) => None,
        }
    }

    /// Free any transient resource held by the result.
    pub fn release(&mut self) {
        if let GenerationResult::BinaryDocument(doc) = self {
            doc.handle.release();
        }
    }
}
