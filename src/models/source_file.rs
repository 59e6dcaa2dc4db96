use bytes::Bytes;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Timesheet formats accepted by the report service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    Csv,
    Xls,
    Xlsx,
}

impl FileExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileExtension::Csv => "csv",
            FileExtension::Xls => "xls",
            FileExtension::Xlsx => "xlsx",
        }
    }

    /// MIME type sent with the multipart `file` part.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileExtension::Csv => "text/csv",
            FileExtension::Xls => "application/vnd.ms-excel",
            FileExtension::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Resolve the extension from a file name suffix.
    ///
    /// With `strict_case` the suffix must be written exactly in lowercase
    /// (`report.CSV` is rejected); otherwise it is lower-cased first.
    pub fn from_file_name(name: &str, strict_case: bool) -> Option<Self> {
        let (_, suffix) = name.rsplit_once('.')?;

        let suffix = if strict_case {
            suffix.to_string()
        } else {
            suffix.to_ascii_lowercase()
        };

        match suffix.as_str() {
            "csv" => Some(FileExtension::Csv),
            "xls" => Some(FileExtension::Xls),
            "xlsx" => Some(FileExtension::Xlsx),
            _ => None,
        }
    }

    /// Best-effort reading of a platform MIME hint.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "text/csv" | "application/csv" => Some(FileExtension::Csv),
            "application/vnd.ms-excel" => Some(FileExtension::Xls),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(FileExtension::Xlsx)
            }
            _ => None,
        }
    }
}

/// A file offered to the intake, not yet validated.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub bytes: Bytes,
    pub mime_hint: Option<String>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            mime_hint: None,
        }
    }

    pub fn with_mime_hint(mut self, mime: impl Into<String>) -> Self {
        self.mime_hint = Some(mime.into());
        self
    }

    /// Read a candidate from disk. The name is the path's file name.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| io::Error::other(format!("not a file: {}", path.display())))?;

        let bytes = fs::read(path)?;
        Ok(Self::new(name, bytes))
    }
}

/// A validated timesheet, immutable once accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    size_bytes: u64,
    extension: FileExtension,
    raw_bytes: Bytes,
}

impl SourceFile {
    pub(crate) fn new(name: String, extension: FileExtension, raw_bytes: Bytes) -> Self {
        Self {
            size_bytes: raw_bytes.len() as u64,
            name,
            extension,
            raw_bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    pub fn raw_bytes(&self) -> &Bytes {
        &self.raw_bytes
    }
}
