use crate::errors::ValidationError;
use crate::models::source_file::{FileCandidate, FileExtension, SourceFile};
use tracing::debug;

/// Holds the currently selected timesheet.
#[derive(Debug, Default)]
pub struct FileIntake {
    current: Option<SourceFile>,
    strict_case: bool,
}

impl FileIntake {
    pub fn new(strict_case: bool) -> Self {
        Self {
            current: None,
            strict_case,
        }
    }

    pub fn current(&self) -> Option<&SourceFile> {
        self.current.as_ref()
    }

    /// Validate one candidate and, on success, replace the held file.
    ///
    /// On failure the previously held file is left untouched.
    pub fn submit_candidate(
        &mut self,
        candidate: FileCandidate,
    ) -> Result<SourceFile, ValidationError> {
        let extension = FileExtension::from_file_name(&candidate.name, self.strict_case)
            .ok_or_else(|| ValidationError::UnsupportedExtension(candidate.name.clone()))?;

        if let Some(hint) = candidate.mime_hint.as_deref()
            && FileExtension::from_mime(hint) != Some(extension)
        {
            debug!(
                file = %candidate.name,
                mime = hint,
                "MIME hint disagrees with extension, extension wins"
            );
        }

        let file = SourceFile::new(candidate.name, extension, candidate.bytes);
        debug!(file = file.name(), size = file.size_bytes(), "timesheet accepted");

        self.current = Some(file.clone());
        Ok(file)
    }

    /// Multi-file drop: only the first candidate is considered, the rest are
    /// dropped. Returns `None` when nothing was offered.
    pub fn submit_first<I>(&mut self, candidates: I) -> Option<Result<SourceFile, ValidationError>>
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        let first = candidates.into_iter().next()?;
        Some(self.submit_candidate(first))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
