use crate::errors::PreconditionError;
use crate::models::parameters::{ReportParameters, Scope};
use crate::models::request::GenerationRequest;
use crate::models::source_file::SourceFile;

/// Assembles a submission from the selected file and the current parameters.
pub struct RequestBuilder;

impl RequestBuilder {
    /// Check preconditions in order and snapshot the request.
    ///
    /// 1. a file must be selected
    /// 2. employee reports need a non-blank employee id
    pub fn build(
        file: Option<&SourceFile>,
        params: &ReportParameters,
    ) -> Result<GenerationRequest, PreconditionError> {
        let file = file.ok_or(PreconditionError::NoFile)?;

        if params.scope == Scope::Employee && params.employee_id.trim().is_empty() {
            return Err(PreconditionError::MissingEmployeeId);
        }

        Ok(GenerationRequest::new(file.clone(), params.clone()))
    }
}
