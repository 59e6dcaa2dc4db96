use crate::models::parameters::{Frequency, ReportParameters, Scope};
use crate::models::source_file::SourceFile;
use reqwest::multipart::{Form, Part};

/// Immutable snapshot of what gets submitted: one file plus its parameters.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    file: SourceFile,
    params: ReportParameters,
}

impl GenerationRequest {
    pub(crate) fn new(file: SourceFile, params: ReportParameters) -> Self {
        Self { file, params }
    }

    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    pub fn params(&self) -> &ReportParameters {
        &self.params
    }

    pub fn frequency(&self) -> Frequency {
        self.params.frequency
    }

    /// Text fields of the multipart submission, in the order they are sent.
    ///
    /// Both `targetDate` and `targetMonth` are always present; `employeeId`
    /// only for employee-scoped reports.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let p = &self.params;
        let mut fields = vec![
            ("reportType", p.frequency.as_str().to_string()),
            ("reportScope", p.scope.as_str().to_string()),
            ("targetDate", p.target_date.format("%Y-%m-%d").to_string()),
            ("targetMonth", p.target_month.to_string()),
        ];

        if p.scope == Scope::Employee {
            fields.push(("employeeId", p.employee_id.trim().to_string()));
        }

        fields
    }

    /// Build the multipart body: the `file` part first, then every text field.
    pub fn to_form(&self) -> Result<Form, reqwest::Error> {
        let part = Part::bytes(self.file.raw_bytes().to_vec())
            .file_name(self.file.name().to_string())
            .mime_str(self.file.extension().mime_type())?;

        let form = self
            .form_fields()
            .into_iter()
            .fold(Form::new().part("file", part), |form, (name, value)| {
                form.text(name, value)
            });

        Ok(form)
    }
}
