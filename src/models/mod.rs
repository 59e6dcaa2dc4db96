pub mod dashboard;
pub mod parameters;
pub mod report;
pub mod request;
pub mod source_file;

pub use parameters::{Frequency, ReportParameters, Scope, YearMonth};
pub use report::{
    AttendanceStatus, BinaryDocument, CellValue, DownloadHandle, GenerationResult,
    StructuredReport,
};
pub use request::GenerationRequest;
pub use source_file::{FileCandidate, FileExtension, SourceFile};
