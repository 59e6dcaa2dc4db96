pub mod messages;
pub mod report;
