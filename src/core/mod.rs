pub mod builder;
pub mod dashboard;
pub mod dispatcher;
pub mod disposition;
pub mod intake;
pub mod parameters;
pub mod workflow;

pub use builder::RequestBuilder;
pub use dashboard::DashboardClient;
pub use dispatcher::ResponseDispatcher;
pub use intake::FileIntake;
pub use parameters::ParameterStore;
pub use workflow::{ReportSession, WorkflowState};
