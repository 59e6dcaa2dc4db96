//! The report session: one owned context holding the selected file, the
//! parameters and the workflow state, changed only through the transition
//! methods below.
//!
//! ```text
//! Idle         --file validated-->          FileSelected
//! FileSelected --parameter edited-->        Configuring
//! Configuring  --generate, preconditions--> Submitting
//! Submitting   --dispatch ok / failed-->    Success / Failed
//! Failed       --generate-->                Submitting
//! Success      --file/parameter changed-->  Configuring
//! Success      --generate another-->        FileSelected
//! ```

use crate::config::Config;
use crate::core::builder::RequestBuilder;
use crate::core::dispatcher::ResponseDispatcher;
use crate::core::intake::FileIntake;
use crate::core::parameters::ParameterStore;
use crate::errors::{AppError, AppResult, DispatchError, ValidationError};
use crate::models::parameters::{Frequency, ReportParameters, Scope, YearMonth};
use crate::models::report::GenerationResult;
use crate::models::request::GenerationRequest;
use crate::models::source_file::{FileCandidate, SourceFile};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum WorkflowState {
    Idle,
    FileSelected,
    Configuring,
    Submitting,
    Success(GenerationResult),
    Failed(DispatchError),
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::FileSelected => "file-selected",
            WorkflowState::Configuring => "configuring",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Success(_) => "success",
            WorkflowState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug)]
pub struct ReportSession {
    intake: FileIntake,
    params: ParameterStore,
    state: WorkflowState,
}

impl ReportSession {
    pub fn new(today: NaiveDate, strict_extension_case: bool) -> Self {
        Self {
            intake: FileIntake::new(strict_extension_case),
            params: ParameterStore::new(today),
            state: WorkflowState::Idle,
        }
    }

    /// Session seeded with the configured default frequency and scope.
    pub fn from_config(cfg: &Config, today: NaiveDate) -> Self {
        Self {
            intake: FileIntake::new(cfg.strict_extension_case),
            params: ParameterStore::with_defaults(today, cfg.default_frequency, cfg.default_scope),
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting)
    }

    pub fn file(&self) -> Option<&SourceFile> {
        self.intake.current()
    }

    pub fn parameters(&self) -> &ReportParameters {
        self.params.params()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.state {
            WorkflowState::Success(result) => Some(result),
            _ => None,
        }
    }

    // ---------------------------
    // File selection
    // ---------------------------

    /// Validate and select a timesheet. A rejected candidate leaves both the
    /// held file and the state unchanged.
    pub fn select_file(&mut self, candidate: FileCandidate) -> AppResult<SourceFile> {
        self.ensure_idle_for_edit()?;

        let file = self.intake.submit_candidate(candidate)?;
        self.after_file_change();
        Ok(file)
    }

    /// Multi-file variant: only the first candidate counts.
    pub fn select_first<I>(&mut self, candidates: I) -> AppResult<Option<SourceFile>>
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        self.ensure_idle_for_edit()?;

        match self.intake.submit_first(candidates) {
            None => Ok(None),
            Some(Err(e)) => Err(AppError::Validation(e)),
            Some(Ok(file)) => {
                self.after_file_change();
                Ok(Some(file))
            }
        }
    }

    fn after_file_change(&mut self) {
        let next = match self.state {
            WorkflowState::Idle => WorkflowState::FileSelected,
            WorkflowState::FileSelected => WorkflowState::FileSelected,
            _ => WorkflowState::Configuring,
        };
        self.transition(next);
    }

    // ---------------------------
    // Parameters
    // ---------------------------

    pub fn set_frequency(&mut self, frequency: Frequency) -> AppResult<bool> {
        self.edit(|p| p.set_frequency(frequency))
    }

    pub fn set_scope(&mut self, scope: Scope) -> AppResult<bool> {
        self.edit(|p| p.set_scope(scope))
    }

    pub fn set_target_date(&mut self, date: NaiveDate) -> AppResult<bool> {
        self.edit(|p| p.set_target_date(date))
    }

    pub fn set_target_month(&mut self, month: YearMonth) -> AppResult<bool> {
        self.edit(|p| p.set_target_month(month))
    }

    pub fn set_employee_id(&mut self, employee_id: impl Into<String>) -> AppResult<bool> {
        let employee_id = employee_id.into();
        self.edit(|p| p.set_employee_id(employee_id))
    }

    fn edit<F>(&mut self, apply: F) -> AppResult<bool>
    where
        F: FnOnce(&mut ParameterStore) -> bool,
    {
        self.ensure_idle_for_edit()?;

        let changed = apply(&mut self.params);
        if changed && !matches!(self.state, WorkflowState::Idle) {
            self.transition(WorkflowState::Configuring);
        }
        Ok(changed)
    }

    fn ensure_idle_for_edit(&self) -> AppResult<()> {
        if self.is_submitting() {
            return Err(AppError::SubmissionInProgress);
        }
        Ok(())
    }

    // ---------------------------
    // Submission
    // ---------------------------

    /// First half of a submission: check preconditions and enter `Submitting`.
    ///
    /// Returns `Ok(None)` without doing anything when a submission is already
    /// in flight. A failed precondition leaves the state as it was.
    pub fn begin_submission(&mut self) -> AppResult<Option<GenerationRequest>> {
        if self.is_submitting() {
            debug!("submit ignored: a submission is already in flight");
            return Ok(None);
        }

        let request = RequestBuilder::build(self.intake.current(), self.params.params())?;
        self.transition(WorkflowState::Submitting);
        Ok(Some(request))
    }

    /// Second half of a submission: leave `Submitting` for `Success` or
    /// `Failed`. Outcomes arriving outside `Submitting` are stale and dropped.
    pub fn complete_submission(
        &mut self,
        outcome: Result<GenerationResult, DispatchError>,
    ) -> &WorkflowState {
        if !self.is_submitting() {
            warn!(state = self.state.name(), "stale submission outcome discarded");
            return &self.state;
        }

        let next = match outcome {
            Ok(result) => WorkflowState::Success(result),
            Err(reason) => WorkflowState::Failed(reason),
        };
        self.transition(next);
        &self.state
    }

    /// Submit the current file and parameters and wait for the reply.
    ///
    /// If the returned future is dropped before the reply arrives (timeout,
    /// `select!`), the session lands in `Failed` instead of staying in
    /// `Submitting`.
    pub async fn generate(&mut self, dispatcher: &ResponseDispatcher) -> AppResult<&WorkflowState> {
        let Some(request) = self.begin_submission()? else {
            return Ok(&self.state);
        };

        let pending = PendingSubmission {
            session: Some(self),
        };
        let outcome = dispatcher.dispatch(&request).await;

        let session = pending
            .finish(outcome)
            .ok_or_else(|| AppError::Other("submission already completed".to_string()))?;
        Ok(&session.state)
    }

    /// "Generate another report": back to `FileSelected`, keeping the file.
    /// Only applies from `Success`.
    pub fn generate_another(&mut self) -> AppResult<bool> {
        self.ensure_idle_for_edit()?;

        if !matches!(self.state, WorkflowState::Success(_)) {
            return Ok(false);
        }
        self.transition(WorkflowState::FileSelected);
        Ok(true)
    }

    fn transition(&mut self, next: WorkflowState) {
        let mut previous = std::mem::replace(&mut self.state, next);

        if let WorkflowState::Success(result) = &mut previous {
            result.release();
        }

        if previous.name() != self.state.name() {
            info!(from = previous.name(), to = self.state.name(), "workflow transition");
        }
    }
}

/// Completes an in-flight submission exactly once, even when the awaiting
/// future is dropped.
struct PendingSubmission<'a> {
    session: Option<&'a mut ReportSession>,
}

impl<'a> PendingSubmission<'a> {
    fn finish(
        mut self,
        outcome: Result<GenerationResult, DispatchError>,
    ) -> Option<&'a mut ReportSession> {
        let session = self.session.take()?;
        session.complete_submission(outcome);
        Some(session)
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            warn!("submission abandoned before the reply arrived");
            session.complete_submission(Err(DispatchError::unreachable("submission abandoned")));
        }
    }
}
