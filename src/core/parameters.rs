use crate::models::parameters::{Frequency, ReportParameters, Scope, YearMonth};
use chrono::NaiveDate;

/// Mutable report configuration.
///
/// Every setter returns `true` when the stored value actually changed, which
/// is what the session uses to invalidate a stale result.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    params: ReportParameters,
}

impl ParameterStore {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            params: ReportParameters::starting_on(today),
        }
    }

    pub fn with_defaults(today: NaiveDate, frequency: Frequency, scope: Scope) -> Self {
        let mut store = Self::new(today);
        store.params.frequency = frequency;
        store.params.scope = scope;
        store
    }

    pub fn params(&self) -> &ReportParameters {
        &self.params
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> bool {
        replace(&mut self.params.frequency, frequency)
    }

    pub fn set_scope(&mut self, scope: Scope) -> bool {
        replace(&mut self.params.scope, scope)
    }

    pub fn set_target_date(&mut self, date: NaiveDate) -> bool {
        replace(&mut self.params.target_date, date)
    }

    pub fn set_target_month(&mut self, month: YearMonth) -> bool {
        replace(&mut self.params.target_month, month)
    }

    /// Stored as typed; blank values are only rejected at submission time.
    pub fn set_employee_id(&mut self, employee_id: impl Into<String>) -> bool {
        replace(&mut self.params.employee_id, employee_id.into())
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
