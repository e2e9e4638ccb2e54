//! Dashboard roster state.
//!
//! DESIGN
//! ======
//! The optimistic toggle bookkeeping lives in `tenants::HospitalRoster`; this
//! wrapper only adds the loading and error flags the page renders.

#[cfg(test)]
#[path = "hospitals_test.rs"]
mod hospitals_test;

use tenants::{HospitalRoster, ListOutcome};

#[derive(Clone, Debug)]
pub struct HospitalsState {
    pub roster: HospitalRoster,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for HospitalsState {
    fn default() -> Self {
        Self {
            roster: HospitalRoster::default(),
            loading: true,
            error: None,
        }
    }
}

impl HospitalsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. Returns `true` when the session must end.
    pub fn apply_list(&mut self, outcome: ListOutcome) -> bool {
        self.loading = false;
        match outcome {
            ListOutcome::Loaded(hospitals) => {
                self.roster.replace_all(hospitals);
                self.error = None;
                false
            }
            ListOutcome::SignOut => true,
            ListOutcome::Failed(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    /// Forget everything, e.g. on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the table should render (not loading, no error).
    pub fn ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
