//! Simulation request types.

use sc_core::{Real, Subject};

use crate::plan::StudyPlan;

/// Projection horizon used when the caller does not override it.
pub const DEFAULT_HORIZON_WEEKS: u32 = 20;

/// One subject as entered in the input form.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectInput {
    /// User-editable display label. Free-form, not required to be unique;
    /// internal keying uses [`Subject`] instead.
    pub name: String,
    /// Current score, nominally 0-100 but accepted as-is.
    pub initial_score: Real,
}

impl SubjectInput {
    pub fn new(name: impl Into<String>, initial_score: Real) -> Self {
        Self {
            name: name.into(),
            initial_score,
        }
    }
}

/// Everything one "predict" action needs, assembled atomically.
///
/// Built fresh per invocation so there is no partially-updated input state
/// between two presses of the predict button.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRequest {
    pub subject1: SubjectInput,
    pub subject2: SubjectInput,
    pub plan: StudyPlan,
    /// Self-reported distraction, hours per day.
    pub distraction_hours: Real,
    /// Weeks to project; snapshots are emitted for weeks `0..=horizon_weeks`.
    pub horizon_weeks: u32,
}

impl SimulationRequest {
    /// Request with the default 20-week horizon.
    pub fn new(
        subject1: SubjectInput,
        subject2: SubjectInput,
        plan: StudyPlan,
        distraction_hours: Real,
    ) -> Self {
        Self {
            subject1,
            subject2,
            plan,
            distraction_hours,
            horizon_weeks: DEFAULT_HORIZON_WEEKS,
        }
    }

    pub fn subject(&self, subject: Subject) -> &SubjectInput {
        match subject {
            Subject::Subject1 => &self.subject1,
            Subject::Subject2 => &self.subject2,
        }
    }
}
