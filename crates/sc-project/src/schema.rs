//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// Current scenario file version.
pub const LATEST_VERSION: u32 = 1;

/// One saved scenario: the five user-editable prediction inputs plus an
/// optional horizon override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub subject1: SubjectDef,
    pub subject2: SubjectDef,
    pub plan: PlanDef,
    pub distraction_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_weeks: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectDef {
    pub name: String,
    pub initial_score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanDef {
    Balanced,
    FavorSubject1,
    FavorSubject2,
}

impl Scenario {
    /// Starter document written by `sc-cli init`.
    pub fn starter() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "starter".to_string(),
            subject1: SubjectDef {
                name: "Math".to_string(),
                initial_score: 95.07,
            },
            subject2: SubjectDef {
                name: "Latin".to_string(),
                initial_score: 80.0,
            },
            plan: PlanDef::Balanced,
            distraction_hours: 0.0,
            horizon_weeks: None,
        }
    }
}
