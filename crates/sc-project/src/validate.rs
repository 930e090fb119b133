//! Scenario validation logic.
//!
//! Shell-side checks only. The engine is total over finite input, so this
//! rejects just what the input form would: blank names, non-finite
//! numbers, a zero horizon, an unknown file version. Out-of-band but
//! finite values (scores above 100, negative distraction hours) pass
//! through deliberately.

use sc_core::{CoreError, ensure_finite};

use crate::schema::{LATEST_VERSION, Scenario, SubjectDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Empty subject name for {which}")]
    EmptyName { which: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    NonFinite(#[from] CoreError),
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_subject(&scenario.subject1, "subject1", "subject1.initial_score")?;
    validate_subject(&scenario.subject2, "subject2", "subject2.initial_score")?;

    ensure_finite(scenario.distraction_hours, "distraction_hours")?;

    if let Some(weeks) = scenario.horizon_weeks
        && weeks == 0
    {
        return Err(ValidationError::InvalidValue {
            field: "horizon_weeks".to_string(),
            value: "0".to_string(),
            reason: "must project at least one week".to_string(),
        });
    }

    Ok(())
}

fn validate_subject(
    subject: &SubjectDef,
    which: &'static str,
    score_field: &'static str,
) -> Result<(), ValidationError> {
    if subject.name.trim().is_empty() {
        return Err(ValidationError::EmptyName { which });
    }
    ensure_finite(subject.initial_score, score_field)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PlanDef;

    fn scenario() -> Scenario {
        Scenario::starter()
    }

    #[test]
    fn starter_scenario_is_valid() {
        validate_scenario(&scenario()).unwrap();
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut bad = scenario();
        bad.subject2.name = "   ".to_string();
        let err = validate_scenario(&bad).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName { which: "subject2" }));
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let mut bad = scenario();
        bad.subject1.initial_score = f64::NAN;
        let err = validate_scenario(&bad).unwrap_err();
        assert!(format!("{err}").contains("subject1.initial_score"));
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let mut bad = scenario();
        bad.horizon_weeks = Some(0);
        assert!(matches!(
            validate_scenario(&bad),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn future_versions_are_rejected() {
        let mut bad = scenario();
        bad.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_scenario(&bad),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn out_of_band_but_finite_values_pass() {
        // The engine accepts these and projects them as-is; the file
        // format does not second-guess it.
        let mut odd = scenario();
        odd.subject1.initial_score = 250.0;
        odd.distraction_hours = -2.0;
        odd.plan = PlanDef::FavorSubject2;
        validate_scenario(&odd).unwrap();
    }
}
