//! sc-project: canonical scenario file format and validation.

pub mod schema;
pub mod validate;

pub use schema::{LATEST_VERSION, PlanDef, Scenario, SubjectDef};
pub use validate::{ValidationError, validate_scenario};

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
version: 1
name: midterm-outlook
subject1:
  name: Math
  initial_score: 95.07
subject2:
  name: Latin
  initial_score: 80.0
plan: Balanced
distraction_hours: 0.0
horizon_weeks: 20
";

    #[test]
    fn sample_document_parses_and_validates() {
        let scenario: Scenario = serde_yaml::from_str(SAMPLE).unwrap();
        validate_scenario(&scenario).unwrap();
        assert_eq!(scenario.subject1.name, "Math");
        assert_eq!(scenario.plan, PlanDef::Balanced);
        assert_eq!(scenario.horizon_weeks, Some(20));
    }

    #[test]
    fn horizon_is_optional() {
        let doc = SAMPLE.replace("horizon_weeks: 20\n", "");
        let scenario: Scenario = serde_yaml::from_str(&doc).unwrap();
        validate_scenario(&scenario).unwrap();
        assert_eq!(scenario.horizon_weeks, None);
    }

    #[test]
    fn yaml_round_trip_preserves_the_scenario() {
        let scenario = Scenario::starter();
        let content = serde_yaml::to_string(&scenario).unwrap();
        let reparsed: Scenario = serde_yaml::from_str(&content).unwrap();
        assert_eq!(reparsed, scenario);
    }
}
