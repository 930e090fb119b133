//! Prediction execution service.

use sc_advice::{AdviceMessage, classify};
use sc_project::{PlanDef, Scenario};
use sc_sim::{
    DEFAULT_HORIZON_WEEKS, SimulationRequest, SimulationResult, StudyPlan, SubjectInput, simulate,
};

/// Outcome of one predict action.
///
/// The trajectory and its advice text are produced together, from the same
/// derived rates, so the two can never disagree about which subject is
/// improving faster.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub result: SimulationResult,
    pub advice: AdviceMessage,
}

/// Map a scenario document onto an engine request.
pub fn build_request(scenario: &Scenario) -> SimulationRequest {
    SimulationRequest {
        subject1: SubjectInput::new(
            scenario.subject1.name.clone(),
            scenario.subject1.initial_score,
        ),
        subject2: SubjectInput::new(
            scenario.subject2.name.clone(),
            scenario.subject2.initial_score,
        ),
        plan: match scenario.plan {
            PlanDef::Balanced => StudyPlan::Balanced,
            PlanDef::FavorSubject1 => StudyPlan::FavorSubject1,
            PlanDef::FavorSubject2 => StudyPlan::FavorSubject2,
        },
        distraction_hours: scenario.distraction_hours,
        horizon_weeks: scenario.horizon_weeks.unwrap_or(DEFAULT_HORIZON_WEEKS),
    }
}

/// Run the engine and the classifier for one request.
pub fn predict(request: &SimulationRequest) -> Prediction {
    tracing::info!(
        plan = ?request.plan,
        distraction_hours = request.distraction_hours,
        horizon_weeks = request.horizon_weeks,
        "running prediction"
    );

    let result = simulate(request);
    let advice = classify(
        result.growth,
        result.distraction_factor,
        &request.subject1.name,
        &request.subject2.name,
    );

    Prediction { result, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_defaults_the_horizon() {
        let scenario = Scenario::starter();
        let request = build_request(&scenario);
        assert_eq!(request.horizon_weeks, DEFAULT_HORIZON_WEEKS);
        assert_eq!(request.subject1.name, "Math");
        assert_eq!(request.plan, StudyPlan::Balanced);
    }

    #[test]
    fn build_request_honors_an_explicit_horizon() {
        let mut scenario = Scenario::starter();
        scenario.horizon_weeks = Some(8);
        let request = build_request(&scenario);
        assert_eq!(request.horizon_weeks, 8);
    }

    #[test]
    fn prediction_couples_advice_to_the_run() {
        let mut scenario = Scenario::starter();
        scenario.plan = PlanDef::FavorSubject2;
        let prediction = predict(&build_request(&scenario));

        assert_eq!(prediction.result.growth.subject2, 1.2);
        assert!(prediction.advice.text.starts_with("Your Latin score will improve faster"));
    }
}
