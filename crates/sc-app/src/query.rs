//! Query helpers for extracting display data from a run.

use sc_core::{Real, Subject};
use sc_sim::{SCORE_CEILING, SimulationResult};

/// Summary of a run for frontend display.
#[derive(Debug, Clone)]
pub struct PredictionSummary {
    pub horizon_weeks: u32,
    pub snapshot_count: usize,
    pub final_score1: Real,
    pub final_score2: Real,
    pub capped_week1: Option<u32>,
    pub capped_week2: Option<u32>,
}

/// Get a display summary from a simulation result.
pub fn prediction_summary(result: &SimulationResult) -> PredictionSummary {
    let last = result.final_snapshot();
    PredictionSummary {
        horizon_weeks: result.horizon_weeks(),
        snapshot_count: result.snapshots.len(),
        final_score1: last.subject1_score,
        final_score2: last.subject2_score,
        capped_week1: capped_week(result, Subject::Subject1),
        capped_week2: capped_week(result, Subject::Subject2),
    }
}

/// First projected week (t >= 1) where a subject sits at the ceiling.
///
/// Week 0 is excluded: initial scores are reported raw, so an input of
/// exactly 100 has not "reached" the ceiling yet.
pub fn capped_week(result: &SimulationResult, subject: Subject) -> Option<u32> {
    result
        .snapshots
        .iter()
        .skip(1)
        .find(|snapshot| snapshot.score(subject) >= SCORE_CEILING)
        .map(|snapshot| snapshot.week)
}

/// Extract the (week, score) series for one subject.
pub fn extract_series(result: &SimulationResult, subject: Subject) -> Vec<(u32, Real)> {
    result
        .snapshots
        .iter()
        .map(|snapshot| (snapshot.week, snapshot.score(subject)))
        .collect()
}
