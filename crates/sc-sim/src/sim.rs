//! Simulation runner and snapshot recording.

use sc_core::{Real, Subject};

use crate::distraction::distraction_factor;
use crate::request::SimulationRequest;

/// Hard ceiling applied to every projected score after week 0.
pub const SCORE_CEILING: Real = 100.0;

/// Effective weekly increments once plan bias and distraction are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthRates {
    pub subject1: Real,
    pub subject2: Real,
}

impl GrowthRates {
    pub fn get(&self, subject: Subject) -> Real {
        match subject {
            Subject::Subject1 => self.subject1,
            Subject::Subject2 => self.subject2,
        }
    }
}

/// Projected scores for one sampled week.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeeklySnapshot {
    pub week: u32,
    pub subject1_score: Real,
    pub subject2_score: Real,
}

impl WeeklySnapshot {
    pub fn score(&self, subject: Subject) -> Real {
        match subject {
            Subject::Subject1 => self.subject1_score,
            Subject::Subject2 => self.subject2_score,
        }
    }
}

/// Record of one simulation run.
///
/// Snapshots are in week order by construction (0 through the requested
/// horizon, one per week) and the derived rates are carried along so the
/// advice classifier consumes exactly the values this run used.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub growth: GrowthRates,
    pub distraction_factor: Real,
    pub snapshots: Vec<WeeklySnapshot>,
}

impl SimulationResult {
    /// Number of projected weeks (the snapshot list is one longer).
    pub fn horizon_weeks(&self) -> u32 {
        self.snapshots.len() as u32 - 1
    }

    /// The last snapshot of the run.
    ///
    /// Every run holds at least the week-0 snapshot, so this is total.
    pub fn final_snapshot(&self) -> &WeeklySnapshot {
        self.snapshots.last().expect("simulate always emits week 0")
    }
}

/// Project week-by-week scores for both subjects.
///
/// Total over its input domain: any request built from finite numbers maps
/// to a result, and non-finite inputs flow through ordinary float
/// arithmetic rather than being special-cased. Week 0 is the raw initial
/// scores, untouched. Later weeks grow linearly at the derived rate and
/// saturate at [`SCORE_CEILING`]. No floor is applied: a negative initial
/// score stays wherever the arithmetic puts it.
pub fn simulate(request: &SimulationRequest) -> SimulationResult {
    let bias = request.plan.bias();
    let factor = distraction_factor(request.distraction_hours);
    let growth = GrowthRates {
        subject1: bias.subject1 * factor,
        subject2: bias.subject2 * factor,
    };
    tracing::debug!(
        distraction_factor = factor,
        growth1 = growth.subject1,
        growth2 = growth.subject2,
        horizon_weeks = request.horizon_weeks,
        "derived weekly growth rates"
    );

    let s1 = request.subject1.initial_score;
    let s2 = request.subject2.initial_score;

    let mut snapshots = Vec::with_capacity(request.horizon_weeks as usize + 1);
    snapshots.push(WeeklySnapshot {
        week: 0,
        subject1_score: s1,
        subject2_score: s2,
    });
    for week in 1..=request.horizon_weeks {
        let t = Real::from(week);
        snapshots.push(WeeklySnapshot {
            week,
            subject1_score: (s1 + growth.subject1 * t).min(SCORE_CEILING),
            subject2_score: (s2 + growth.subject2 * t).min(SCORE_CEILING),
        });
    }

    SimulationResult {
        growth,
        distraction_factor: factor,
        snapshots,
    }
}
