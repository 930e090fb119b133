//! Growth-rate comparison and message templating.

use sc_core::Real;
use sc_sim::GrowthRates;

/// Fixed clause appended whenever distraction is eating into growth.
const DISTRACTION_WARNING: &str =
    " Watch out: time spent on distractions is slowing your learning speed.";

/// Short natural-language verdict for one forecast.
///
/// Recomputed fresh per simulation; holds nothing but the rendered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceMessage {
    pub text: String,
}

impl std::fmt::Display for AdviceMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Derive the advice text from one run's growth rates.
///
/// The comparative clause is priority-ordered, first match wins: subject 1
/// faster, subject 2 faster, exact tie. Subject names are spliced in
/// verbatim — they are free-form user text and no escaping is attempted.
/// The distraction warning is appended only when the factor dipped
/// below 1.0.
pub fn classify(
    growth: GrowthRates,
    distraction_factor: Real,
    subject1_name: &str,
    subject2_name: &str,
) -> AdviceMessage {
    let mut text = if growth.subject1 > growth.subject2 {
        format!(
            "Your {subject1_name} score will improve faster than {subject2_name}. \
             Keep practicing consistently!"
        )
    } else if growth.subject2 > growth.subject1 {
        format!(
            "Your {subject2_name} score will improve faster than {subject1_name}. \
             Stay motivated and don't give up!"
        )
    } else {
        "Both subjects are improving at the same rate. Balance is key!".to_string()
    };

    if distraction_factor < 1.0 {
        text.push_str(DISTRACTION_WARNING);
    }

    AdviceMessage { text }
}
