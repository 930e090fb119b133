//! Shaping engine output for the chart shell.

use sc_core::Subject;
use sc_sim::SimulationResult;

use crate::types::{ChartSeries, SeriesPoint};

/// Build the two display series from a run.
///
/// Display names enter here and nowhere earlier. The engine keys scores by
/// [`Subject`], so two subjects sharing a name only produce
/// identically-labelled series, never a key collision.
pub fn chart_series(result: &SimulationResult, names: [&str; 2]) -> Vec<ChartSeries> {
    Subject::ALL
        .iter()
        .map(|&subject| ChartSeries {
            name: names[subject.index()].to_string(),
            points: result
                .snapshots
                .iter()
                .map(|snapshot| SeriesPoint {
                    week: snapshot.week,
                    score: snapshot.score(subject),
                })
                .collect(),
        })
        .collect()
}

/// Render a run as CSV, one row per sampled week.
pub fn to_csv(result: &SimulationResult, names: [&str; 2]) -> String {
    let mut csv = format!("week,{},{}\n", names[0], names[1]);
    for snapshot in &result.snapshots {
        csv.push_str(&format!(
            "{},{},{}\n",
            snapshot.week, snapshot.subject1_score, snapshot.subject2_score
        ));
    }
    csv
}

/// Render the chart series as pretty JSON.
pub fn to_json(series: &[ChartSeries]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(series)
}
