//! Result data types.

use sc_core::Real;
use serde::{Deserialize, Serialize};

/// One plotted point of a subject's trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub week: u32,
    pub score: Real,
}

/// One subject's full trajectory, labelled with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}
