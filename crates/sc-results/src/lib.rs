//! sc-results: chart-facing result records.
//!
//! The rendering boundary of the workspace. Engine output is keyed by
//! stable subject identifiers; this crate maps it to the free-form display
//! names the chart shell plots, as serde records, CSV, or JSON. Nothing is
//! stored: each shape is built from the current run and handed to the
//! caller.

pub mod series;
pub mod types;

pub use series::{chart_series, to_csv, to_json};
pub use types::{ChartSeries, SeriesPoint};
