//! Shared application service layer for scorecast.
//!
//! This crate provides a unified interface for frontends, centralizing
//! scenario-to-request construction, prediction execution, and result
//! querying. The chart shell talks to this crate only.

pub mod error;
pub mod predict_service;
pub mod query;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use predict_service::{Prediction, build_request, predict};
pub use query::{PredictionSummary, capped_week, extract_series, prediction_summary};
