//! Error types for the sc-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sc_project::ScenarioError> for AppError {
    fn from(err: sc_project::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}
