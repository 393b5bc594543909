//! Error types for the ps-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Plan error: {0}")]
    Plan(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ps-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ps_plan::PlanError> for AppError {
    fn from(err: ps_plan::PlanError) -> Self {
        AppError::Plan(err.to_string())
    }
}

impl From<ps_xfoil::XfoilError> for AppError {
    fn from(err: ps_xfoil::XfoilError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<ps_results::ResultsError> for AppError {
    fn from(err: ps_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
