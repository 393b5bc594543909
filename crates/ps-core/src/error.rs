use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid airfoil name '{name}': {reason}")]
    InvalidAirfoil { name: String, reason: &'static str },

    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },
}
