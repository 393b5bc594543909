//! Shared application service layer for polarsweep.
//!
//! This crate sits between the plan format and the solver interface,
//! centralizing plan loading and batch sweep execution so frontends stay
//! thin.

pub mod batch;
pub mod error;
pub mod plan_service;

// Re-export key types for convenience
pub use batch::{
    run_batch, run_batch_with_progress, session_script_for, AirfoilReport, BatchEvent,
    BatchSummary, CombinationOutcome, RejectedAirfoil,
};
pub use error::{AppError, AppResult};
pub use plan_service::load_plan;
