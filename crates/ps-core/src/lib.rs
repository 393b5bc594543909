//! ps-core: stable foundation for polarsweep.
//!
//! Contains:
//! - airfoil (NACA 4-digit identity + shape fractions)
//! - sweep (Reynolds and angle-of-attack sweep ranges)
//! - error (shared error types)

pub mod airfoil;
pub mod error;
pub mod sweep;

// Re-exports: nice ergonomics for downstream crates
pub use airfoil::Airfoil;
pub use error::{CoreError, CoreResult};
pub use sweep::{AlphaSweep, ReynoldsSweep};
