//! Sweep plan validation logic.

use crate::schema::{PLAN_VERSION, SweepPlan};
use ps_core::Airfoil;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate entry: {id} in {context}")]
    Duplicate { id: String, context: String },

    #[error("Empty list: {what}")]
    Empty { what: &'static str },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error(transparent)]
    Core(#[from] ps_core::CoreError),
}

pub fn validate_plan(plan: &SweepPlan) -> Result<(), ValidationError> {
    if plan.version > PLAN_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plan.version,
        });
    }

    if plan.airfoils.is_empty() {
        return Err(ValidationError::Empty { what: "airfoils" });
    }
    if plan.mach.is_empty() {
        return Err(ValidationError::Empty { what: "mach" });
    }

    let mut seen = HashSet::new();
    for name in &plan.airfoils {
        Airfoil::parse(name)?;
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                id: name.clone(),
                context: "airfoils".to_string(),
            });
        }
    }

    for &mach in &plan.mach {
        if !mach.is_finite() || !(0.0..1.0).contains(&mach) {
            return Err(ValidationError::InvalidValue {
                field: "mach".to_string(),
                value: mach.to_string(),
                reason: "must lie in [0, 1) for a subsonic panel solution".to_string(),
            });
        }
    }

    plan.reynolds.validate()?;
    plan.alpha.validate()?;

    if plan.paneling.panels == 0 {
        return Err(ValidationError::InvalidValue {
            field: "paneling.panels".to_string(),
            value: "0".to_string(),
            reason: "at least one surface panel is required".to_string(),
        });
    }
    if !plan.paneling.bunching.is_finite() || plan.paneling.bunching <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "paneling.bunching".to_string(),
            value: plan.paneling.bunching.to_string(),
            reason: "must be a positive number".to_string(),
        });
    }
    if !plan.paneling.te_le_ratio.is_finite() || plan.paneling.te_le_ratio <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "paneling.te_le_ratio".to_string(),
            value: plan.paneling.te_le_ratio.to_string(),
            reason: "must be a positive number".to_string(),
        });
    }

    if plan.solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations".to_string(),
            value: "0".to_string(),
            reason: "the solver needs at least one iteration".to_string(),
        });
    }
    if plan.solver.timeout_s == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.timeout_s".to_string(),
            value: "0".to_string(),
            reason: "sessions need a nonzero wall-clock bound".to_string(),
        });
    }

    Ok(())
}
