//! ps-plan: sweep plan file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_plan};

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlanResult<SweepPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: SweepPlan = serde_yaml::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_yaml(path: &std::path::Path, plan: &SweepPlan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> PlanResult<SweepPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: SweepPlan = serde_json::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_json(path: &std::path::Path, plan: &SweepPlan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}
