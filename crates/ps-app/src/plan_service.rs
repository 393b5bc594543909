//! Plan loading helpers shared by frontends.

use crate::error::AppResult;
use ps_plan::SweepPlan;
use std::path::Path;

/// Load and validate a sweep plan, dispatching on the file extension:
/// `.json` loads as JSON, anything else as YAML.
pub fn load_plan(path: &Path) -> AppResult<SweepPlan> {
    let plan = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ps_plan::load_json(path)?,
        _ => ps_plan::load_yaml(path)?,
    };
    Ok(plan)
}
