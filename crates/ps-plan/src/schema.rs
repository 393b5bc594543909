//! Sweep plan schema definitions.

use ps_core::{AlphaSweep, ReynoldsSweep};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plan schema version accepted by this build.
pub const PLAN_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepPlan {
    pub version: u32,
    /// Airfoil display names; the last token of each must be a 4-digit
    /// NACA code.
    pub airfoils: Vec<String>,
    /// Mach numbers; the full Reynolds sweep is run at each one.
    pub mach: Vec<f64>,
    pub reynolds: ReynoldsSweep,
    pub alpha: AlphaSweep,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub paneling: PanelingDef,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl SweepPlan {
    /// Total number of solver sessions the plan will launch.
    pub fn combination_count(&self) -> usize {
        self.airfoils.len() * self.mach.len() * self.reynolds.point_count()
    }
}

/// How the external solver binary is invoked and bounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    /// Executable name or path; resolved through PATH when bare.
    #[serde(default = "default_executable")]
    pub executable: PathBuf,
    /// Viscous solution iteration limit handed to the solver (ITER).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Wall-clock bound per session; the child is killed when it elapses.
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
    /// Banner lines to skip at the top of each polar save-file.
    #[serde(default = "default_polar_header_lines")]
    pub polar_header_lines: usize,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            max_iterations: default_max_iterations(),
            timeout_s: default_timeout_s(),
            polar_header_lines: default_polar_header_lines(),
        }
    }
}

/// Surface paneling applied before each session (solver PPAR menu).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelingDef {
    #[serde(default = "default_panels")]
    pub panels: u32,
    #[serde(default = "default_bunching")]
    pub bunching: f64,
    /// Trailing-edge / leading-edge panel density ratio.
    #[serde(default = "default_te_le_ratio")]
    pub te_le_ratio: f64,
}

impl Default for PanelingDef {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            bunching: default_bunching(),
            te_le_ratio: default_te_le_ratio(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_executable() -> PathBuf {
    PathBuf::from("xfoil")
}

fn default_max_iterations() -> u32 {
    10_000
}

fn default_timeout_s() -> u64 {
    60
}

fn default_polar_header_lines() -> usize {
    12
}

fn default_panels() -> u32 {
    200
}

fn default_bunching() -> f64 {
    1.1
}

fn default_te_le_ratio() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_defaults() {
        let solver = SolverDef::default();
        assert_eq!(solver.executable, PathBuf::from("xfoil"));
        assert_eq!(solver.max_iterations, 10_000);
        assert_eq!(solver.timeout_s, 60);
        assert_eq!(solver.polar_header_lines, 12);
    }

    #[test]
    fn paneling_defaults() {
        let paneling = PanelingDef::default();
        assert_eq!(paneling.panels, 200);
        assert!((paneling.bunching - 1.1).abs() < 1e-12);
        assert!((paneling.te_le_ratio - 0.3).abs() < 1e-12);
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = r#"
version: 1
airfoils: ["NACA 4412"]
mach: [0.001, 0.1]
reynolds: { start: 30000, end: 30000, step: 1 }
alpha: { start: -4.0, end: 16.0, step: 1.0 }
"#;
        let plan: SweepPlan = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.solver, SolverDef::default());
        assert_eq!(plan.paneling, PanelingDef::default());
        assert_eq!(plan.output_dir, PathBuf::from("output"));
        assert_eq!(plan.combination_count(), 2);
    }

    #[test]
    fn partial_solver_section_keeps_remaining_defaults() {
        let yaml = r#"
version: 1
airfoils: ["NACA 0012"]
mach: [0.1]
reynolds: { start: 10000, end: 50000, step: 10000 }
alpha: { start: 0.0, end: 10.0, step: 0.5 }
solver:
  timeout_s: 30
"#;
        let plan: SweepPlan = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.solver.timeout_s, 30);
        assert_eq!(plan.solver.max_iterations, 10_000);
        assert_eq!(plan.solver.polar_header_lines, 12);
    }

    #[test]
    fn combination_count_multiplies_all_axes() {
        let yaml = r#"
version: 1
airfoils: ["NACA 4412", "NACA 0012"]
mach: [0.001, 0.1, 0.2]
reynolds: { start: 10000, end: 30000, step: 10000 }
alpha: { start: -4.0, end: 16.0, step: 1.0 }
"#;
        let plan: SweepPlan = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.combination_count(), 2 * 3 * 3);
    }
}
