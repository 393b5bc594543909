//! Per-airfoil sweep manifest records.

use ps_core::{AlphaSweep, ReynoldsSweep};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a sweep combination contributed no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The solver exceeded the session bound and was killed.
    Timeout,
    /// The solver exited without writing its polar save-file.
    PolarMissing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::PolarMissing => write!(f, "polar file missing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkippedCombination {
    pub mach: f64,
    pub reynolds: u32,
    pub reason: SkipReason,
}

/// Record of one airfoil's completed sweep, written next to its CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepManifest {
    pub airfoil: String,
    pub timestamp: String,
    pub mach_values: Vec<f64>,
    pub reynolds: ReynoldsSweep,
    pub alpha: AlphaSweep,
    /// Sessions launched for this airfoil.
    pub combinations: usize,
    pub rows_written: usize,
    pub skipped: Vec<SkippedCombination>,
}

impl SweepManifest {
    /// Start a manifest stamped with the current UTC time.
    pub fn new(
        airfoil: String,
        mach_values: Vec<f64>,
        reynolds: ReynoldsSweep,
        alpha: AlphaSweep,
    ) -> Self {
        Self {
            airfoil,
            timestamp: chrono::Utc::now().to_rfc3339(),
            mach_values,
            reynolds,
            alpha,
            combinations: 0,
            rows_written: 0,
            skipped: Vec::new(),
        }
    }
}
