//! Sweep range primitives for batch polar runs.
//!
//! Reynolds numbers are swept host-side: each value gets its own solver
//! session, so [`ReynoldsSweep`] materializes its points. Angle of attack
//! is swept inside the solver by a single ASEQ command, so [`AlphaSweep`]
//! only carries the bounds that command is given.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Inclusive integer sweep over Reynolds numbers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReynoldsSweep {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl ReynoldsSweep {
    pub fn validate(&self) -> CoreResult<()> {
        if self.step == 0 {
            return Err(CoreError::InvalidSweep {
                what: "Reynolds step must be nonzero",
            });
        }
        if self.end < self.start {
            return Err(CoreError::InvalidSweep {
                what: "Reynolds end must not be below start",
            });
        }
        Ok(())
    }

    /// All values start, start+step, ... up to and including end.
    pub fn points(&self) -> Vec<u32> {
        // Guarded by validate(); clamp keeps iteration finite regardless.
        let step = self.step.max(1) as usize;
        (self.start..=self.end).step_by(step).collect()
    }

    pub fn point_count(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        ((self.end - self.start) / self.step.max(1)) as usize + 1
    }
}

impl fmt::Display for ReynoldsSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} step {}", self.start, self.end, self.step)
    }
}

/// Angle-of-attack sweep in degrees, executed by the solver itself.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSweep {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl AlphaSweep {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(CoreError::InvalidSweep {
                what: "alpha bounds must be finite",
            });
        }
        if self.step == 0.0 {
            return Err(CoreError::InvalidSweep {
                what: "alpha step must be nonzero",
            });
        }
        if (self.end - self.start) * self.step < 0.0 {
            return Err(CoreError::InvalidSweep {
                what: "alpha step direction must match the bounds",
            });
        }
        Ok(())
    }

    /// Number of angles the solver will attempt, endpoints inclusive.
    ///
    /// Truncates like the solver does when the step does not divide the
    /// span evenly.
    pub fn point_count(&self) -> usize {
        if self.step == 0.0 {
            return 1;
        }
        let spans = ((self.end - self.start) / self.step).floor();
        if spans < 0.0 {
            return 0;
        }
        spans as usize + 1
    }
}

impl fmt::Display for AlphaSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} step {}", self.start, self.end, self.step)
    }
}
