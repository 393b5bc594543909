//! Solver command-script construction.
//!
//! XFOIL is driven entirely through its interactive text menus; one polar
//! session is one scripted pass through them. Blank lines are part of the
//! grammar: they answer prompts and back out of sub-menus, so the layout
//! rendered here must be preserved byte for byte.
//!
//! Session shape: load the named section at the top menu, regenerate the
//! paneling (PANE + PPAR), enter OPER, set Mach/Reynolds/iteration limit,
//! arm polar accumulation (PACC) with a save-file, sweep alpha with one
//! ASEQ, disarm, quit.

use ps_core::{Airfoil, AlphaSweep};
use std::path::{Path, PathBuf};

/// Surface paneling parameters (solver PPAR menu).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paneling {
    /// Total number of surface panels (N).
    pub panels: u32,
    /// Panel bunching parameter (P).
    pub bunching: f64,
    /// Trailing-edge / leading-edge panel density ratio (T).
    pub te_le_ratio: f64,
}

/// Everything needed to script one solver session.
#[derive(Debug, Clone)]
pub struct SessionParams<'a> {
    pub airfoil: &'a Airfoil,
    pub mach: f64,
    pub reynolds: u32,
    pub alpha: AlphaSweep,
    pub paneling: Paneling,
    pub max_iterations: u32,
    pub output_dir: &'a Path,
}

/// A rendered command script plus the save-file path it tells the solver
/// to write. Keeping the two together means the driver can never look for
/// the polar anywhere other than where the script put it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionScript {
    pub text: String,
    pub save_file: PathBuf,
}

/// Save-file name for one (airfoil, Mach, Reynolds) session.
pub fn save_file_name(airfoil: &Airfoil, mach: f64, reynolds: u32) -> String {
    format!("{}_{}_{}_SAVE", airfoil.file_stem(), mach, reynolds)
}

/// Render the command script for one session.
pub fn build_session_script(params: &SessionParams<'_>) -> SessionScript {
    let save_file = params
        .output_dir
        .join(save_file_name(params.airfoil, params.mach, params.reynolds));

    let mut text = String::new();
    // Leading blank line clears any pending prompt at the top menu.
    text.push('\n');
    // A bare NACA designation at the top menu loads the built-in geometry.
    text.push_str(params.airfoil.name());
    text.push('\n');
    text.push('\n');
    text.push_str("PANE\n");
    text.push_str("PPAR\n");
    text.push_str(&format!("N {}\n", params.paneling.panels));
    text.push_str(&format!("P {}\n", params.paneling.bunching));
    text.push_str(&format!("T {}\n", params.paneling.te_le_ratio));
    // One blank accepts the PPAR changes, the rest climb back to the top
    // menu before OPER.
    text.push_str("\n\n\n\n");
    text.push_str("OPER\n");
    text.push_str(&format!("MACH {}\n", params.mach));
    text.push_str(&format!("VISC {}\n", params.reynolds));
    text.push_str(&format!("ITER {}\n", params.max_iterations));
    text.push_str("PACC\n");
    text.push_str(&format!("{}\n", save_file.display()));
    // Blank line declines the optional dump-file prompt.
    text.push('\n');
    text.push_str(&format!(
        "ASEQ {} {} {}\n",
        params.alpha.start, params.alpha.end, params.alpha.step
    ));
    text.push_str("PACC\n");
    text.push_str("QUIT\n");

    SessionScript { text, save_file }
}
