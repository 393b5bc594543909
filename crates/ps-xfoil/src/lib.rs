//! ps-xfoil: the external-solver interface for polarsweep.
//!
//! Contains:
//! - script (command-script construction for one polar session)
//! - runner (blocking child-process execution with a bounded wait)
//! - polar (save-file parsing)
//! - error (solver interface errors)
//!
//! The solver is a black box reached only through its interactive text
//! interface: a script goes in on stdin, a polar save-file comes out on
//! disk. Everything here exists to honor that contract exactly.

pub mod error;
pub mod polar;
pub mod runner;
pub mod script;

pub use error::{XfoilError, XfoilResult};
pub use polar::{DEFAULT_HEADER_LINES, PolarPoint, parse_polar, read_polar_file};
pub use runner::{SessionOutcome, SessionRunner};
pub use script::{Paneling, SessionParams, SessionScript, build_session_script, save_file_name};
