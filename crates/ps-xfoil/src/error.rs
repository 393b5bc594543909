use std::path::PathBuf;
use thiserror::Error;

pub type XfoilResult<T> = Result<T, XfoilError>;

#[derive(Error, Debug)]
pub enum XfoilError {
    /// The solver executable could not be started at all.
    #[error("Failed to start solver '{}': {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        source: std::io::Error,
    },

    /// The session ended without the solver writing its polar save-file.
    #[error("Polar save-file not found: {}", .path.display())]
    PolarMissing { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
