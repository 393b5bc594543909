//! ps-results: polar tables, CSV output and sweep manifests.

pub mod manifest;
pub mod store;
pub mod table;

pub use manifest::{SkipReason, SkippedCombination, SweepManifest};
pub use store::OutputStore;
pub use table::{CSV_HEADER, PolarRow, PolarTable};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
