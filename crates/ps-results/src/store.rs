//! Output directory management.

use crate::manifest::SweepManifest;
use crate::table::PolarTable;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the output directory: creates it on demand, names the per-airfoil
/// artifacts, and cleans up transient solver save-files.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root_dir: PathBuf,
}

impl OutputStore {
    /// Open the output directory, creating it if absent.
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// CSV path for one airfoil file stem.
    pub fn csv_path(&self, file_stem: &str) -> PathBuf {
        self.root_dir.join(format!("{}.csv", file_stem))
    }

    /// Manifest path for one airfoil file stem.
    pub fn manifest_path(&self, file_stem: &str) -> PathBuf {
        self.root_dir.join(format!("{}_manifest.json", file_stem))
    }

    /// Persist one airfoil's table. The header row is written even when
    /// the table is empty so downstream tooling always sees the columns.
    pub fn write_csv(&self, file_stem: &str, table: &PolarTable) -> ResultsResult<PathBuf> {
        let path = self.csv_path(file_stem);
        fs::write(&path, table.to_csv())?;
        Ok(path)
    }

    pub fn write_manifest(
        &self,
        file_stem: &str,
        manifest: &SweepManifest,
    ) -> ResultsResult<PathBuf> {
        let path = self.manifest_path(file_stem);
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn load_manifest(&self, file_stem: &str) -> ResultsResult<SweepManifest> {
        let content = fs::read_to_string(self.manifest_path(file_stem))?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Delete a transient solver save-file. A file already gone is fine;
    /// anything else is reported so the caller can decide how loudly to
    /// complain.
    pub fn remove_save_file(&self, path: &Path) -> ResultsResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ResultsError::Io(err)),
        }
    }
}
