//! Batch sweep execution service.
//!
//! Runs a whole plan: every airfoil against every (Mach, Reynolds)
//! combination, one solver session at a time, aggregating parsed polar
//! points into one table per airfoil. A combination that times out or
//! leaves no save-file is recorded and skipped; the sweep always advances
//! to the next combination.

use crate::error::AppResult;
use ps_core::Airfoil;
use ps_plan::SweepPlan;
use ps_results::{
    OutputStore, PolarRow, PolarTable, SkipReason, SkippedCombination, SweepManifest,
};
use ps_xfoil::{
    build_session_script, read_polar_file, Paneling, SessionOutcome, SessionParams, SessionRunner,
    SessionScript, XfoilError,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Terminal state of one sweep combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationOutcome {
    /// Session completed and the polar parsed; `rows` can be zero when no
    /// angle converged.
    Parsed { rows: usize },
    /// Session was killed at the timeout bound.
    TimedOut,
    /// Session completed but never wrote its save-file.
    PolarMissing,
}

/// Progress events streamed to the frontend during a batch run.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    CombinationStarted {
        airfoil: String,
        mach: f64,
        reynolds: u32,
        index: usize,
        total: usize,
    },
    CombinationFinished {
        airfoil: String,
        mach: f64,
        reynolds: u32,
        index: usize,
        total: usize,
        outcome: CombinationOutcome,
        /// Merged solver console output, present when the session
        /// completed.
        transcript: Option<String>,
    },
    AirfoilFinished {
        airfoil: String,
        csv_path: PathBuf,
        rows: usize,
        skipped: usize,
    },
}

/// Result of one airfoil's sweep.
#[derive(Debug, Clone)]
pub struct AirfoilReport {
    pub airfoil: String,
    pub csv_path: PathBuf,
    pub manifest_path: PathBuf,
    pub combinations: usize,
    pub rows_written: usize,
    pub skipped: Vec<SkippedCombination>,
}

/// An airfoil dropped before any solver session was launched.
#[derive(Debug, Clone)]
pub struct RejectedAirfoil {
    pub name: String,
    pub reason: String,
}

/// Result of a whole batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<AirfoilReport>,
    pub rejected: Vec<RejectedAirfoil>,
}

impl BatchSummary {
    pub fn total_rows(&self) -> usize {
        self.reports.iter().map(|r| r.rows_written).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped.len()).sum()
    }
}

/// Build the session script one combination receives under this plan.
pub fn session_script_for(
    plan: &SweepPlan,
    airfoil: &Airfoil,
    mach: f64,
    reynolds: u32,
) -> SessionScript {
    build_session_script(&SessionParams {
        airfoil,
        mach,
        reynolds,
        alpha: plan.alpha,
        paneling: Paneling {
            panels: plan.paneling.panels,
            bunching: plan.paneling.bunching,
            te_le_ratio: plan.paneling.te_le_ratio,
        },
        max_iterations: plan.solver.max_iterations,
        output_dir: &plan.output_dir,
    })
}

fn emit(progress_cb: &mut Option<&mut dyn FnMut(BatchEvent)>, event: BatchEvent) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(event);
    }
}

/// Run the whole plan.
pub fn run_batch(plan: &SweepPlan) -> AppResult<BatchSummary> {
    run_batch_with_progress(plan, None)
}

/// Run the whole plan, streaming progress events to the frontend.
pub fn run_batch_with_progress(
    plan: &SweepPlan,
    mut progress_cb: Option<&mut dyn FnMut(BatchEvent)>,
) -> AppResult<BatchSummary> {
    let store = OutputStore::new(plan.output_dir.clone())?;
    let runner = SessionRunner::new(
        plan.solver.executable.clone(),
        Duration::from_secs(plan.solver.timeout_s),
    );

    let reynolds_points = plan.reynolds.points();
    let total = plan.airfoils.len() * plan.mach.len() * reynolds_points.len();

    let mut summary = BatchSummary::default();
    let mut index = 0usize;

    for name in &plan.airfoils {
        let airfoil = match Airfoil::parse(name) {
            Ok(airfoil) => airfoil,
            Err(err) => {
                // Validated plans never reach this arm; a hand-built plan
                // with a bad name loses that airfoil, not the batch.
                warn!("skipping airfoil '{}': {}", name, err);
                summary.rejected.push(RejectedAirfoil {
                    name: name.clone(),
                    reason: err.to_string(),
                });
                index += plan.mach.len() * reynolds_points.len();
                continue;
            }
        };

        let mut table = PolarTable::new();
        let mut manifest = SweepManifest::new(
            airfoil.name().to_string(),
            plan.mach.clone(),
            plan.reynolds,
            plan.alpha,
        );

        for &mach in &plan.mach {
            for &reynolds in &reynolds_points {
                index += 1;
                info!(
                    "running {} at Mach {}, Re {} [{}/{}]",
                    airfoil.name(),
                    mach,
                    reynolds,
                    index,
                    total
                );
                emit(
                    &mut progress_cb,
                    BatchEvent::CombinationStarted {
                        airfoil: airfoil.name().to_string(),
                        mach,
                        reynolds,
                        index,
                        total,
                    },
                );

                let (outcome, transcript) =
                    run_combination(plan, &runner, &store, &airfoil, mach, reynolds, &mut table)?;

                match outcome {
                    CombinationOutcome::Parsed { .. } => {}
                    CombinationOutcome::TimedOut => manifest.skipped.push(SkippedCombination {
                        mach,
                        reynolds,
                        reason: SkipReason::Timeout,
                    }),
                    CombinationOutcome::PolarMissing => {
                        manifest.skipped.push(SkippedCombination {
                            mach,
                            reynolds,
                            reason: SkipReason::PolarMissing,
                        })
                    }
                }
                manifest.combinations += 1;

                emit(
                    &mut progress_cb,
                    BatchEvent::CombinationFinished {
                        airfoil: airfoil.name().to_string(),
                        mach,
                        reynolds,
                        index,
                        total,
                        outcome,
                        transcript,
                    },
                );
            }
        }

        manifest.rows_written = table.len();
        let csv_path = store.write_csv(&airfoil.file_stem(), &table)?;
        let manifest_path = store.write_manifest(&airfoil.file_stem(), &manifest)?;
        info!(
            "finished {}: {} rows, {} skipped, csv at {}",
            airfoil.name(),
            table.len(),
            manifest.skipped.len(),
            csv_path.display()
        );
        emit(
            &mut progress_cb,
            BatchEvent::AirfoilFinished {
                airfoil: airfoil.name().to_string(),
                csv_path: csv_path.clone(),
                rows: table.len(),
                skipped: manifest.skipped.len(),
            },
        );

        summary.reports.push(AirfoilReport {
            airfoil: airfoil.name().to_string(),
            csv_path,
            manifest_path,
            combinations: manifest.combinations,
            rows_written: manifest.rows_written,
            skipped: manifest.skipped.clone(),
        });
    }

    Ok(summary)
}

/// One solver session plus polar collection for one combination.
fn run_combination(
    plan: &SweepPlan,
    runner: &SessionRunner,
    store: &OutputStore,
    airfoil: &Airfoil,
    mach: f64,
    reynolds: u32,
    table: &mut PolarTable,
) -> AppResult<(CombinationOutcome, Option<String>)> {
    let script = session_script_for(plan, airfoil, mach, reynolds);

    let transcript = match runner.run(&script.text)? {
        SessionOutcome::TimedOut => {
            warn!(
                "{} at Mach {}, Re {} timed out after {}s, skipping",
                airfoil.name(),
                mach,
                reynolds,
                plan.solver.timeout_s
            );
            return Ok((CombinationOutcome::TimedOut, None));
        }
        SessionOutcome::Completed { transcript } => transcript,
    };
    debug!("solver transcript: {} bytes", transcript.len());

    let points = match read_polar_file(&script.save_file, plan.solver.polar_header_lines) {
        Ok(points) => points,
        Err(XfoilError::PolarMissing { path }) => {
            warn!("polar save-file {} not found, skipping", path.display());
            return Ok((CombinationOutcome::PolarMissing, Some(transcript)));
        }
        Err(err) => return Err(err.into()),
    };

    for point in &points {
        table.push(PolarRow {
            max_camber: airfoil.max_camber(),
            camber_position: airfoil.camber_position(),
            thickness: airfoil.thickness(),
            mach,
            reynolds: f64::from(reynolds),
            alpha: point.alpha,
            cl: point.cl,
            cd: point.cd,
            cm: point.cm,
            cdp: point.cdp,
        });
    }

    // The save-file is per-session scratch; a failed delete must not stop
    // the sweep.
    if let Err(err) = store.remove_save_file(&script.save_file) {
        warn!(
            "could not remove save-file {}: {}",
            script.save_file.display(),
            err
        );
    }

    Ok((CombinationOutcome::Parsed { rows: points.len() }, Some(transcript)))
}
