use clap::{Parser, Subcommand};
use ps_app::{AppError, AppResult, BatchEvent, CombinationOutcome, batch, plan_service};
use ps_core::Airfoil;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(about = "polarsweep CLI - batch polar sweeps through XFOIL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a sweep plan file
    Validate {
        /// Path to the plan YAML (or JSON) file
        plan_path: PathBuf,
    },
    /// Run every combination in a sweep plan
    Run {
        /// Path to the plan YAML (or JSON) file
        plan_path: PathBuf,
        /// Print each session's solver console output
        #[arg(long)]
        echo_solver: bool,
    },
    /// Print the exact command script one combination would receive
    Script {
        /// Path to the plan YAML (or JSON) file
        plan_path: PathBuf,
        /// Airfoil display name, e.g. "NACA 4412"
        #[arg(long)]
        airfoil: String,
        /// Mach number
        #[arg(long)]
        mach: f64,
        /// Reynolds number
        #[arg(long)]
        reynolds: u32,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { plan_path } => cmd_validate(&plan_path),
        Commands::Run {
            plan_path,
            echo_solver,
        } => cmd_run(&plan_path, echo_solver),
        Commands::Script {
            plan_path,
            airfoil,
            mach,
            reynolds,
        } => cmd_script(&plan_path, &airfoil, mach, reynolds),
    }
}

fn cmd_validate(plan_path: &Path) -> AppResult<()> {
    println!("Validating plan: {}", plan_path.display());
    let plan = plan_service::load_plan(plan_path)?;
    println!("✓ Plan is valid");
    println!("  Airfoils:     {}", plan.airfoils.len());
    println!("  Mach values:  {}", plan.mach.len());
    println!("  Reynolds:     {}", plan.reynolds);
    println!(
        "  Alpha:        {} ({} angles per session)",
        plan.alpha,
        plan.alpha.point_count()
    );
    println!("  Sessions:     {}", plan.combination_count());
    Ok(())
}

fn cmd_run(plan_path: &Path, echo_solver: bool) -> AppResult<()> {
    let plan = plan_service::load_plan(plan_path)?;
    println!(
        "Running {} session(s) across {} airfoil(s) with '{}'",
        plan.combination_count(),
        plan.airfoils.len(),
        plan.solver.executable.display()
    );

    let summary = batch::run_batch_with_progress(
        &plan,
        Some(&mut |event| render_progress(event, echo_solver)),
    )?;

    println!(
        "\nSweep complete: {} rows across {} airfoil(s), {} combination(s) skipped",
        summary.total_rows(),
        summary.reports.len(),
        summary.total_skipped()
    );
    for report in &summary.reports {
        println!("  {} -> {}", report.airfoil, report.csv_path.display());
        for skip in &report.skipped {
            println!(
                "    skipped Mach {} Re {} ({})",
                skip.mach, skip.reynolds, skip.reason
            );
        }
    }
    for rejected in &summary.rejected {
        println!("  ✗ {} rejected: {}", rejected.name, rejected.reason);
    }
    Ok(())
}

fn cmd_script(plan_path: &Path, airfoil_name: &str, mach: f64, reynolds: u32) -> AppResult<()> {
    let plan = plan_service::load_plan(plan_path)?;
    let airfoil =
        Airfoil::parse(airfoil_name).map_err(|err| AppError::InvalidInput(err.to_string()))?;
    let script = batch::session_script_for(&plan, &airfoil, mach, reynolds);
    print!("{}", script.text);
    Ok(())
}

fn render_progress(event: BatchEvent, echo_solver: bool) {
    match event {
        BatchEvent::CombinationStarted {
            airfoil,
            mach,
            reynolds,
            index,
            total,
        } => {
            print!("[{}/{}] {} Mach {} Re {} ... ", index, total, airfoil, mach, reynolds);
            let _ = io::stdout().flush();
        }
        BatchEvent::CombinationFinished {
            outcome,
            transcript,
            ..
        } => {
            match outcome {
                CombinationOutcome::Parsed { rows } => println!("OK ({} rows)", rows),
                CombinationOutcome::TimedOut => println!("TIMED OUT"),
                CombinationOutcome::PolarMissing => println!("NO POLAR FILE"),
            }
            if echo_solver {
                if let Some(text) = transcript {
                    print!("{}", text);
                    let _ = io::stdout().flush();
                }
            }
        }
        BatchEvent::AirfoilFinished {
            airfoil,
            csv_path,
            rows,
            skipped,
        } => {
            println!(
                "✓ {} complete: {} rows -> {}",
                airfoil,
                rows,
                csv_path.display()
            );
            if skipped > 0 {
                println!("  {} combination(s) skipped", skipped);
            }
        }
    }
}
