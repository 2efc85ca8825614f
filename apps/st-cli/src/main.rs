use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use st_config::{ProjectResult, evaluator};
use st_core::units::{k, pa};
use st_transport::{
    SweepDefinition, SweepResult, SweepType, TransportCorrelation, TransportPropertyPack,
    execute_pressure_sweep, execute_temperature_sweep,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "Steam transport CLI - bounded IAPWS-IF97 transport properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a property file
    Validate {
        /// Path to the property file (.yaml or .json)
        file: PathBuf,
    },
    /// List components in a property file
    Components {
        /// Path to the property file (.yaml or .json)
        file: PathBuf,
    },
    /// Evaluate transport properties at one point
    Eval {
        /// Path to the property file (.yaml or .json)
        file: PathBuf,
        /// Component name
        component: String,
        /// Pressure in Pa
        #[arg(long)]
        p: f64,
        /// Temperature in K
        #[arg(long)]
        t: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sweep pressure or temperature with the other held fixed
    Sweep {
        /// Path to the property file (.yaml or .json)
        file: PathBuf,
        /// Component name
        component: String,
        /// Swept quantity
        axis: Axis,
        /// First value (Pa or K)
        #[arg(long)]
        start: f64,
        /// Last value (Pa or K)
        #[arg(long)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Fixed temperature [K] for pressure sweeps, fixed pressure [Pa] otherwise
        #[arg(long)]
        at: f64,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Axis {
    Pressure,
    Temperature,
}

/// One evaluated point, as printed with `--json`.
#[derive(Serialize)]
struct PackRow {
    p_pa: f64,
    t_k: f64,
    mu_pa_s: f64,
    kappa_w_m_k: f64,
    cp_j_kg_k: f64,
    alpha_kg_m_s: f64,
    clamped: bool,
}

impl From<&TransportPropertyPack> for PackRow {
    fn from(pack: &TransportPropertyPack) -> Self {
        Self {
            p_pa: pack.p.value,
            t_k: pack.t.value,
            mu_pa_s: pack.mu.value,
            kappa_w_m_k: pack.kappa.value,
            cp_j_kg_k: pack.cp,
            alpha_kg_m_s: pack.alpha,
            clamped: pack.clamped,
        }
    }
}

#[derive(Serialize)]
struct SweepRows {
    independent_values: Vec<f64>,
    clamped_points: usize,
    points: Vec<PackRow>,
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Components { file } => cmd_components(&file),
        Commands::Eval {
            file,
            component,
            p,
            t,
            json,
        } => cmd_eval(&file, &component, p, t, json),
        Commands::Sweep {
            file,
            component,
            axis,
            start,
            end,
            points,
            at,
            log,
            json,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let sweep = SweepDefinition::new(start, end, points, sweep_type)?;
            cmd_sweep(&file, &component, axis, &sweep, at, json)
        }
    }
}

fn cmd_validate(path: &Path) -> ProjectResult<()> {
    println!("Validating property file: {}", path.display());
    let file = st_config::load(path)?;
    println!("✓ '{}' is valid ({} components)", file.name, file.components.len());
    Ok(())
}

fn cmd_components(path: &Path) -> ProjectResult<()> {
    let file = st_config::load(path)?;
    println!("Components in '{}':", file.name);
    for name in file.component_names() {
        let eval = evaluator(&file, name)?;
        println!(
            "  {} ({}, {}) - p [{:.6e}, {:.6e}] Pa, T [{:.2}, {:.2}] K, {} mol",
            name,
            eval.name(),
            eval.backend().name(),
            eval.p_min(),
            eval.p_max(),
            eval.t_min(),
            eval.t_max(),
            eval.moles()
        );
    }
    Ok(())
}

fn cmd_eval(path: &Path, component: &str, p: f64, t: f64, json: bool) -> ProjectResult<()> {
    let file = st_config::load(path)?;
    let eval = evaluator(&file, component)?;
    tracing::debug!(component, p, t, "evaluating point");
    let pack = eval.evaluate_pack(pa(p), k(t));

    if json {
        println!("{}", serde_json::to_string_pretty(&PackRow::from(&pack))?);
        return Ok(());
    }

    if pack.clamped {
        println!(
            "Note: ({p} Pa, {t} K) clamped to ({} Pa, {} K)",
            pack.p.value, pack.t.value
        );
    }
    println!("  mu    = {:.6e} Pa·s", pack.mu.value);
    println!("  kappa = {:.6} W/(m·K)", pack.kappa.value);
    println!("  cp    = {:.3} J/(kg·K)", pack.cp);
    println!("  alpha = {:.6e} kg/(m·s)", pack.alpha);
    Ok(())
}

fn cmd_sweep(
    path: &Path,
    component: &str,
    axis: Axis,
    sweep: &SweepDefinition,
    at: f64,
    json: bool,
) -> ProjectResult<()> {
    let file = st_config::load(path)?;
    let eval = evaluator(&file, component)?;
    let result = match axis {
        Axis::Pressure => execute_pressure_sweep(&eval, sweep, at),
        Axis::Temperature => execute_temperature_sweep(&eval, sweep, at),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sweep_rows(&result))?);
        return Ok(());
    }

    println!("{sweep}");
    println!(
        "{:>14} {:>14} {:>14} {:>12} {:>12} {:>14}",
        "p [Pa]", "T [K]", "mu [Pa·s]", "kappa", "cp", "alpha"
    );
    for pack in &result.packs {
        println!(
            "{:>14.6e} {:>14.3} {:>14.6e} {:>12.6} {:>12.3} {:>14.6e}{}",
            pack.p.value,
            pack.t.value,
            pack.mu.value,
            pack.kappa.value,
            pack.cp,
            pack.alpha,
            if pack.clamped { " *" } else { "" }
        );
    }
    if result.clamped_points > 0 {
        println!("* {} of {} points clamped", result.clamped_points, result.len());
    }
    Ok(())
}

fn sweep_rows(result: &SweepResult) -> SweepRows {
    SweepRows {
        independent_values: result.independent_values.clone(),
        clamped_points: result.clamped_points,
        points: result.packs.iter().map(PackRow::from).collect(),
    }
}
