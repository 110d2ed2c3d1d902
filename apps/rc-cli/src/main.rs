mod render;

use clap::{Args, Parser, Subcommand};
use rc_app::{
    AppResult, ChartSurface, DashboardSettings, INTEGRATING_FACTOR_STEPS, MODEL_EQUATIONS,
    Magnitude, build_dashboard,
};
use rc_circuit::{
    CAPACITANCE_UF, CircuitParams, DEFAULT_SAMPLES, HORIZON_TIME_CONSTANTS, ParamRange,
    RESISTANCE_OHM, SOURCE_VOLTAGE_V, settling_table,
};
use render::{OutputFormat, TextSurface};

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "RC transient CLI - charging of a series RC circuit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy, Debug)]
struct CircuitArgs {
    /// Resistance R in ohms
    #[arg(long, default_value_t = RESISTANCE_OHM.default)]
    resistance: f64,
    /// Capacitance C in microfarads
    #[arg(long = "capacitance-uf", default_value_t = CAPACITANCE_UF.default)]
    capacitance_uf: f64,
    /// Source voltage E0 in volts
    #[arg(long, default_value_t = SOURCE_VOLTAGE_V.default)]
    voltage: f64,
}

impl CircuitArgs {
    fn params(&self) -> AppResult<CircuitParams> {
        Ok(CircuitParams::from_inputs(
            self.resistance,
            self.capacitance_uf,
            self.voltage,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the charging transient and print the selected trajectory
    Evaluate {
        #[command(flatten)]
        circuit: CircuitArgs,
        /// Number of time points over [0, 5τ]
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Trajectory to print (charge or voltage)
        #[arg(long, default_value_t = Magnitude::Charge)]
        magnitude: Magnitude,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the time constant, asymptotes and settling table
    Summary {
        #[command(flatten)]
        circuit: CircuitArgs,
    },
    /// Print the integrating-factor derivation
    Derivation,
    /// Print accepted input ranges and defaults
    Ranges,
}

fn main() -> AppResult<()> {
    // Initialize tracing; stderr keeps stdout clean for CSV/JSON
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            circuit,
            samples,
            magnitude,
            format,
        } => cmd_evaluate(&circuit, samples, magnitude, format),
        Commands::Summary { circuit } => cmd_summary(&circuit),
        Commands::Derivation => {
            cmd_derivation();
            Ok(())
        }
        Commands::Ranges => {
            cmd_ranges();
            Ok(())
        }
    }
}

fn cmd_evaluate(
    circuit: &CircuitArgs,
    samples: usize,
    magnitude: Magnitude,
    format: OutputFormat,
) -> AppResult<()> {
    let settings = DashboardSettings {
        params: circuit.params()?,
        magnitude,
        show_derivation: false,
        samples,
    };
    tracing::info!(?circuit, samples, %magnitude, "evaluating");

    let dashboard = build_dashboard(&settings)?;
    let stdout = std::io::stdout();
    let mut surface = TextSurface::new(stdout.lock(), format);
    surface.plot(&dashboard.chart)
}

fn cmd_summary(circuit: &CircuitArgs) -> AppResult<()> {
    let params = circuit.params()?;
    let summary = params.summary();

    println!("Circuit:");
    println!("  R  = {:.1} Ω", params.resistance_ohm());
    println!(
        "  C  = {:.4e} F ({:.1} μF)",
        params.capacitance_farad(),
        params.capacitance_uf()
    );
    println!("  E0 = {:.2} V", params.source_voltage_v());

    println!("\nCharging response:");
    println!("  τ = RC       = {:.4e} s", summary.time_constant_s);
    println!(
        "  t_max = {}τ  = {:.4e} s",
        HORIZON_TIME_CONSTANTS, summary.t_max_s
    );
    println!("  q_max = E0 C = {:.4e} C", summary.q_max_c);
    println!("  Vc(∞)        = {:.2} V", summary.vc_final_v);
    println!("  Vc(τ)        = {:.4} V", summary.vc_at_tau_v);

    println!("\nSettling:");
    for row in settling_table(summary.time_constant_s, HORIZON_TIME_CONSTANTS as u32) {
        println!(
            "  {}τ = {:.4e} s  {:>7.3}% of asymptote",
            row.n_tau,
            row.time_s,
            row.fraction * 100.0
        );
    }

    Ok(())
}

fn cmd_derivation() {
    println!("Model:");
    for eq in &MODEL_EQUATIONS {
        println!("  {}:", eq.caption);
        println!("      {}", eq.formula);
    }

    println!("\nDerivation (integrating factor method):");
    for step in &INTEGRATING_FACTOR_STEPS {
        println!("  {}", step.caption);
        println!("      {}", step.formula);
    }
}

fn cmd_ranges() {
    println!("Accepted inputs:");
    print_range("Resistance R", "Ω", &RESISTANCE_OHM);
    print_range("Capacitance C", "μF", &CAPACITANCE_UF);
    print_range("Source voltage E0", "V", &SOURCE_VOLTAGE_V);
    println!("  Samples: {} over [0, {}τ]", DEFAULT_SAMPLES, HORIZON_TIME_CONSTANTS);
}

fn print_range(name: &str, unit: &str, range: &ParamRange) {
    let step = range
        .step
        .map(|s| format!(", step {}", s))
        .unwrap_or_default();
    println!(
        "  {:<18} [{}, {}] {}  (default {}{})",
        name, range.min, range.max, unit, range.default, step
    );
}
