mod case;
mod error;

use clap::{Args, Parser, Subcommand};
use error::CliResult;
use hc_core::units::constants::{BAR_PER_MPA, celsius_to_k, k_to_celsius};
use hc_core::units::{bar, k, to_kelvin, to_mpa};
use hc_cycle::{ChartData, CycleAnalysis, CycleEngine, CycleInputs};
use hc_steam::{If97Saturation, SaturationModel};
use std::path::{Path, PathBuf};
use tracing::Level;

#[cfg(feature = "coolprop")]
type Backend = hc_steam::CoolPropSaturation;
#[cfg(not(feature = "coolprop"))]
type Backend = hc_steam::If97Saturation;

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "Hybrid AD-HTC gas cycle calculator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one operating point and print the metrics
    Analyze {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the full analysis (metrics and charts) as JSON
        #[arg(long)]
        json: bool,
        /// Print every intermediate state as JSON
        #[arg(long, conflicts_with = "json")]
        detailed: bool,
    },
    /// Export chart coordinates as CSV
    Charts {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up a point on the water saturation line
    Saturation {
        /// Absolute pressure in bar
        #[arg(required_unless_present = "temperature", conflicts_with = "temperature")]
        pressure_bar: Option<f64>,
        /// Saturation temperature in °C; prints the IF97 saturation pressure instead
        #[arg(long)]
        temperature: Option<f64>,
    },
}

/// Operating point: a case file, individual flags, or both (flags win).
#[derive(Args)]
struct InputArgs {
    /// Case file (.yaml, .yml or .json)
    #[arg(long)]
    case: Option<PathBuf>,
    /// Turbine inlet temperature in °C
    #[arg(long)]
    gt_temp: Option<f64>,
    /// Compressor pressure ratio
    #[arg(long)]
    comp_ratio: Option<f64>,
    /// HTC reactor pressure in bar
    #[arg(long)]
    htc_press: Option<f64>,
    /// Biomass feed in kg/s
    #[arg(long)]
    biomass_flow: Option<f64>,
}

impl InputArgs {
    fn resolve(&self) -> CliResult<CycleInputs> {
        let base = match &self.case {
            Some(path) => case::load_case(path)?,
            None => CycleInputs::default(),
        };
        Ok(CycleInputs {
            gt_temp_c: self.gt_temp.unwrap_or(base.gt_temp_c),
            comp_ratio: self.comp_ratio.unwrap_or(base.comp_ratio),
            htc_press_bar: self.htc_press.unwrap_or(base.htc_press_bar),
            biomass_flow_kgs: self.biomass_flow.unwrap_or(base.biomass_flow_kgs),
        })
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            inputs,
            json,
            detailed,
        } => cmd_analyze(&inputs.resolve()?, json, detailed),
        Commands::Charts { inputs, output } => cmd_charts(&inputs.resolve()?, output.as_deref()),
        Commands::Saturation {
            pressure_bar,
            temperature,
        } => match (pressure_bar, temperature) {
            (_, Some(t_c)) => cmd_saturation_pressure(t_c),
            (Some(p_bar), None) => cmd_saturation(p_bar),
            // clap requires one of the two
            (None, None) => Ok(()),
        },
    }
}

fn engine() -> CycleEngine<Backend> {
    CycleEngine::with_model(Backend::default())
}

fn cmd_analyze(inputs: &CycleInputs, json: bool, detailed: bool) -> CliResult<()> {
    let engine = engine();
    tracing::info!(
        model = engine.saturation_model().name(),
        ?inputs,
        "running analysis"
    );

    if detailed {
        let report = engine.report(inputs)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if json {
        let analysis = engine.analyze(inputs)?;
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_metrics(&engine.analyze(inputs)?);
    }
    Ok(())
}

fn print_metrics(analysis: &CycleAnalysis) {
    let m = &analysis.metrics;
    println!("\n--- Cycle Analysis Results ---");
    println!("Thermal Efficiency: {:.1}%", m.efficiency * 100.0);
    println!("Net Power Output:   {:.1} MW", m.power);
    println!("CO2 Reduction:      {:.1}%", m.co2);
    println!("------------------------------\n");
}

fn cmd_charts(inputs: &CycleInputs, output: Option<&Path>) -> CliResult<()> {
    let analysis = engine().analyze(inputs)?;
    let csv = charts_csv(&analysis.charts);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported chart data to {}", path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

/// Chart polylines as `series,x,y` rows.
fn charts_csv(charts: &ChartData) -> String {
    let series = [
        ("hs", &charts.hs.s, &charts.hs.h),
        ("gas", &charts.th.gas_h, &charts.th.gas_t),
        ("steam", &charts.th.steam_h, &charts.th.steam_t),
    ];

    let mut csv = String::from("series,x,y\n");
    for (name, xs, ys) in series {
        for (x, y) in xs.iter().zip(ys.iter()) {
            csv.push_str(&format!("{},{},{}\n", name, x, y));
        }
    }
    csv
}

fn cmd_saturation(pressure_bar: f64) -> CliResult<()> {
    let model = Backend::default();
    let t = model.saturation_temperature(bar(pressure_bar))?;
    println!(
        "Saturation temperature at {} bar ({}): {:.2} °C",
        pressure_bar,
        model.name(),
        k_to_celsius(to_kelvin(t))
    );
    Ok(())
}

/// Saturation pressure [bar] at `t_c` [°C] from the IF97 forward equation.
fn saturation_pressure_bar(t_c: f64) -> CliResult<f64> {
    let p = If97Saturation::new().saturation_pressure(k(celsius_to_k(t_c)))?;
    Ok(to_mpa(p) * BAR_PER_MPA)
}

fn cmd_saturation_pressure(t_c: f64) -> CliResult<()> {
    let p_bar = saturation_pressure_bar(t_c)?;
    println!(
        "Saturation pressure at {} °C (IAPWS-IF97): {:.4} bar",
        t_c, p_bar
    );
    Ok(())
}
