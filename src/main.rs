//! rlc-transient - DC step response of RC, RL and RLC circuits
//!
//! Collects component values from flags or a saved parameter file, runs the
//! simulation and writes the voltage and current panels to stdout.
//!
//! # Usage
//!
//! ```bash
//! rlc-transient -t rc -r 100 -v 5 -c 1e-4 --save rc.json > rc.csv
//! rlc-transient -t rc --configuration parallel --load rc.json --format json
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rlc_transient::{
    assets::DEFAULT_ASSETS_DIR,
    circuit::{GRID_POINTS, GRID_STOP, INTERACTIVE_GRID_START},
    output,
    params::{parse_parameters, ParameterField, RawParameters},
    persistence, Configuration, Result, SimulationConfig, Simulator, TimeGrid, Topology,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// DC step response of series and parallel RC, RL and RLC circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuit topology (RC, RL or RLC)
    #[arg(short, long)]
    topology: Topology,

    /// How the elements are connected (series or parallel)
    #[arg(long, default_value = "series")]
    configuration: Configuration,

    /// Resistance in ohms
    #[arg(short, long)]
    resistance: Option<String>,

    /// Source voltage in volts
    #[arg(short, long)]
    voltage: Option<String>,

    /// Capacitance in farads (e.g. 1e-4)
    #[arg(short, long)]
    capacitance: Option<String>,

    /// Inductance in henries
    #[arg(short = 'l', long)]
    inductance: Option<String>,

    /// Load parameters from a JSON file; flags override loaded values
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Save the parsed parameters to a JSON file
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// First time point in seconds
    #[arg(long, default_value_t = INTERACTIVE_GRID_START)]
    t_start: f64,

    /// Last time point in seconds
    #[arg(long, default_value_t = GRID_STOP)]
    t_stop: f64,

    /// Number of time points
    #[arg(long, default_value_t = GRID_POINTS)]
    points: usize,

    /// Directory holding the circuit diagrams
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,
}

impl Args {
    /// Raw text per field: loaded file first, then flags on top.
    fn raw_parameters(&self) -> Result<RawParameters> {
        let mut raw = RawParameters::new();

        if let Some(path) = &self.load {
            for (key, value) in persistence::load_parameters(path)? {
                raw.insert(key, value.to_string());
            }
        }

        let flags = [
            (ParameterField::Resistance, &self.resistance),
            (ParameterField::Voltage, &self.voltage),
            (ParameterField::Capacitance, &self.capacitance),
            (ParameterField::Inductance, &self.inductance),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                raw.insert(field.key().to_string(), value.clone());
            }
        }

        Ok(raw)
    }
}

fn run(args: &Args) -> Result<()> {
    let grid = TimeGrid::linspace(args.t_start, args.t_stop, args.points)?;
    let config = SimulationConfig::new()
        .with_time_grid(grid)
        .with_assets_dir(&args.assets_dir);
    let simulator = Simulator::with_config(config);

    match simulator.diagram(args.topology) {
        Ok(path) => tracing::info!(path = %path.display(), "circuit diagram"),
        Err(e) => tracing::warn!("{}", e),
    }

    let raw = args.raw_parameters()?;

    if let Some(path) = &args.save {
        let values = parse_parameters(args.topology, &raw)?;
        persistence::save_parameters(path, &values)?;
        tracing::info!(path = %path.display(), "parameters saved");
    }

    let waveforms = simulator.run(args.topology, args.configuration, &raw)?;

    let mut stdout = io::stdout().lock();
    match args.format {
        Format::Csv => output::write_csv(&waveforms, &mut stdout)?,
        Format::Json => output::write_json(&waveforms, &mut stdout)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
