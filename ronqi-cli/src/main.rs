//! RonQI2 - sleep-apnea monitor
//! Command-line interface for running simulated monitoring sessions

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::*;
use ronqi_core::{BreathingProfile, Reading, ScriptedDevice, SensorDevice, SimulatedDevice};
use ronqi_monitor::{
    ApneaAssessment, ApneaMonitor, HISTORY_CAPACITY, MonitorConfig, PRESSURE_THRESHOLD,
    SOUND_THRESHOLD,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ronqi")]
#[command(author = "RonQI2 Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "RonQI2 - sleep-apnea monitor", long_about = None)]
struct Cli {
    /// Configuration file (ronqi.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a monitoring session against a simulated device
    Simulate {
        /// Number of readings to acquire
        #[arg(short = 'n', long, default_value_t = 10)]
        readings: usize,

        /// Constant pressure value (requires --sound)
        #[arg(long, requires = "sound")]
        pressure: Option<f32>,

        /// Constant sound value (requires --pressure)
        #[arg(long, requires = "pressure")]
        sound: Option<f32>,

        /// Breathing profile of the simulator (normal, apnea)
        #[arg(long, default_value = "normal")]
        profile: BreathingProfile,

        /// Print the session report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Show information about the monitor
    Info,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Simulate {
            readings,
            pressure,
            sound,
            profile,
            json,
        } => {
            let device: Box<dyn SensorDevice> = match (pressure, sound) {
                (Some(p), Some(s)) => Box::new(ScriptedDevice::healthy().with_readings(p, s)),
                _ => Box::new(SimulatedDevice::new(profile)),
            };
            simulate_command(config_path, device, readings, json)
        }

        Commands::Config => config_command(config_path),

        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// File (if given) -> environment overrides -> validation
fn load_config(path: Option<&Path>) -> anyhow::Result<MonitorConfig> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration file");
            MonitorConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => {
            info!("using default configuration");
            MonitorConfig::default()
        }
    }
    .with_env();

    config.validate()?;
    Ok(config)
}

fn config_command(path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

// ============================================================================
// Simulation
// ============================================================================

#[derive(Serialize)]
struct SessionStep {
    index: usize,
    reading: Reading,
    assessment: ApneaAssessment,
}

#[derive(Serialize)]
struct SessionReport {
    config: MonitorConfig,
    steps: Vec<SessionStep>,
    apnea: bool,
}

fn simulate_command(
    config_path: Option<&Path>,
    device: Box<dyn SensorDevice>,
    readings: usize,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut monitor: ApneaMonitor = ApneaMonitor::with_config(&config)?;
    monitor.attach_device(device);

    if !monitor.initialize()? {
        warn!(state = ?monitor.state(), "aborting session");
        bail!("device initialization failed");
    }

    info!(
        readings,
        window = config.history_capacity,
        combination = %config.combination,
        "session started"
    );

    let mut steps = Vec::with_capacity(readings);
    for index in 1..=readings {
        let reading = monitor.acquire_reading()?;
        let assessment = monitor.assess()?;
        steps.push(SessionStep {
            index,
            reading,
            assessment,
        });
    }

    let apnea = monitor.evaluate_apnea();

    if json {
        let report = SessionReport {
            config,
            steps,
            apnea,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} readings (window {}, rule {})",
        "Monitoring".green().bold(),
        readings,
        config.history_capacity,
        config.combination.to_string().cyan()
    );
    for step in &steps {
        let flag = if step.assessment.apnea {
            "APNEA".red().bold()
        } else {
            "ok".green()
        };
        println!(
            "  #{:<3} p={:>6.2} s={:>6.2} | mean p={:>6.2} s={:>6.2} | {}",
            step.index,
            step.reading.pressure,
            step.reading.sound,
            step.assessment.means.pressure,
            step.assessment.means.sound,
            flag
        );
    }
    println!();

    if apnea {
        println!("{}", "Sleep apnea detected".red().bold());
    } else {
        println!("{}", "No sleep apnea detected".green().bold());
    }

    Ok(())
}

// ============================================================================
// Info
// ============================================================================

fn print_info() {
    println!("{}", "RonQI2 - sleep-apnea monitor".bold());
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "Silver rule:".bold());
    println!("  mean pressure >= {:.1}", PRESSURE_THRESHOLD);
    println!("  mean sound    >= {:.1}", SOUND_THRESHOLD);
    println!("  window        = last {} readings", HISTORY_CAPACITY);
    println!();
    println!("{}", "Environment overrides:".bold());
    println!("  RONQI_PRESSURE_THRESHOLD, RONQI_SOUND_THRESHOLD,");
    println!("  RONQI_HISTORY_CAPACITY, RONQI_COMBINATION (both|either)");
}
