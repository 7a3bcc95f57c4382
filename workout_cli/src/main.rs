use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use workout_core::driver::{self, Outcome};
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Workout metrics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a batch of packages (default)
    Run {
        /// JSON file with a list of {"workout_type", "data"} packages
        #[arg(long)]
        packages: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Process a single package given on the command line
    Show {
        /// Workout type code (SWM, RUN, WLK)
        workout_type: String,

        /// Readings: action, duration, weight, then type-specific values
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    workout_core::logging::init(&config.logging);

    match cli.command {
        Some(Commands::Run { packages, format }) => cmd_run(packages, format, &config),
        Some(Commands::Show {
            workout_type,
            values,
        }) => cmd_show(workout_type, values),
        None => {
            // Default to "run" command
            cmd_run(None, Format::Text, &config)
        }
    }
}

fn cmd_run(packages: Option<PathBuf>, format: Format, config: &Config) -> Result<()> {
    let path = packages.or_else(|| config.driver.packages_file.clone());
    let packages = match path {
        Some(path) => driver::load_packages(&path)?,
        None => sample_packages().to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        Format::Text => {
            let failed = driver::run(&packages, &mut out)?;
            tracing::info!(
                "Processed {} packages, {} rejected",
                packages.len(),
                failed
            );
        }
        Format::Json => {
            let outcomes = process(&packages);
            serde_json::to_writer_pretty(&mut out, &outcomes)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn cmd_show(workout_type: String, values: Vec<f64>) -> Result<()> {
    let outcome = match workout_type.parse::<WorkoutType>() {
        Ok(kind) => match Workout::from_values(kind, &values) {
            Ok(workout) => Outcome::Summary(workout.show_training_info()),
            Err(e) => rejected(e),
        },
        Err(e) => rejected(e),
    };

    println!("{}", outcome.line());
    if let Outcome::Failure { detail, .. } = &outcome {
        eprintln!("  {}", detail);
    }

    Ok(())
}

fn rejected(e: PackageError) -> Outcome {
    tracing::warn!("Rejected package: {}", e);
    Outcome::from(e)
}
