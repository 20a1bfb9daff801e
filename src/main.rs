mod acoustics;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::web::api::frequency::FrequencyResponse;
use crate::web::api::intensity::IntensityResponse;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "wavecalc")]
#[command(about = "Acoustic wave calculation service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// YAML config file; defaults apply when omitted
        #[arg(long)]
        config: Option<String>,
    },
    /// Compute an observed frequency without starting the server
    Frequency {
        #[arg(long, allow_negative_numbers = true)]
        source_frequency: f64,
        #[arg(long, allow_negative_numbers = true)]
        source_velocity: f64,
        #[arg(long, allow_negative_numbers = true)]
        observer_velocity: f64,
    },
    /// Compute a wave intensity without starting the server
    Intensity {
        #[arg(long, allow_negative_numbers = true)]
        source_power: f64,
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Frequency {
            source_frequency,
            source_velocity,
            observer_velocity,
        } => print_json(&FrequencyResponse {
            observed_frequency: acoustics::doppler::observed_frequency(
                source_frequency,
                source_velocity,
                observer_velocity,
            ),
        }),
        Commands::Intensity {
            source_power,
            distance,
        } => print_json(&IntensityResponse {
            intensity: acoustics::intensity::cylindrical_intensity(source_power, distance),
        }),
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Err(e) = web::run_server(config).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
