//! stair - staircase distortion and tremolo charts
//!
//! Run with: cargo run -- distortion

mod commands;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stair")]
#[command(author, version, about = "Staircase distortion and tremolo visualisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the transfer curve and the distorted sine charts
    Distortion(commands::DistortionArgs),

    /// Plot and summarise a tremolo CSV capture
    Tremolo(commands::TremoloArgs),

    /// Write a synthetic tremolo CSV
    Generate(commands::GenerateArgs),

    /// Interactive terminal view of the shaper
    Preview(commands::PreviewArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        // Log lines would tear the alternate screen
        Commands::Preview(args) => commands::preview(args),
        Commands::Distortion(args) => {
            init_tracing();
            commands::distortion(args)
        }
        Commands::Tremolo(args) => {
            init_tracing();
            commands::tremolo(args)
        }
        Commands::Generate(args) => {
            init_tracing();
            commands::generate(args)
        }
    }
}
