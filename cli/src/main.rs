//! # Flood Alert Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file is the entry point of the `floodalert` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in the library
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! floodalert --help
//!
//! # Predict with debug logging
//! floodalert -vv predict --rainfall 180 --temperature 27 --humidity 92
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Display any error and exit with status 1
//!
use clap::Parser;
use floodalert::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "floodalert",
    about = "🌊 Smart Flood Alert System: flood prediction, Suraksha Bot and SMS alerts",
    long_about = "Predict flood risk from rainfall, temperature and humidity, get the Hindi SMS alert,\n\
                  chat with Suraksha Bot and read the flood safety checklist.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Predict flood risk for one set of readings.
    #[command(alias = "p")]
    Predict(commands::predict::PredictArgs),
    /// Ask Suraksha Bot a question, or chat interactively.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print the flood safety checklist.
    Checklist,
    /// Serve the web demo and its JSON API.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Predict(args) => commands::predict::handle_predict(args),
        Commands::Chat(args) => commands::chat::handle_chat(args),
        Commands::Checklist => commands::checklist::handle_checklist(),
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
