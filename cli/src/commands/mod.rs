//! # Flood Alert Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level `floodalert` subcommands and the
//! argument groups they share.
//!
//! ## Commands
//!
//! - `predict`: classify one set of weather readings and show the SMS alert
//! - `chat`: ask Suraksha Bot one question, or chat interactively
//! - `checklist`: print the flood safety checklist
//! - `srv`: serve the single-page demo and its JSON API
//!
//! Each command defines its own arguments struct and handler function.
//!
use crate::core::config::{expand_cli_path, Config};
use crate::weather::WeatherReading;
use clap::Args;
use std::path::{Path, PathBuf};

/// Handler and arguments for `floodalert chat`.
pub mod chat;
/// Handler for `floodalert checklist`.
pub mod checklist;
/// Handler and arguments for `floodalert predict`.
pub mod predict;
/// The demo web server: configuration, routing and handlers.
pub mod srv;

/// # Weather Reading Arguments (`ReadingArgs`)
///
/// The three numeric inputs, shared by `predict` and `chat`. Each defaults to
/// `0.0`, like the fields on the demo page.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ReadingArgs {
    /// ☔ Rainfall in millimetres.
    #[arg(long, short = 'r', default_value_t = 0.0, allow_negative_numbers = true)]
    pub rainfall: f64,

    /// 🌡️ Temperature in degrees Celsius.
    #[arg(long, short = 't', default_value_t = 0.0, allow_negative_numbers = true)]
    pub temperature: f64,

    /// 💧 Relative humidity in percent.
    #[arg(long, short = 'u', default_value_t = 0.0, allow_negative_numbers = true)]
    pub humidity: f64,
}

impl ReadingArgs {
    pub fn to_reading(self) -> WeatherReading {
        WeatherReading::new(self.rainfall, self.temperature, self.humidity)
    }
}

/// Picks the model path: the `--model` flag wins over the configuration.
pub fn effective_model_path(cli_model: Option<&Path>, config: &Config) -> PathBuf {
    match cli_model {
        Some(path) => expand_cli_path(path),
        None => config.model.path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_model_overrides_config() {
        let config = Config::default();
        assert_eq!(
            effective_model_path(Some(Path::new("custom.json")), &config),
            PathBuf::from("custom.json")
        );
        assert_eq!(
            effective_model_path(None, &config),
            PathBuf::from("flood_model.json")
        );
    }

    #[test]
    fn test_reading_args_to_reading() {
        let args = ReadingArgs {
            rainfall: 10.0,
            temperature: 25.0,
            humidity: 60.0,
        };
        assert_eq!(args.to_reading(), WeatherReading::new(10.0, 25.0, 60.0));
    }
}
