//! # Demo Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module merges the `floodalert srv` command-line arguments with the
//! loaded application configuration (`core::config`). Settings come from:
//! 1. Command-line arguments (highest priority, when given)
//! 2. The `[server]` and `[model]` sections of the config files
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the configured port (8501 by default)
//! floodalert srv
//!
//! # Listen on all interfaces with a different model
//! floodalert srv --host 0.0.0.0 --port 9000 --model ./models/forest.json
//! ```
//!
use crate::commands::effective_model_path;
use crate::core::config::Config;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// # Server Command Arguments (`SrvArgs`)
///
/// Every option is optional so that an omitted flag falls through to the
/// configuration file, then to the built-in default.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Network port to listen on (default 8501). If it is taken, the next
    /// free port is used.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Network address to bind to. Use `0.0.0.0` to accept connections from
    /// other machines (default 127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Path to the model artifact. Overrides `[model] path` from the config.
    #[arg(long, short)]
    pub model: Option<PathBuf>,
}

/// # Effective Server Settings (`ServerSettings`)
///
/// The final values `run_server` uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    pub model_path: PathBuf,
}

impl ServerSettings {
    /// Overlays explicitly given arguments onto the loaded configuration.
    pub fn merge(args: &SrvArgs, config: &Config) -> Self {
        Self {
            port: args.port.unwrap_or(config.server.port),
            host: args.host.unwrap_or(config.server.host),
            enable_cors: config.server.enable_cors && !args.no_cors,
            model_path: effective_model_path(args.model.as_deref(), config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_merge_defaults() {
        let settings = ServerSettings::merge(&SrvArgs::default(), &Config::default());
        assert_eq!(settings.port, 8501);
        assert_eq!(settings.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(settings.enable_cors);
        assert_eq!(settings.model_path, PathBuf::from("flood_model.json"));
    }

    #[test]
    fn test_args_override_config() {
        let mut config = Config::default();
        config.server.port = 9000;
        config.model.path = PathBuf::from("/models/from_config.json");

        let args = SrvArgs {
            port: Some(9100),
            host: Some("0.0.0.0".parse().unwrap()),
            no_cors: true,
            model: Some(PathBuf::from("/models/from_cli.json")),
        };
        let settings = ServerSettings::merge(&args, &config);
        assert_eq!(settings.port, 9100);
        assert_eq!(settings.host.to_string(), "0.0.0.0");
        assert!(!settings.enable_cors);
        assert_eq!(settings.model_path, PathBuf::from("/models/from_cli.json"));
    }

    #[test]
    fn test_config_used_when_args_omitted() {
        let mut config = Config::default();
        config.server.port = 9000;
        config.server.enable_cors = false;
        let settings = ServerSettings::merge(&SrvArgs::default(), &config);
        assert_eq!(settings.port, 9000);
        assert!(!settings.enable_cors);
    }

    #[test]
    fn test_parse_args() {
        let args = SrvArgs::parse_from(["srv", "--port", "8600", "--no-cors"]);
        assert_eq!(args.port, Some(8600));
        assert!(args.no_cors);
        assert!(args.host.is_none());
    }
}
