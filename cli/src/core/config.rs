//! # Flood Alert Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the application configuration.
//! Every setting has a built-in default, so running without any config file
//! works out of the box.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the individual commands)
//! 2. Project-specific `.floodalert.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/floodalert/config.toml`)
//! 4. Default values defined in the code
//!
//! Relative model paths inside a config file are resolved against the
//! directory containing that file; `~` is expanded.
//!
//! ## File format
//!
//! ```toml
//! [model]
//! path = "flood_model.json"
//!
//! [server]
//! port = 8501
//! host = "127.0.0.1"
//! enable_cors = true
//! ```
//!
use crate::core::error::{FloodAlertError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const PROJECT_CONFIG_FILENAME: &str = ".floodalert.toml";
pub const DEFAULT_MODEL_PATH: &str = "flood_model.json";
pub const DEFAULT_PORT: u16 = 8501;

/// The effective configuration after all sources are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model: ModelConfig,
    pub server: ServerConfig,
}

/// Where the classifier artifact lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub path: PathBuf,
}

/// Defaults for `floodalert srv`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: PathBuf::from(DEFAULT_MODEL_PATH),
            },
            server: ServerConfig {
                port: DEFAULT_PORT,
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                enable_cors: true,
            },
        }
    }
}

/// One config file as written on disk. Every field is optional so a file
/// only needs to mention what it overrides.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    model: FileModelConfig,
    #[serde(default)]
    server: FileServerConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileModelConfig {
    path: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileServerConfig {
    port: Option<u16>,
    host: Option<IpAddr>,
    enable_cors: Option<bool>,
}

/// Loads the configuration for the current working directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config_path = ProjectDirs::from("com", "FloodAlert", "floodalert")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if user_config_path.is_none() {
        debug!("Could not determine user config directory.");
    }
    load_config_with(user_config_path.as_deref(), &current_dir)
}

/// Loads the configuration from an explicit user config path and a project
/// search start directory.
pub fn load_config_with(user_config_path: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = user_config_path.filter(|p| p.is_file()) {
        info!("Loading user configuration from: {}", path.display());
        apply_file(&mut config, load_config_from_path(path)?, path);
    }

    if let Some(path) = find_project_config_path(start_dir) {
        info!("Loading project configuration from: {}", path.display());
        apply_file(&mut config, load_config_from_path(&path)?, &path);
    } else {
        debug!(
            "No project configuration file ({}) found in {} or ancestors.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        );
    }

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays the settings present in `file` onto `config`.
fn apply_file(config: &mut Config, file: FileConfig, file_path: &Path) {
    if let Some(raw) = file.model.path {
        config.model.path = resolve_model_path(&raw, file_path.parent());
    }
    if let Some(port) = file.server.port {
        config.server.port = port;
    }
    if let Some(host) = file.server.host {
        config.server.host = host;
    }
    if let Some(enable_cors) = file.server.enable_cors {
        config.server.enable_cors = enable_cors;
    }
}

/// Expands `~` and resolves a relative path against `base_dir`.
fn resolve_model_path(raw: &str, base_dir: Option<&Path>) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    match base_dir {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

/// Expands `~` in a path given on the command line. Relative paths stay
/// relative to the working directory.
pub fn expand_cli_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.model.path.as_os_str().is_empty() {
        return Err(anyhow!(FloodAlertError::Config(
            "Model path cannot be empty.".to_string()
        )));
    }
    if config.server.port == 0 {
        return Err(anyhow!(FloodAlertError::Config(
            "Server port must be between 1 and 65535.".to_string()
        )));
    }
    Ok(())
}
