//! # Flood Alert Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: configuration loading, merging and validation
//! - `error`: the `FloodAlertError` enum and the `Result` alias
//! - `templating`: rendering of the single-page demo
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FloodAlertError, Result}; // For error handling
//! use crate::core::templating; // For rendering the demo page
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
