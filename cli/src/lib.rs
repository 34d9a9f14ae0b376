//! # Flood Alert Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The public library behind the `floodalert` binary. Exposing the modules
//! here lets the integration tests in `tests/` and other crates reuse the
//! responder, the model loader and the alert texts directly.
//!
//! - `bot`: Suraksha Bot, the rule-based intent responder
//! - `model`: loading the flood classifier artifact and predicting
//! - `alert`: headline and Hindi SMS text for a prediction
//! - `checklist`: the static flood safety checklist
//! - `weather`: the three weather inputs
//! - `commands`: the CLI subcommands, including the demo server
//! - `core`: configuration, errors and page templating
//!
pub mod alert;
pub mod bot;
pub mod checklist;
pub mod commands;
pub mod core;
pub mod model;
pub mod weather;
