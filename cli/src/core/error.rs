//! # Flood Alert Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the flood alert
//! application. It follows a two-layer approach:
//! - `FloodAlertError`: a `thiserror` enum for the failures callers need to
//!   tell apart (missing model, unsupported estimator, bad readings, ...)
//! - `Result<T>`: an alias for `anyhow::Result<T>` so I/O boundaries can add
//!   context with `.context(...)`
//!
//! ## Model load failures
//!
//! A failed model load is fatal and is reported in one of three ways:
//! - `ModelNotFound`: the artifact file does not exist
//! - `ModelMissingComponent`: the artifact names an estimator this build
//!   cannot reconstruct
//! - `ModelLoad`: any other read or deserialization failure
//!
//! ## Examples
//!
//! ```rust,ignore
//! match FloodModel::load(&path) {
//!     Ok(model) => serve(model),
//!     Err(e) if e.downcast_ref::<FloodAlertError>().map_or(false, |fe| fe.is_model_load_failure()) => {
//!         eprintln!("{}", e);
//!         std::process::exit(1);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the flood alert application.
#[derive(Error, Debug)]
pub enum FloodAlertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("📂 Model file '{}' not found. Please make sure it's uploaded.", path.display())]
    ModelNotFound { path: PathBuf },

    #[error("⚠️ Required module missing for loading the model: {detail}")]
    ModelMissingComponent { detail: String },

    #[error("🚫 An unexpected error occurred while loading the model: {detail}")]
    ModelLoad { detail: String },

    #[error("Invalid {field} reading: {value} (must be a finite, non-negative number)")]
    InvalidReading { field: &'static str, value: f64 },

    #[error("Query cannot be empty.")]
    EmptyQuery,

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

impl FloodAlertError {
    /// Returns `true` for the three fatal model-loading variants.
    pub fn is_model_load_failure(&self) -> bool {
        matches!(
            self,
            Self::ModelNotFound { .. } | Self::ModelMissingComponent { .. } | Self::ModelLoad { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FloodAlertError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let not_found = FloodAlertError::ModelNotFound {
            path: PathBuf::from("flood_model.json"),
        };
        assert_eq!(
            not_found.to_string(),
            "📂 Model file 'flood_model.json' not found. Please make sure it's uploaded."
        );

        let invalid = FloodAlertError::InvalidReading {
            field: "humidity",
            value: -1.0,
        };
        assert!(invalid.to_string().starts_with("Invalid humidity reading: -1"));
    }

    #[test]
    fn test_model_load_messages_are_distinct() {
        let missing = FloodAlertError::ModelMissingComponent {
            detail: "estimator 'svm'".into(),
        };
        let other = FloodAlertError::ModelLoad {
            detail: "expected value at line 1".into(),
        };
        assert!(missing
            .to_string()
            .starts_with("⚠️ Required module missing for loading the model:"));
        assert!(other
            .to_string()
            .starts_with("🚫 An unexpected error occurred while loading the model:"));
        assert_ne!(missing.to_string(), other.to_string());
    }

    #[test]
    fn test_is_model_load_failure() {
        assert!(FloodAlertError::ModelNotFound {
            path: PathBuf::from("x")
        }
        .is_model_load_failure());
        assert!(FloodAlertError::ModelLoad { detail: "x".into() }.is_model_load_failure());
        assert!(!FloodAlertError::EmptyQuery.is_model_load_failure());
        assert!(!FloodAlertError::Config("x".into()).is_model_load_failure());
    }
}
