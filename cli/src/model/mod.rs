//! # Flood Model
//!
//! File: cli/src/model/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module owns the pre-trained flood classifier. The classifier is
//! trained elsewhere and shipped as a JSON artifact; this crate only loads,
//! validates and evaluates it.
//!
//! ## Artifact format
//!
//! ```json
//! {
//!   "kind": "decision_tree",
//!   "features": ["rainfall", "temperature", "humidity"],
//!   "feature": [0, -2, -2],
//!   "threshold": [120.0, -2.0, -2.0],
//!   "children_left": [1, -1, -1],
//!   "children_right": [2, -1, -1],
//!   "class": [-1, 0, 1]
//! }
//! ```
//!
//! Supported `kind`s: `decision_tree`, `logistic_regression`,
//! `random_forest` (see `tree` and `linear` for their parameters).
//!
//! ## Load failures
//!
//! Loading distinguishes three fatal cases (see `FloodAlertError`):
//! - the file is missing → `ModelNotFound`
//! - the artifact names an estimator this build cannot reconstruct →
//!   `ModelMissingComponent`
//! - anything else (unreadable file, bad JSON, invalid parameters) → `ModelLoad`
//!
//! The loaded `FloodModel` is immutable. Callers construct it once and pass
//! it (or an `Arc` of it) to whatever serves predictions.
//!
use crate::core::error::FloodAlertError;
use crate::weather::{WeatherReading, FEATURE_NAMES};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub mod linear;
pub mod tree;

use linear::{LogisticParams, LogisticRegression};
use tree::{DecisionTree, ForestParams, RandomForest, TreeParams};

/// Estimator kinds this build can reconstruct.
pub const SUPPORTED_KINDS: [&str; 3] = ["decision_tree", "logistic_regression", "random_forest"];

/// The classifier's binary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloodLabel {
    /// Class 0.
    NoFlood,
    /// Class 1.
    FloodLikely,
}

impl FloodLabel {
    /// Maps a raw class id to a label; only 0 and 1 are valid.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Self::NoFlood),
            1 => Some(Self::FloodLikely),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Self::NoFlood => 0,
            Self::FloodLikely => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Estimator {
    DecisionTree(DecisionTree),
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
}

/// Artifact header; the remaining fields are the estimator's parameters.
#[derive(Debug, Deserialize)]
struct Envelope {
    kind: String,
    features: Vec<String>,
    #[serde(flatten)]
    params: serde_json::Map<String, serde_json::Value>,
}

/// A loaded, validated flood classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodModel {
    estimator: Estimator,
}

impl FloodModel {
    /// Loads a model artifact from disk.
    pub fn load(path: &Path) -> Result<Self, FloodAlertError> {
        if !path.is_file() {
            return Err(FloodAlertError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("Reading model artifact from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| FloodAlertError::ModelLoad {
            detail: format!("failed to read '{}': {}", path.display(), e),
        })?;
        let model = Self::from_json(&content)?;
        info!("Loaded {} model from {}", model.kind(), path.display());
        Ok(model)
    }

    /// Parses a model artifact from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FloodAlertError> {
        let envelope: Envelope = serde_json::from_str(json).map_err(load_error)?;

        if envelope.features != FEATURE_NAMES {
            return Err(FloodAlertError::ModelLoad {
                detail: format!(
                    "model expects features {:?}, this application provides {:?}",
                    envelope.features, FEATURE_NAMES
                ),
            });
        }

        let params = serde_json::Value::Object(envelope.params);
        let estimator = match envelope.kind.as_str() {
            "decision_tree" => {
                let raw: TreeParams = serde_json::from_value(params).map_err(load_error)?;
                Estimator::DecisionTree(DecisionTree::from_params(raw).map_err(invalid)?)
            }
            "logistic_regression" => {
                let raw: LogisticParams = serde_json::from_value(params).map_err(load_error)?;
                Estimator::LogisticRegression(LogisticRegression::from_params(raw).map_err(invalid)?)
            }
            "random_forest" => {
                let raw: ForestParams = serde_json::from_value(params).map_err(load_error)?;
                Estimator::RandomForest(RandomForest::from_params(raw).map_err(invalid)?)
            }
            other => {
                return Err(FloodAlertError::ModelMissingComponent {
                    detail: format!(
                        "no estimator named '{}' is available to reconstruct this model (supported: {})",
                        other,
                        SUPPORTED_KINDS.join(", ")
                    ),
                })
            }
        };
        Ok(Self { estimator })
    }

    /// The artifact `kind` this model was loaded from.
    pub fn kind(&self) -> &'static str {
        match self.estimator {
            Estimator::DecisionTree(_) => "decision_tree",
            Estimator::LogisticRegression(_) => "logistic_regression",
            Estimator::RandomForest(_) => "random_forest",
        }
    }

    /// Classifies a single reading.
    pub fn predict_one(&self, reading: &WeatherReading) -> FloodLabel {
        let row = reading.as_row();
        match &self.estimator {
            Estimator::DecisionTree(tree) => tree.predict_row(&row),
            Estimator::LogisticRegression(lr) => lr.predict_row(&row),
            Estimator::RandomForest(forest) => forest.predict_row(&row),
        }
    }

    /// Classifies a batch of readings, one label per row, in input order.
    pub fn predict(&self, readings: &[WeatherReading]) -> Vec<FloodLabel> {
        readings.iter().map(|r| self.predict_one(r)).collect()
    }
}

fn load_error(e: serde_json::Error) -> FloodAlertError {
    FloodAlertError::ModelLoad {
        detail: e.to_string(),
    }
}

fn invalid(detail: String) -> FloodAlertError {
    FloodAlertError::ModelLoad { detail }
}
