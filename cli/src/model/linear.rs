//! # Logistic Regression Estimator
//!
//! File: cli/src/model/linear.rs
//! Author: Christi Mahu
//!
//! A row is labelled `FloodLikely` when `coef · row + intercept > 0`, which is
//! the same as the predicted probability exceeding 0.5.
//!
use super::FloodLabel;
use crate::weather::FEATURE_COUNT;
use serde::Deserialize;

/// Raw parameters as they appear in the artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogisticParams {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coef: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticRegression {
    pub fn from_params(params: LogisticParams) -> Result<Self, String> {
        let coef: [f64; FEATURE_COUNT] = params.coef.as_slice().try_into().map_err(|_| {
            format!(
                "logistic regression expects {} coefficients, found {}",
                FEATURE_COUNT,
                params.coef.len()
            )
        })?;
        if coef.iter().any(|c| !c.is_finite()) || !params.intercept.is_finite() {
            return Err("logistic regression parameters must be finite".into());
        }
        Ok(Self {
            coef,
            intercept: params.intercept,
        })
    }

    /// Raw decision value for one row.
    pub fn decision_function(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        self.coef
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }

    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> FloodLabel {
        if self.decision_function(row) > 0.0 {
            FloodLabel::FloodLikely
        } else {
            FloodLabel::NoFlood
        }
    }
}
