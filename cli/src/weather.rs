//! # Weather Readings
//!
//! File: cli/src/weather.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `WeatherReading` is the snapshot of the three form inputs (rainfall,
//! temperature, humidity). It serves two roles:
//! - one row of the classifier's input matrix (see `crate::model`)
//! - the context interpolated into Suraksha Bot's weather reply (see `crate::bot`)
//!
//! Readings are plain values: they are built per request and never retained.
//!
use crate::core::error::FloodAlertError;
use serde::{Deserialize, Serialize};

/// Number of classifier input columns, in `WeatherReading::as_row` order.
pub const FEATURE_COUNT: usize = 3;

/// Column names expected in a model artifact, in row order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["rainfall", "temperature", "humidity"];

/// A read-only snapshot of the three weather inputs.
///
/// Units are millimetres of rainfall, degrees Celsius and percent relative
/// humidity. Humidity is expected in 0–100 but only non-negativity is checked,
/// matching the input form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(default)]
    pub rainfall: f64,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: f64,
}

impl WeatherReading {
    pub fn new(rainfall: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            rainfall,
            temperature,
            humidity,
        }
    }

    /// Checks that every field is finite and non-negative.
    ///
    /// Returns the first offending field as `FloodAlertError::InvalidReading`.
    pub fn validate(&self) -> Result<(), FloodAlertError> {
        for (field, value) in FEATURE_NAMES.into_iter().zip(self.as_row()) {
            if !value.is_finite() || value < 0.0 {
                return Err(FloodAlertError::InvalidReading { field, value });
            }
        }
        Ok(())
    }

    /// The reading as a classifier input row.
    pub fn as_row(&self) -> [f64; FEATURE_COUNT] {
        [self.rainfall, self.temperature, self.humidity]
    }
}

/// Formats a reading value the way the input form echoes it back:
/// shortest round-trip digits, always with a fractional part (`10.0`, `25.5`).
pub fn format_value(value: f64) -> String {
    let text = format!("{}", value);
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
