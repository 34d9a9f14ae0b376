//! # Predict Command
//!
//! File: cli/src/commands/predict.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `floodalert predict` loads the flood model, classifies one set of weather
//! readings and prints the headline plus the simulated Hindi SMS alert.
//!
//! ```bash
//! floodalert predict --rainfall 180 --temperature 27.5 --humidity 92
//! floodalert predict -r 5 -t 31 -u 40 --model ./models/forest.json
//! ```
//!
//! A missing or unloadable model is fatal: the error is returned to `main`,
//! which prints it and exits with status 1.
//!
use super::{effective_model_path, ReadingArgs};
use crate::alert::Assessment;
use crate::core::config;
use crate::core::error::Result;
use crate::model::FloodModel;
use crate::weather::WeatherReading;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Predict Command Arguments (`PredictArgs`)
#[derive(Parser, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub reading: ReadingArgs,

    /// Path to the model artifact. Overrides `[model] path` from the config.
    #[arg(long, short)]
    pub model: Option<PathBuf>,
}

/// # Handle Predict Command (`handle_predict`)
///
/// 1. Loads configuration and resolves the model path.
/// 2. Loads the model (fatal on failure).
/// 3. Validates the readings and prints the assessment.
pub fn handle_predict(args: PredictArgs) -> Result<()> {
    let config = config::load_config()?;
    let model_path = effective_model_path(args.model.as_deref(), &config);
    let model = FloodModel::load(&model_path)?;

    let reading = args.reading.to_reading();
    let assessment = assess(&model, &reading)?;
    info!(
        "Prediction for {:?}: label {}",
        reading, assessment.label
    );

    println!("{}", assessment.headline);
    println!("{}", assessment.sms_line());
    Ok(())
}

/// Validates a reading and runs it through the model.
pub fn assess(model: &FloodModel, reading: &WeatherReading) -> Result<Assessment> {
    reading.validate()?;
    Ok(Assessment::from_label(model.predict_one(reading)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FloodAlertError;

    fn stump() -> FloodModel {
        FloodModel::from_json(
            r#"{
                "kind": "decision_tree",
                "features": ["rainfall", "temperature", "humidity"],
                "feature": [0, -2, -2],
                "threshold": [120.0, -2.0, -2.0],
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "class": [-1, 0, 1]
            }"#,
        )
        .expect("valid stump")
    }

    #[test]
    fn test_assess_maps_labels_to_messages() -> Result<()> {
        let model = stump();
        let wet = assess(&model, &WeatherReading::new(200.0, 26.0, 95.0))?;
        assert!(wet.flood_likely);
        assert_eq!(wet.headline, "🔴 Flood Likely! Please take precautions.");

        let dry = assess(&model, &WeatherReading::new(3.0, 30.0, 40.0))?;
        assert!(!dry.flood_likely);
        assert_eq!(dry.headline, "🟢 No Flood Risk Detected.");
        Ok(())
    }

    #[test]
    fn test_assess_rejects_negative_reading() {
        let err = assess(&stump(), &WeatherReading::new(-1.0, 20.0, 50.0)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FloodAlertError>(),
            Some(FloodAlertError::InvalidReading { field: "rainfall", .. })
        ));
    }
}
