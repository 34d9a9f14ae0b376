//! # Flood Alert Messages
//!
//! File: cli/src/alert.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a classifier label to what the user sees: a headline and the
//! simulated Hindi SMS alert. No message is actually sent anywhere.
//!
use crate::model::FloodLabel;
use serde::Serialize;

pub const FLOOD_HEADLINE: &str = "🔴 Flood Likely! Please take precautions.";
pub const NO_FLOOD_HEADLINE: &str = "🟢 No Flood Risk Detected.";
pub const FLOOD_SMS: &str =
    "⚠️ सावधान! भारी वर्षा के कारण बाढ़ की संभावना है। कृपया सुरक्षित स्थान पर जाएं।";
pub const NO_FLOOD_SMS: &str = "✅ कोई बाढ़ नहीं। आप सुरक्षित हैं।";

/// The user-facing result of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Raw class id (0 or 1).
    pub label: u8,
    pub flood_likely: bool,
    pub headline: &'static str,
    pub sms: &'static str,
}

impl Assessment {
    pub fn from_label(label: FloodLabel) -> Self {
        let (headline, sms) = match label {
            FloodLabel::FloodLikely => (FLOOD_HEADLINE, FLOOD_SMS),
            FloodLabel::NoFlood => (NO_FLOOD_HEADLINE, NO_FLOOD_SMS),
        };
        Self {
            label: label.as_class(),
            flood_likely: label == FloodLabel::FloodLikely,
            headline,
            sms,
        }
    }

    /// The SMS line as displayed under the headline.
    pub fn sms_line(&self) -> String {
        format!("📩 Hindi SMS Alert: {}", self.sms)
    }
}
