//! # Suraksha Bot Rule Table
//!
//! File: cli/src/bot/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The bot's vocabulary is an ordered table of `IntentRule`s. Each rule pairs
//! a keyword predicate with the `Intent` it selects. The responder walks the
//! table top to bottom and stops at the first rule whose predicate matches
//! the lowercased query; `Intent::Fallback` is selected when nothing matches.
//!
//! Order is significant. "flood today" satisfies both `FloodToday` and
//! `FloodCauses`, and "will it flood tomorrow" satisfies both `FloodCauses`
//! and `Forecast`; the earlier rule wins in both cases.
//!
//! Matching is plain substring containment, so short keywords also match
//! inside longer words ("hi" in "this", "how" in "show").
//!
use crate::weather::{format_value, WeatherReading};
use serde::Serialize;

/// What the user asked about, one variant per row of `RULES` plus the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FloodToday,
    FloodCauses,
    SafetyStatus,
    CurrentWeather,
    PastData,
    Forecast,
    FloodDepth,
    SafetyTips,
    Greeting,
    Identity,
    Thanks,
    Fallback,
}

impl Intent {
    /// Produces the canned reply for this intent.
    ///
    /// Only `CurrentWeather` reads `context`; every other reply is static.
    pub fn reply(self, context: &WeatherReading) -> String {
        match self {
            Intent::FloodToday => "🔍 I'm analyzing the flood risk based on today's input values. Click 'Predict Flood Risk' to know.".into(),
            Intent::FloodCauses => "🌊 Floods are caused by heavy rain and humidity. Stay alert during the monsoon season.".into(),
            Intent::SafetyStatus => "🟢 You are safe if the system shows 'No Flood'. Always stay prepared.".into(),
            Intent::CurrentWeather => format!(
                "☁️ Today’s input: Rainfall = {} mm, Temp = {}°C, Humidity = {}%.",
                format_value(context.rainfall),
                format_value(context.temperature),
                format_value(context.humidity)
            ),
            Intent::PastData => "🕓 Sorry, I can't access past data. Please input values manually if you have them.".into(),
            Intent::Forecast => "📅 The system doesn’t predict tomorrow’s data. Please use forecast data.".into(),
            Intent::FloodDepth => "📏 Flood depth prediction is not available yet. Please refer to official weather departments.".into(),
            Intent::SafetyTips => "✅ Move to higher ground, carry essentials, avoid floodwaters, and listen to official alerts.".into(),
            Intent::Greeting => "👋 Hello! I'm Suraksha Bot, here to assist you with flood & weather queries.".into(),
            Intent::Identity => "🤖 I’m Suraksha Bot, your smart flood and weather assistant built by the Flood Alert Team.".into(),
            Intent::Thanks => "🙏 You're welcome. Stay safe!".into(),
            Intent::Fallback => "🧠 I can answer flood, safety, and weather-related questions. Try asking about today's flood risk or safety tips.".into(),
        }
    }
}

/// A keyword predicate over lowercased query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Every keyword must appear.
    AllOf(&'static [&'static str]),
    /// At least one keyword must appear.
    AnyOf(&'static [&'static str]),
}

impl Predicate {
    /// Tests the predicate against text that is already lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::AllOf(keywords) => keywords.iter().all(|k| normalized.contains(*k)),
            Predicate::AnyOf(keywords) => keywords.iter().any(|k| normalized.contains(*k)),
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub predicate: Predicate,
    pub intent: Intent,
}

/// The bot's rule table, in evaluation order.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        predicate: Predicate::AllOf(&["flood", "today"]),
        intent: Intent::FloodToday,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["flood"]),
        intent: Intent::FloodCauses,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["safe"]),
        intent: Intent::SafetyStatus,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["weather", "temperature"]),
        intent: Intent::CurrentWeather,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["yesterday"]),
        intent: Intent::PastData,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["tomorrow"]),
        intent: Intent::Forecast,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["depth"]),
        intent: Intent::FloodDepth,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["help", "how"]),
        intent: Intent::SafetyTips,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["hello", "hi"]),
        intent: Intent::Greeting,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["who"]),
        intent: Intent::Identity,
    },
    IntentRule {
        predicate: Predicate::AnyOf(&["thank"]),
        intent: Intent::Thanks,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_intent_but_fallback_once() {
        let intents: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
        assert_eq!(intents.len(), 11);
        assert!(!intents.contains(&Intent::Fallback));
        for (i, intent) in intents.iter().enumerate() {
            assert!(
                !intents[i + 1..].contains(intent),
                "{:?} appears twice in the rule table",
                intent
            );
        }
    }

    #[test]
    fn test_combined_rule_precedes_plain_flood_rule() {
        let combined = RULES
            .iter()
            .position(|r| r.intent == Intent::FloodToday)
            .unwrap();
        let plain = RULES
            .iter()
            .position(|r| r.intent == Intent::FloodCauses)
            .unwrap();
        assert!(combined < plain);
    }

    #[test]
    fn test_predicate_all_of() {
        let p = Predicate::AllOf(&["flood", "today"]);
        assert!(p.matches("is there a flood today"));
        assert!(!p.matches("is there a flood"));
        assert!(!p.matches("today"));
    }

    #[test]
    fn test_predicate_any_of_is_substring_based() {
        let p = Predicate::AnyOf(&["hello", "hi"]);
        assert!(p.matches("hi"));
        assert!(p.matches("this is odd"));
        assert!(!p.matches("hey"));
    }

    #[test]
    fn test_weather_reply_interpolates_in_field_order() {
        let reply = Intent::CurrentWeather.reply(&WeatherReading::new(10.0, 25.0, 60.0));
        assert_eq!(
            reply,
            "☁️ Today’s input: Rainfall = 10.0 mm, Temp = 25.0°C, Humidity = 60.0%."
        );
    }

    #[test]
    fn test_static_replies_ignore_context() {
        let a = Intent::Greeting.reply(&WeatherReading::default());
        let b = Intent::Greeting.reply(&WeatherReading::new(99.0, 40.0, 100.0));
        assert_eq!(a, b);
    }
}
