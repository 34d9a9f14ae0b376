//! # Suraksha Bot Responder
//!
//! File: cli/src/bot/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Responder` maps one free-text query to one canned `Response`. It is a
//! pure function of the query and the current `WeatherReading`: nothing is
//! remembered between calls.
//!
//! ## Examples
//!
//! ```rust
//! use floodalert::bot::{Intent, Responder};
//! use floodalert::weather::WeatherReading;
//!
//! let bot = Responder::new();
//! let response = bot.respond("Is there a FLOOD today?", &WeatherReading::default());
//! assert_eq!(response.intent, Intent::FloodToday);
//! ```
//!
use super::rules::{Intent, IntentRule, RULES};
use crate::core::error::FloodAlertError;
use crate::weather::WeatherReading;
use serde::Serialize;
use tracing::debug;

/// The bot's answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// The rule that fired.
    pub intent: Intent,
    /// The reply text shown to the user.
    pub text: String,
}

/// First-match-wins dispatcher over an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Responder {
    rules: &'static [IntentRule],
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Creates a responder over the built-in rule table.
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Creates a responder over a custom rule table, evaluated in slice order.
    pub fn with_rules(rules: &'static [IntentRule]) -> Self {
        Self { rules }
    }

    /// Selects the intent for a query without producing a reply.
    ///
    /// The query is lowercased, then the first rule whose predicate matches
    /// wins. Returns `Intent::Fallback` if no rule matches.
    pub fn classify(&self, query: &str) -> Intent {
        let normalized = query.to_lowercase();
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(&normalized))
            .map_or(Intent::Fallback, |rule| rule.intent);
        debug!("Query {:?} classified as {:?}", query, intent);
        intent
    }

    /// Answers a query. Total over all strings, the empty string included.
    pub fn respond(&self, query: &str, context: &WeatherReading) -> Response {
        let intent = self.classify(query);
        Response {
            intent,
            text: intent.reply(context),
        }
    }

    /// Answers a query, refusing the empty string.
    ///
    /// Surfaces use this so an empty chat box produces no reply at all.
    /// Whitespace-only text is still a query and gets the fallback reply.
    pub fn try_respond(
        &self,
        query: &str,
        context: &WeatherReading,
    ) -> Result<Response, FloodAlertError> {
        if query.is_empty() {
            return Err(FloodAlertError::EmptyQuery);
        }
        Ok(self.respond(query, context))
    }
}
