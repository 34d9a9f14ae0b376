//! # Suraksha Bot
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Suraksha Bot is the keyword-matching flood and weather assistant. It has
//! no conversation memory: each query is answered on its own from an ordered
//! rule table, with the current weather readings available for the one reply
//! that echoes them.
//!
//! ## Architecture
//!
//! - `rules`: the `Intent` enum, keyword `Predicate`s and the ordered `RULES` table
//! - `responder`: the first-match-wins `Responder` and its `Response`
//!
pub mod responder;
pub mod rules;

pub use responder::{Responder, Response};
pub use rules::{Intent, IntentRule, Predicate, RULES};
