//! # Flood Alert CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exercises `floodalert chat` both as a one-shot command and as an
//! interactive session fed through stdin. The chat needs no model file.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_one_shot_flood_today() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", "Is", "there", "a", "FLOOD", "today?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "🔍 I'm analyzing the flood risk based on today's input values.",
        ));
}

#[test]
fn test_chat_one_shot_uses_readings() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", "--rainfall", "12.5", "-t", "31", "-u", "80", "what's the weather"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "☁️ Today’s input: Rainfall = 12.5 mm, Temp = 31.0°C, Humidity = 80.0%.",
        ));
}

#[test]
fn test_chat_rule_order_wins() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", "will it flood tomorrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floods are caused by heavy rain"))
        .stdout(predicate::str::contains("forecast data").not());
}

#[test]
fn test_chat_fallback() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "🧠 I can answer flood, safety, and weather-related questions.",
        ));
}

#[test]
fn test_chat_empty_query_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_chat_interactive_session() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .arg("chat")
        .write_stdin("hello\nthank you\nbye\nflood\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'bye' to quit."))
        .stdout(predicate::str::contains("Suraksha Bot: 👋 Hello! I'm Suraksha Bot"))
        .stdout(predicate::str::contains("Suraksha Bot: 🙏 You're welcome. Stay safe!"))
        .stdout(predicate::str::contains("📘 Stay Informed. Stay Safe."))
        .stdout(predicate::str::contains("Floods are caused").not());
}

#[test]
fn test_chat_rejects_negative_reading() {
    let dir = tempfile::tempdir().unwrap();
    floodalert_in(dir.path())
        .args(["chat", "--rainfall", "-1", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rainfall reading"));
}
