//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `floodalert chat` talks to Suraksha Bot from the terminal.
//!
//! ```bash
//! # One question, answered and exit
//! floodalert chat is there a flood today
//!
//! # Weather question with the current readings
//! floodalert chat --rainfall 10 --temperature 25 --humidity 60 "what's the weather"
//!
//! # Interactive loop; type 'bye' to quit
//! floodalert chat
//! ```
//!
//! Every line is answered on its own; nothing carries over between lines. An
//! empty query gets no reply at all.
//!
use super::ReadingArgs;
use crate::bot::Responder;
use crate::core::error::{FloodAlertError, Result};
use crate::weather::WeatherReading;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const BOT_LABEL: &str = "Suraksha Bot";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// The question to ask. Words are joined with spaces. Omit to start an
    /// interactive session.
    pub query: Vec<String>,

    #[command(flatten)]
    pub reading: ReadingArgs,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Answers the query given on the command line, or runs the interactive loop
/// on stdin/stdout when no query was given.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    let reading = args.reading.to_reading();
    reading.validate()?;
    let bot = Responder::new();

    if args.query.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return run_session(&bot, &reading, stdin.lock(), stdout.lock());
    }

    let query = args.query.join(" ");
    if let Some(reply) = answer(&bot, &query, &reading)? {
        println!("{}", reply);
    }
    Ok(())
}

/// Answers one query. Returns `Ok(None)` for the empty query.
pub fn answer(bot: &Responder, query: &str, reading: &WeatherReading) -> Result<Option<String>> {
    match bot.try_respond(query, reading) {
        Ok(response) => Ok(Some(response.text)),
        Err(FloodAlertError::EmptyQuery) => {
            debug!("Empty query, no reply.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// # Interactive Session (`run_session`)
///
/// Reads queries line by line until `bye` or end of input. Generic over the
/// reader and writer so it can be driven from tests.
pub fn run_session<R: BufRead, W: Write>(
    bot: &Responder,
    reading: &WeatherReading,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(
        output,
        "🤖 {} - Your Flood & Weather Assistant. Type 'bye' to quit.",
        BOT_LABEL
    )?;

    loop {
        write!(output, "💬 You: ")?;
        output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim().eq_ignore_ascii_case("bye") {
            writeln!(output, "{}: 📘 Stay Informed. Stay Safe.", BOT_LABEL)?;
            break;
        }

        if let Some(reply) = answer(bot, query, reading)? {
            writeln!(output, "{}: {}", BOT_LABEL, reply)?;
        }
    }
    Ok(())
}
