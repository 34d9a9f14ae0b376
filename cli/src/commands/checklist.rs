//! # Checklist Command
//!
//! File: cli/src/commands/checklist.rs
//! Author: Christi Mahu
//!
//! `floodalert checklist` prints the static flood safety checklist.
//!
use crate::checklist::{CHECKLIST_FOOTER, ITEMS, TITLE};
use crate::core::error::Result;
use std::io::Write;

pub fn handle_checklist() -> Result<()> {
    let stdout = std::io::stdout();
    write_checklist(&mut stdout.lock())
}

/// Writes the checklist as plain text.
pub fn write_checklist<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out)?;
    for (i, item) in ITEMS.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, item.to_line())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", CHECKLIST_FOOTER)?;
    Ok(())
}
