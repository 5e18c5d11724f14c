//! Terminal input for the `parse` command.

use std::io::BufRead;

use anyhow::{Context, Result};

pub const PASTE_PROMPT: &str = "Paste the resume text below. End input with an empty line:";

/// Reads lines until the first empty line or EOF and joins them with `\n`.
pub fn read_resume(reader: impl BufRead) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read resume from stdin")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}
