//! Console output helpers shared by the text and JSON modes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Print a serializable result. Only JSON mode prints anything; text mode
/// output is written by the caller as it goes.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) -> Result<()> {
    if quiet || format != OutputFormat::Json {
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a progress line in text mode.
pub fn info(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    println!("{} {}", "→".cyan(), message);
}

/// Print a success line in text mode.
pub fn success(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a block of preformatted text in text mode.
pub fn block(text: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    print!("{}", text);
}
