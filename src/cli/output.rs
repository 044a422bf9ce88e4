//! Output formatting for the terminal
//!
//! Human-readable lines go to stdout (errors to stderr) and are coloured
//! with `colored` unless colours are disabled. In JSON mode each result is
//! printed as a single JSON object instead.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Renders messages in either human or JSON form
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter.
    ///
    /// `no_color` also switches off colouring globally for `colored`.
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json, no_color }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.red());
        }
    }

    /// Header line, e.g. above a listing
    pub fn heading(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.bold());
        }
    }

    /// Print any serializable value as one line of JSON on stdout
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }

    pub fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        self.json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_modes() {
        let formatter = OutputFormatter::new(true, true);
        assert!(formatter.is_json());

        let formatter = OutputFormatter::default();
        assert!(!formatter.is_json());
    }

    #[test]
    fn test_json_output_accepts_serializable_values() {
        let formatter = OutputFormatter::new(true, true);
        assert!(formatter.json(&serde_json::json!({ "movie_id": 1 })).is_ok());
    }
}
