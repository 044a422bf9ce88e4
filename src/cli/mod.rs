//! Command-line interface for cinema-ticket

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::Parser;
use std::path::PathBuf;

/// In-memory cinema ticketing with an interactive menu
#[derive(Debug, Parser)]
#[command(name = "cinema-ticket", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Print results as JSON, one object per line
    #[arg(long)]
    pub json: bool,

    /// Use numbered line prompts even on a terminal
    #[arg(long)]
    pub plain: bool,

    /// Read settings from this file instead of the default location
    #[arg(short, long, value_name = "PATH", env = "CINEMA_TICKET_CONFIG")]
    pub config: Option<PathBuf>,
}
