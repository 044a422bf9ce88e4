//! cinema-ticket - In-memory cinema ticketing
//!
//! This is the main entry point for the cinema-ticket CLI application.
//! It parses flags, loads settings, sets up logging and runs the
//! interactive menu against a fresh store.

use cinema_ticket::cli::{Cli, OutputFormatter};
use cinema_ticket::config::Settings;
use cinema_ticket::error::{CinemaError, Result};
use cinema_ticket::interactive::{CinemaShell, LinePrompter, Prompter, TerminalPrompter};
use cinema_ticket::logging;
use cinema_ticket::store::TicketingStore;
use clap::Parser;
use std::io::IsTerminal;
use std::process;

/// Main entry point for the cinema-ticket CLI
///
/// Parses command-line arguments and runs the menu. Fatal errors are
/// printed with any available suggestions and the process exits with 1.
fn main() {
    let cli = Cli::parse();
    let logging = logging::init(cli.verbose);

    // Settings decide the output mode, so a failure here is reported with
    // the flag-only formatter.
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            handle_error(&e, &OutputFormatter::new(cli.json, cli.no_color));
            process::exit(1);
        },
    };

    logging.apply_level(&settings.log_level);
    let formatter = OutputFormatter::new(settings.json, !settings.color);

    if let Err(e) = run(&settings, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply_flags(cli.no_color, cli.json, cli.plain);
    Ok(settings)
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any unrecoverable error raised by the menu loop
fn run(settings: &Settings, formatter: &OutputFormatter) -> Result<()> {
    let mut store = TicketingStore::new();
    let stdin = std::io::stdin();

    if stdin.is_terminal() && !settings.plain {
        tracing::debug!("Using terminal prompts");
        run_shell(&mut store, TerminalPrompter::new(), settings, formatter)
    } else if settings.json {
        // Keep stdout for JSON results only
        let prompter = LinePrompter::new(stdin.lock(), std::io::stderr());
        run_shell(&mut store, prompter, settings, formatter)
    } else {
        let prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
        run_shell(&mut store, prompter, settings, formatter)
    }
}

fn run_shell<P: Prompter>(
    store: &mut TicketingStore,
    prompter: P,
    settings: &Settings,
    formatter: &OutputFormatter,
) -> Result<()> {
    CinemaShell::new(store, prompter, formatter)
        .show_banner(settings.show_banner)
        .run()
}

fn handle_error(error: &CinemaError, formatter: &OutputFormatter) {
    let suggestions = error.suggestions();

    if formatter.is_json() {
        // stdout carries the error object and nothing else
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{:?}", error),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    } else {
        formatter.error(&error.user_message());

        if !suggestions.is_empty() {
            formatter.info("\nSuggestions:");
            for suggestion in &suggestions {
                formatter.info(&format!("  • {suggestion}"));
            }
        }
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
