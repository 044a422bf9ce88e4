//! Error types for cinema-ticket
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is [`CinemaError`]. Store lookups that miss are ordinary, recoverable
//! outcomes and are reported through the two `*NotFound` variants.

use crate::core::{MovieId, TicketId, UserId};
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, CinemaError>;

/// Errors raised by the ticketing store, the shell and the CLI plumbing
#[derive(Debug, Error)]
pub enum CinemaError {
    /// A purchase referenced a user or a movie that does not exist.
    ///
    /// Which of the two was missing is intentionally not reported.
    #[error("user or movie not found")]
    UserOrMovieNotFound { user_id: UserId, movie_id: MovieId },

    #[error("ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CinemaError {
    /// Create an invalid-input error from any displayable message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether this error means a referenced entity does not exist
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserOrMovieNotFound { .. } | Self::TicketNotFound { .. }
        )
    }

    /// Whether the shell can keep running after this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UserOrMovieNotFound { .. } | Self::TicketNotFound { .. } | Self::InvalidInput(_)
        )
    }

    /// Whether the error comes from loading settings
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Message shown to the person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::UserOrMovieNotFound { .. } => "Error: user or movie not found".to_string(),
            Self::TicketNotFound { .. } => "No ticket found with that ID".to_string(),
            Self::InvalidInput(message) => message.clone(),
            Self::Config(e) => format!("Failed to load configuration: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints printed under the error message
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(_) => vec![
                "Check the file passed with --config".to_string(),
                "Check CINEMA_TICKET_* environment variables".to_string(),
            ],
            Self::Prompt(_) => vec!["Run with --plain to use line-based prompts".to_string()],
            _ => Vec::new(),
        }
    }
}
