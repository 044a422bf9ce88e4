//! cinema-ticket - In-memory cinema ticketing from the terminal
//!
//! This crate provides:
//! - A ticketing store for movies, users and tickets with sequential ids
//! - Purchase validation against existing users and movies
//! - An interactive numbered menu driving the store
//! - Layered settings from a config file and environment variables
//!
//! All state lives in memory and is lost when the process exits.
//!
//! # Example
//!
//! ```rust
//! use cinema_ticket::store::TicketingStore;
//!
//! let mut store = TicketingStore::new();
//! let movie = store.add_movie("Dune");
//! let user = store.add_user("Alice");
//!
//! let ticket = store.buy_ticket(user, movie)?;
//! assert!(store.cancel_ticket(ticket).is_ok());
//! assert!(store.cancel_ticket(ticket).is_err());
//! # Ok::<(), cinema_ticket::CinemaError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{CinemaError, Result};
